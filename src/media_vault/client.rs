//! HTTP client for the external media vault service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::{MediaVault, StoredMedia};

/// HTTP client for an ImageKit-style upload endpoint.
///
/// The provider authenticates with a private key sent as basic-auth username
/// and expects a multipart form with `file` and `fileName` fields.
pub struct HttpMediaVault {
    client: reqwest::Client,
    upload_url: String,
    private_key: String,
}

impl HttpMediaVault {
    /// Create a new vault client.
    ///
    /// # Arguments
    /// * `upload_url` - Full URL of the provider's upload endpoint
    /// * `private_key` - Provider credential
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(upload_url: String, private_key: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        let upload_url = upload_url.trim_end_matches('/').to_string();

        Self {
            client,
            upload_url,
            private_key,
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Vault object names carry a random prefix so repeated uploads of the
    /// same filename never collide.
    fn object_name(filename: &str) -> String {
        format!("{}-{}", Uuid::new_v4(), filename)
    }
}

#[async_trait]
impl MediaVault for HttpMediaVault {
    async fn upload(&self, filename: &str, bytes: &[u8]) -> Result<StoredMedia> {
        let object_name = Self::object_name(filename);
        debug!(
            "Uploading {} ({} bytes) to media vault as {}",
            filename,
            bytes.len(),
            object_name
        );

        let file_part = reqwest::multipart::Part::bytes(bytes.to_vec())
            .file_name(object_name.clone())
            .mime_str("application/octet-stream")
            .context("Failed to build multipart file part")?;
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("fileName", object_name);

        let response = self
            .client
            .post(&self.upload_url)
            .basic_auth(&self.private_key, Option::<&str>::None)
            .multipart(form)
            .send()
            .await
            .context("Failed to connect to media vault")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Media vault upload failed with status: {}",
                response.status()
            );
        }

        response
            .json()
            .await
            .context("Failed to parse media vault response")
    }
}
