//! Audio blob hosting.
//!
//! The media vault is an external service that accepts a binary blob plus a
//! filename and returns a publicly fetchable URL. The server never serves
//! audio bytes itself; song records only carry vault URLs.

mod client;

pub use client::HttpMediaVault;

use anyhow::Result;
use async_trait::async_trait;

/// Result of a completed vault upload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StoredMedia {
    /// Publicly fetchable URL of the uploaded blob.
    pub url: String,
    /// Vault-assigned identifier, if the provider returns one.
    #[serde(rename = "fileId", default)]
    pub file_id: Option<String>,
}

/// Trait for the external blob-hosting collaborator.
#[async_trait]
pub trait MediaVault: Send + Sync {
    /// Upload a blob and return its public URL. The call either completes
    /// the upload or fails; there is no partial-upload state visible to the
    /// caller.
    async fn upload(&self, filename: &str, bytes: &[u8]) -> Result<StoredMedia>;
}
