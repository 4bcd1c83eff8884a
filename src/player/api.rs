//! HTTP client for the moody-player backend.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::song_store::SongRecord;

/// Backend API as seen by the client session controller.
#[async_trait]
pub trait PlayerApi: Send + Sync {
    /// Fetch songs, optionally filtered by mood.
    async fn fetch_songs(&self, mood: Option<&str>) -> Result<Vec<SongRecord>>;

    /// Submit a new song. The server performs the authoritative password
    /// check regardless of any client-side pre-check.
    async fn submit_song(
        &self,
        password: &str,
        title: &str,
        mood: &str,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<SongRecord>;
}

#[derive(Deserialize)]
struct FetchSongsPayload {
    success: bool,
    #[allow(dead_code)]
    count: usize,
    data: Vec<SongRecord>,
}

#[derive(Deserialize)]
struct UploadSongPayload {
    song: SongRecord,
}

#[derive(Deserialize)]
struct FailurePayload {
    message: String,
}

/// Reqwest-backed implementation of `PlayerApi`.
pub struct HttpPlayerApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlayerApi {
    /// Create a new API client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:3000")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn failure_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<FailurePayload>().await {
            Ok(payload) => payload.message,
            Err(_) => format!("Request failed with status {}", status),
        }
    }
}

#[async_trait]
impl PlayerApi for HttpPlayerApi {
    async fn fetch_songs(&self, mood: Option<&str>) -> Result<Vec<SongRecord>> {
        let mut request = self
            .client
            .get(format!("{}/v1/fetch/songs", self.base_url));
        if let Some(mood) = mood {
            request = request.query(&[("mood", mood)]);
        }

        let response = request
            .send()
            .await
            .context("Failed to connect to the song server")?;

        if !response.status().is_success() {
            anyhow::bail!(Self::failure_message(response).await);
        }

        let payload: FetchSongsPayload = response
            .json()
            .await
            .context("Failed to parse song list response")?;
        if !payload.success {
            anyhow::bail!("Song server reported failure");
        }
        Ok(payload.data)
    }

    async fn submit_song(
        &self,
        password: &str,
        title: &str,
        mood: &str,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<SongRecord> {
        let audio_part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .context("Failed to build audio part")?;
        let form = reqwest::multipart::Form::new()
            .text("password", password.to_string())
            .text("title", title.to_string())
            .text("mood", mood.to_string())
            .part("audio", audio_part);

        let response = self
            .client
            .post(format!("{}/v1/songs", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("Failed to connect to the song server")?;

        if !response.status().is_success() {
            anyhow::bail!(Self::failure_message(response).await);
        }

        let payload: UploadSongPayload = response
            .json()
            .await
            .context("Failed to parse upload response")?;
        Ok(payload.song)
    }
}
