//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides methods for the server's endpoints.
//! When API routes or request formats change, update only this file.

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use std::time::Duration;

use super::constants::*;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// POST /v1/songs with the full multipart form
    pub async fn upload_song(
        &self,
        password: &str,
        title: &str,
        mood: &str,
        audio: &[u8],
        filename: &str,
    ) -> Response {
        let form = Form::new()
            .text("password", password.to_string())
            .text("title", title.to_string())
            .text("mood", mood.to_string())
            .part(
                "audio",
                Part::bytes(audio.to_vec())
                    .file_name(filename.to_string())
                    .mime_str("audio/mpeg")
                    .expect("Failed to build audio part"),
            );
        self.send_upload(form).await
    }

    /// POST /v1/songs with an arbitrary form, for malformed-request tests
    pub async fn send_upload(&self, form: Form) -> Response {
        self.client
            .post(format!("{}/v1/songs", self.base_url))
            .multipart(form)
            .send()
            .await
            .expect("Upload request failed")
    }

    /// GET /v1/fetch/songs with an optional mood filter
    pub async fn fetch_songs(&self, mood: Option<&str>) -> Response {
        let mut request = self.client.get(format!("{}/v1/fetch/songs", self.base_url));
        if let Some(mood) = mood {
            request = request.query(&[("mood", mood)]);
        }
        request.send().await.expect("Fetch songs request failed")
    }
}
