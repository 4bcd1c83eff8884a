//! In-memory collaborators for end-to-end tests

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use moody_player_server::media_vault::{MediaVault, StoredMedia};

/// Media vault that keeps uploads in memory and records every filename it
/// was asked to store. Lets tests assert that the credential check happens
/// before any vault call, and can be switched into a failing mode.
#[derive(Default)]
pub struct RecordingVault {
    uploads: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingVault {
    /// Filenames of all blobs uploaded so far, in order.
    pub fn uploaded_filenames(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    /// Make every subsequent upload fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl MediaVault for RecordingVault {
    async fn upload(&self, filename: &str, _bytes: &[u8]) -> Result<StoredMedia> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("vault rejected the blob");
        }
        self.uploads.lock().unwrap().push(filename.to_string());
        Ok(StoredMedia {
            url: format!("https://vault.test/{}", filename),
            file_id: Some(format!("file-{}", filename)),
        })
    }
}
