use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::media_vault::MediaVault;
use crate::song_store::{SongDraft, SongRecord, SongStore};

/// Failure modes of a song submission, in the order they are checked.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Unauthorized: Incorrect Password")]
    Unauthorized,

    #[error("Missing required field: {0}")]
    Validation(&'static str),

    #[error("Audio upload failed: {0}")]
    Storage(#[source] anyhow::Error),

    #[error("Failed to save song: {0}")]
    Persistence(#[source] anyhow::Error),
}

#[derive(Debug, Error)]
#[error("Song query failed: {0}")]
pub struct QueryError(#[source] pub anyhow::Error);

/// Upload and retrieval over the song store and media vault.
///
/// Holds no mutable state of its own; every request is handled
/// independently.
pub struct SongService {
    store: Arc<dyn SongStore>,
    vault: Arc<dyn MediaVault>,
    admin_password: String,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, vault: Arc<dyn MediaVault>, admin_password: String) -> Self {
        Self {
            store,
            vault,
            admin_password,
        }
    }

    /// Submit a new song: credential check, field validation, vault upload,
    /// then store insert, strictly in that order. The vault upload must
    /// complete before persistence is attempted; a blob whose insert then
    /// fails is orphaned in the vault and not retried.
    pub async fn submit_song(
        &self,
        password: &str,
        title: &str,
        mood: &str,
        audio: &[u8],
        filename: &str,
    ) -> Result<SongRecord, SubmitError> {
        if password != self.admin_password {
            return Err(SubmitError::Unauthorized);
        }

        if title.is_empty() {
            return Err(SubmitError::Validation("title"));
        }
        if mood.is_empty() {
            return Err(SubmitError::Validation("mood"));
        }
        if audio.is_empty() {
            return Err(SubmitError::Validation("audio"));
        }

        let stored = self
            .vault
            .upload(filename, audio)
            .await
            .map_err(SubmitError::Storage)?;
        debug!("Audio uploaded to vault: {}", stored.url);

        let record = self
            .store
            .insert_song(SongDraft {
                title: title.to_string(),
                mood: mood.to_string(),
                audio: stored.url,
            })
            .map_err(SubmitError::Persistence)?;

        info!("Song {} ({}) saved with mood {}", record.title, record.id, record.mood);
        Ok(record)
    }

    /// List songs, optionally filtered by exact mood value. An empty or
    /// missing filter returns everything; zero matches is a success.
    pub fn list_songs(&self, mood: Option<&str>) -> Result<Vec<SongRecord>, QueryError> {
        let mood = mood.filter(|m| !m.is_empty());
        self.store.list_songs(mood).map_err(QueryError)
    }

    pub fn songs_count(&self) -> usize {
        self.store.get_songs_count()
    }
}
