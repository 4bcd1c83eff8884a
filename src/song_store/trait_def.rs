//! SongStore trait definition.

use anyhow::Result;

use super::models::{SongDraft, SongRecord};

/// Trait for song metadata storage backends.
pub trait SongStore: Send + Sync {
    /// Insert a new song record, assigning its identity and creation
    /// timestamp. Returns the record as persisted.
    fn insert_song(&self, draft: SongDraft) -> Result<SongRecord>;

    /// List songs, optionally filtered by exact mood value. No filter means
    /// all songs in insertion order. An empty result is not an error.
    fn list_songs(&self, mood: Option<&str>) -> Result<Vec<SongRecord>>;

    /// Number of songs in the store.
    fn get_songs_count(&self) -> usize;
}
