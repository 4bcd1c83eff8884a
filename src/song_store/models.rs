use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted song. Created exactly once by the upload flow and never
/// mutated afterwards; deletion only happens out-of-band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Store-assigned identifier. Serialized as `_id` on the wire.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub mood: String,
    /// Public URL of the audio blob in the media vault.
    pub audio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a song record. The audio URL must already point at a
/// completed vault upload before this is handed to the store.
#[derive(Debug, Clone)]
pub struct SongDraft {
    pub title: String,
    pub mood: String,
    pub audio: String,
}
