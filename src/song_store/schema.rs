//! SQLite schema for the songs database.

/// Current schema version, stored in `PRAGMA user_version`.
pub const SONGS_DB_VERSION: i64 = 1;

pub const CREATE_SONGS_SCHEMA: &str = "
CREATE TABLE songs (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    mood TEXT NOT NULL,
    audio TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX idx_songs_mood ON songs(mood);
";
