use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

use super::models::{SongDraft, SongRecord};
use super::schema::{CREATE_SONGS_SCHEMA, SONGS_DB_VERSION};
use super::trait_def::SongStore;

pub struct SqliteSongStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSongStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let is_new_db = !path.exists();

        let conn = Connection::open(path).context("Failed to open songs database")?;
        conn.execute("PRAGMA foreign_keys = ON;", [])?;

        if is_new_db {
            info!("Creating new songs database at {:?}", path);
            conn.execute_batch(CREATE_SONGS_SCHEMA)
                .context("Failed to create songs schema")?;
            conn.execute(&format!("PRAGMA user_version = {}", SONGS_DB_VERSION), [])?;
        } else {
            let db_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
            if db_version != SONGS_DB_VERSION {
                anyhow::bail!(
                    "Songs database version {} does not match expected version {}",
                    db_version,
                    SONGS_DB_VERSION
                );
            }
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn row_to_song(row: &rusqlite::Row) -> rusqlite::Result<SongRecord> {
        let created_at_str: String = row.get("created_at")?;
        Ok(SongRecord {
            id: row.get("id")?,
            title: row.get("title")?,
            mood: row.get("mood")?,
            audio: row.get("audio")?,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .map(|dt| dt.with_timezone(&Utc))
                .ok(),
        })
    }
}

impl SongStore for SqliteSongStore {
    fn insert_song(&self, draft: SongDraft) -> Result<SongRecord> {
        let created_at = Utc::now();
        let record = SongRecord {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            mood: draft.mood,
            audio: draft.audio,
            created_at: Some(created_at),
        };

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO songs (id, title, mood, audio, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.id,
                record.title,
                record.mood,
                record.audio,
                created_at.to_rfc3339(),
            ],
        )
        .context("Failed to insert song")?;

        Ok(record)
    }

    fn list_songs(&self, mood: Option<&str>) -> Result<Vec<SongRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut songs = Vec::new();

        match mood {
            Some(mood) => {
                let mut stmt = conn.prepare(
                    "SELECT id, title, mood, audio, created_at FROM songs \
                     WHERE mood = ?1 ORDER BY rowid",
                )?;
                let rows = stmt.query_map(params![mood], Self::row_to_song)?;
                for row in rows {
                    songs.push(row.context("Failed to read song row")?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, title, mood, audio, created_at FROM songs ORDER BY rowid",
                )?;
                let rows = stmt.query_map([], Self::row_to_song)?;
                for row in rows {
                    songs.push(row.context("Failed to read song row")?);
                }
            }
        }

        Ok(songs)
    }

    fn get_songs_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM songs", [], |row| row.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}
