//! Song metadata storage.
//!
//! The `SongStore` trait abstracts the metadata store so the server can run
//! against SQLite in production and in-memory fakes in tests.

mod models;
mod schema;
mod sqlite_song_store;
mod trait_def;

pub use models::{SongDraft, SongRecord};
pub use sqlite_song_store::SqliteSongStore;
pub use trait_def::SongStore;
