//! Moody Player Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod media_vault;
pub mod player;
pub mod server;
pub mod song_store;
pub mod songs;

// Re-export commonly used types for convenience
pub use media_vault::{HttpMediaVault, MediaVault, StoredMedia};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
pub use song_store::{SongRecord, SongStore, SqliteSongStore};
pub use songs::SongService;
