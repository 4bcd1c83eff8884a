//! Common test infrastructure
//!
//! This module provides everything needed for end-to-end tests: an isolated
//! server per test (temp SQLite database plus an in-memory recording media
//! vault) and a reqwest-based client wrapping the HTTP routes.

mod client;
mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use constants::*;
pub use fixtures::RecordingVault;
pub use server::TestServer;
