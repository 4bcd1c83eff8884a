//! Shared constants for end-to-end tests

/// Admin password configured on every test server.
pub const ADMIN_PASS: &str = "test-admin-password";

/// Timeout for individual HTTP requests.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// How long to wait for a spawned server to become ready.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;

/// Poll interval while waiting for readiness.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
