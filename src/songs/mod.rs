//! Song upload and retrieval services.

mod service;

pub use service::{QueryError, SongService, SubmitError};
