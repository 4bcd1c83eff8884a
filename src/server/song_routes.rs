//! Song HTTP routes.
//!
//! Provides endpoints for:
//! - Uploading a song (audio blob + metadata, admin password protected)
//! - Fetching songs with an optional mood filter

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::song_store::SongRecord;
use crate::songs::SubmitError;

use super::state::{GuardedSongService, ServerState};

// Audio blobs are held in memory for the duration of the request.
const MAX_UPLOAD_BODY_BYTES: usize = 50 * 1024 * 1024;

// =============================================================================
// Request/Response Types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct UploadSongResponse {
    pub success: bool,
    pub message: String,
    pub song: SongRecord,
}

#[derive(Debug, Serialize)]
pub struct FetchSongsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SongRecord>,
}

#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FailureResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    fn with_error(message: impl Into<String>, error: impl ToString) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchSongsQuery {
    pub mood: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /songs - Upload a song (multipart/form-data)
async fn upload_song(
    State(service): State<GuardedSongService>,
    mut multipart: Multipart,
) -> Response {
    let mut password = String::new();
    let mut title = String::new();
    let mut mood = String::new();
    let mut filename = String::new();
    let mut audio: Vec<u8> = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "audio" => {
                filename = field.file_name().unwrap_or("audio").to_string();
                match field.bytes().await {
                    Ok(bytes) => audio = bytes.to_vec(),
                    Err(e) => {
                        warn!("Failed to read audio field: {}", e);
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(FailureResponse::new("Failed to read audio file")),
                        )
                            .into_response();
                    }
                }
            }
            "password" | "title" | "mood" => {
                let value = match field.text().await {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("Failed to read field {}: {}", field_name, e);
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(FailureResponse::new(format!(
                                "Failed to read field {}",
                                field_name
                            ))),
                        )
                            .into_response();
                    }
                };
                match field_name.as_str() {
                    "password" => password = value,
                    "title" => title = value,
                    _ => mood = value,
                }
            }
            _ => {}
        }
    }

    debug!("Upload request: title={:?} mood={:?} ({} audio bytes)", title, mood, audio.len());

    match service
        .submit_song(&password, &title, &mood, &audio, &filename)
        .await
    {
        Ok(song) => Json(UploadSongResponse {
            success: true,
            message: "Song uploaded and saved successfully!".to_string(),
            song,
        })
        .into_response(),
        Err(err) => submit_error_response(err),
    }
}

fn submit_error_response(err: SubmitError) -> Response {
    match &err {
        SubmitError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(FailureResponse::new(err.to_string())),
        )
            .into_response(),
        SubmitError::Validation(_) => (
            StatusCode::BAD_REQUEST,
            Json(FailureResponse::new(err.to_string())),
        )
            .into_response(),
        SubmitError::Storage(_) | SubmitError::Persistence(_) => {
            warn!("Song upload failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::with_error("Song upload failed", err)),
            )
                .into_response()
        }
    }
}

/// GET /fetch/songs?mood= - Fetch songs with an optional mood filter
async fn fetch_songs(
    State(service): State<GuardedSongService>,
    Query(query): Query<FetchSongsQuery>,
) -> Response {
    match service.list_songs(query.mood.as_deref()) {
        Ok(data) => Json(FetchSongsResponse {
            success: true,
            count: data.len(),
            data,
        })
        .into_response(),
        Err(err) => {
            warn!("Failed to fetch songs: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::with_error("Failed to fetch songs", err)),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Router Construction
// =============================================================================

/// Build the song routes.
///
/// - POST /songs - Upload a song
/// - GET /fetch/songs - Fetch songs, optional `mood` query param
pub fn song_routes() -> Router<ServerState> {
    let upload_route = Router::new()
        .route("/songs", post(upload_song))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES));

    upload_route.route("/fetch/songs", get(fetch_songs))
}
