//! Session controller state machine.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::song_store::SongRecord;

use super::api::PlayerApi;
use super::detection::ExpressionScores;
use super::playback::{PlaybackAction, PlaybackState};

/// Webcam/detection flow phase.
///
/// `Detecting` only exists for the duration of one explicit, user-triggered
/// detection pass; there is no automatic polling. `CameraDenied` is terminal
/// for the session and never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    ModelLoading,
    Streaming,
    Detecting,
    CameraDenied,
}

/// Outcome of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionOutcome {
    MoodFound { mood: String, songs_found: usize },
    NoFaceFound,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Camera access denied: {0}")]
    CameraDenied(String),

    #[error("Expression detector unavailable: {0}")]
    DetectorUnavailable(String),

    #[error("Session is not streaming")]
    NotStreaming,

    #[error("Incorrect Password")]
    IncorrectPassword,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Api(#[from] anyhow::Error),
}

/// The pretrained facial-expression detector, treated as a black box.
#[async_trait]
pub trait ExpressionDetector: Send + Sync {
    /// Load the detector models. Must complete before any detection.
    async fn load_models(&self) -> Result<()>;

    /// Run one detection pass against the current video frame.
    /// `None` means no face was found.
    async fn detect(&self) -> Result<Option<ExpressionScores>>;
}

/// Camera access. Opening may be refused by the user.
#[async_trait]
pub trait Webcam: Send + Sync {
    async fn open(&self) -> Result<Box<dyn WebcamStream>>;
}

/// An open webcam stream. Exactly one per session; its tracks must be
/// stopped when the session ends so camera access is not leaked.
pub trait WebcamStream: Send {
    fn stop_tracks(&mut self);
}

/// A selected audio file, held in memory until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Upload form state. Preserved across failed submissions, reset on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    pub mood: String,
    pub file: Option<AudioFile>,
    pub password: String,
}

/// Owns the webcam lifecycle, detection, the upload form and playback state
/// for one client session.
pub struct SessionController {
    phase: SessionPhase,
    detector: Arc<dyn ExpressionDetector>,
    webcam: Arc<dyn Webcam>,
    api: Arc<dyn PlayerApi>,
    stream: Option<Box<dyn WebcamStream>>,
    songs: Vec<SongRecord>,
    detected_mood: Option<String>,
    playback: PlaybackState,
    form: UploadForm,
    panel_open: bool,
    /// Compiled-in copy of the admin secret used for the pre-submit check.
    /// UX shortcut only; the server performs the authoritative check.
    password_hint: String,
}

impl SessionController {
    pub fn new(
        detector: Arc<dyn ExpressionDetector>,
        webcam: Arc<dyn Webcam>,
        api: Arc<dyn PlayerApi>,
        password_hint: String,
    ) -> Self {
        Self {
            phase: SessionPhase::Idle,
            detector,
            webcam,
            api,
            stream: None,
            songs: Vec::new(),
            detected_mood: None,
            playback: PlaybackState::default(),
            form: UploadForm::default(),
            panel_open: false,
            password_hint,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn detected_mood(&self) -> Option<&str> {
        self.detected_mood.as_deref()
    }

    /// Load detector models and open the webcam. Camera refusal is terminal
    /// for the session and surfaced to the user, never retried here.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Idle => {}
            // A denied session stays failed; never report it as started.
            SessionPhase::CameraDenied => {
                return Err(SessionError::CameraDenied(
                    "camera access was denied".to_string(),
                ))
            }
            _ => return Ok(()),
        }

        self.phase = SessionPhase::ModelLoading;
        if let Err(err) = self.detector.load_models().await {
            self.phase = SessionPhase::Idle;
            return Err(SessionError::DetectorUnavailable(err.to_string()));
        }
        debug!("Detector models loaded");

        match self.webcam.open().await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.phase = SessionPhase::Streaming;
                info!("Webcam streaming");
                Ok(())
            }
            Err(err) => {
                warn!("Camera access denied: {}", err);
                self.phase = SessionPhase::CameraDenied;
                Err(SessionError::CameraDenied(err.to_string()))
            }
        }
    }

    /// Run one user-triggered detection pass. On a detected mood the song
    /// list is refreshed from the backend; with no face found nothing is
    /// fetched and the displayed list is left untouched.
    pub async fn detect_once(&mut self) -> Result<DetectionOutcome, SessionError> {
        if self.phase != SessionPhase::Streaming {
            return Err(SessionError::NotStreaming);
        }

        self.phase = SessionPhase::Detecting;
        let detection = self.detector.detect().await;
        self.phase = SessionPhase::Streaming;

        let scores = match detection {
            Ok(Some(scores)) => scores,
            Ok(None) => return Ok(DetectionOutcome::NoFaceFound),
            Err(err) => return Err(SessionError::DetectorUnavailable(err.to_string())),
        };

        let mood = match scores.dominant() {
            Some((mood, score)) => {
                debug!("Dominant expression {} ({:.2})", mood, score);
                mood.to_string()
            }
            None => return Ok(DetectionOutcome::NoFaceFound),
        };

        let songs = self.api.fetch_songs(Some(&mood)).await?;
        info!("You look {}: {} songs", mood, songs.len());

        let songs_found = songs.len();
        self.songs = songs;
        self.detected_mood = Some(mood.clone());

        Ok(DetectionOutcome::MoodFound { mood, songs_found })
    }

    pub fn open_upload_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn is_upload_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UploadForm {
        &mut self.form
    }

    /// Submit the upload form. On success the form resets and the panel
    /// closes; on any failure the form is preserved and the panel stays
    /// open so the user can correct and retry.
    pub async fn submit_upload(&mut self) -> Result<SongRecord, SessionError> {
        if self.form.password != self.password_hint {
            return Err(SessionError::IncorrectPassword);
        }
        if self.form.title.is_empty() {
            return Err(SessionError::MissingField("title"));
        }
        if self.form.mood.is_empty() {
            return Err(SessionError::MissingField("mood"));
        }
        let file = match &self.form.file {
            Some(file) => file.clone(),
            None => return Err(SessionError::MissingField("file")),
        };

        let record = self
            .api
            .submit_song(
                &self.form.password,
                &self.form.title,
                &self.form.mood,
                file.bytes,
                &file.name,
            )
            .await?;

        self.form = UploadForm::default();
        self.panel_open = false;
        Ok(record)
    }

    pub fn toggle_playback(&mut self, song_id: &str) -> Vec<PlaybackAction> {
        self.playback.toggle(song_id)
    }

    pub fn currently_playing(&self) -> Option<&str> {
        self.playback.currently_playing()
    }

    /// End the session, stopping the webcam stream tracks.
    pub fn end_session(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop_tracks();
        }
        self.phase = SessionPhase::Idle;
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.end_session();
    }
}
