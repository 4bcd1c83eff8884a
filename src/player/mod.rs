//! Client session controller.
//!
//! The browser-facing player owns three independent single-flow concerns:
//! the webcam/detection flow, the upload form, and audio playback. The
//! controller here is the library-level state machine behind that UI; the
//! webcam, the expression detector and the backend API are collaborators
//! injected as traits so every transition is testable without a browser.

mod api;
mod controller;
mod detection;
mod playback;

pub use api::{HttpPlayerApi, PlayerApi};
pub use controller::{
    AudioFile, DetectionOutcome, ExpressionDetector, SessionController, SessionError,
    SessionPhase, UploadForm, Webcam, WebcamStream,
};
pub use detection::ExpressionScores;
pub use playback::{PlaybackAction, PlaybackState};
