//! Single-audio-at-a-time playback state.

/// An action the UI must apply to its audio elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackAction {
    Pause(String),
    Play(String),
}

/// Tracks which song is currently playing. At most one song may be in the
/// playing state at any time.
#[derive(Debug, Default)]
pub struct PlaybackState {
    current: Option<String>,
}

impl PlaybackState {
    pub fn currently_playing(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Toggle playback of a song. Toggling the playing song pauses it and
    /// clears the current selection; toggling another song pauses whatever
    /// was playing before starting the new one.
    pub fn toggle(&mut self, song_id: &str) -> Vec<PlaybackAction> {
        if self.current.as_deref() == Some(song_id) {
            self.current = None;
            return vec![PlaybackAction::Pause(song_id.to_string())];
        }

        let mut actions = Vec::new();
        if let Some(previous) = self.current.take() {
            actions.push(PlaybackAction::Pause(previous));
        }
        actions.push(PlaybackAction::Play(song_id.to_string()));
        self.current = Some(song_id.to_string());
        actions
    }
}
