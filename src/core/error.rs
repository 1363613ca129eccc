//! Error types for the player core.

use thiserror::Error;

/// Failures surfaced by the media, fullscreen and intake paths.
///
/// None of these are fatal: the controller logs them and stays in its
/// current state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    /// The eval channel to the web view failed or returned garbage.
    #[error("webview bridge error: {0}")]
    Bridge(String),

    /// The platform refused the call (e.g. fullscreen outside a user gesture).
    #[error("rejected by platform: {0}")]
    Rejected(String),

    #[error("not a video file: {name} ({mime})")]
    NotVideo { name: String, mime: String },

    #[error("drop contained no file")]
    NoFile,

    #[error("unknown file handle {0}")]
    UnknownFile(u64),
}

impl From<serde_json::Error> for PlayerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Bridge(e.to_string())
    }
}

pub type PlayerResult<T> = Result<T, PlayerError>;
