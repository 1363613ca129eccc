//! Notifications forwarded from the web view to the controller.

use serde::Deserialize;

use super::fullscreen::FullscreenTarget;
use super::media::IncomingFile;

/// A key press seen by the document-level listener.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Focus was in a text-entry field when the key went down.
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    FileChosen { file: IncomingFile },
    FileDropped { file: Option<IncomingFile> },
    DragOver,
    DragLeave,
    RateChange { rate: f64 },
    FullscreenChange { target: FullscreenTarget },
    KeyDown(KeyPress),
}
