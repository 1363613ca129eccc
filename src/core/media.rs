//! File intake and source bookkeeping.

use serde::{Deserialize, Serialize};

use super::error::{PlayerError, PlayerResult};

/// How a file reached the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrigin {
    Picker,
    Drop,
}

/// A file handle held by the web view, identified by an opaque token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingFile {
    pub token: u64,
    pub name: String,
    /// Declared MIME type; empty when the platform could not tell.
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub size: u64,
    pub origin: FileOrigin,
}

impl IncomingFile {
    /// Check if the declared type is a video type.
    pub fn is_video(&self) -> bool {
        self.mime.starts_with("video/")
    }
}

/// Decide whether an incoming file may become the playback source.
///
/// Picker selections are trusted (the input already filters on `video/*`);
/// drops must declare a video type.
pub fn check_intake(file: &IncomingFile) -> PlayerResult<()> {
    match file.origin {
        FileOrigin::Picker => Ok(()),
        FileOrigin::Drop if file.is_video() => Ok(()),
        FileOrigin::Drop => Err(PlayerError::NotVideo {
            name: file.name.clone(),
            mime: file.mime.clone(),
        }),
    }
}

/// A revocable object URL exposed to the media element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceUrl(pub String);

impl SourceUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The source currently bound to the media element.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundSource {
    pub url: SourceUrl,
    pub name: String,
}

/// Tracks the bound source so a replaced URL can be released.
#[derive(Debug, Clone, Default)]
pub struct SourceBinding {
    current: Option<BoundSource>,
}

impl SourceBinding {
    #[allow(dead_code)]
    pub fn current(&self) -> Option<&BoundSource> {
        self.current.as_ref()
    }

    /// Bind a new source, returning the one it replaces.
    pub fn replace(&mut self, next: BoundSource) -> Option<BoundSource> {
        self.current.replace(next)
    }
}
