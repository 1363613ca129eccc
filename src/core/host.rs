//! Capability interfaces the player controller drives.
//!
//! The controller never touches the web view directly. Everything goes
//! through these traits so the same logic runs against the real bridge
//! (`core::bridge::WebviewHost`) and against a recording fake in tests.

#![allow(async_fn_in_trait)]

use std::future::Future;
use std::pin::Pin;

use super::error::PlayerResult;
use super::fullscreen::FullscreenTarget;
use super::media::{IncomingFile, SourceUrl};
use crate::state::PlayerView;

/// A unit of deferred work scheduled on the UI thread.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// The media playback primitive.
pub trait MediaElement {
    async fn position(&self) -> PlayerResult<f64>;
    async fn set_position(&self, seconds: f64) -> PlayerResult<()>;
    async fn playback_rate(&self) -> PlayerResult<f64>;
    async fn set_playback_rate(&self, rate: f64) -> PlayerResult<()>;

    /// Turn a held file handle into an object URL. Consumes the handle.
    async fn create_source_url(&self, file: &IncomingFile) -> PlayerResult<SourceUrl>;
    async fn revoke_source_url(&self, url: &SourceUrl) -> PlayerResult<()>;
    /// Drop a held file handle without using it.
    async fn discard_file(&self, token: u64) -> PlayerResult<()>;

    /// Point the element at `url` and reload it.
    async fn load_source(&self, url: &SourceUrl) -> PlayerResult<()>;
    async fn play(&self) -> PlayerResult<()>;
}

/// The document fullscreen primitive, with vendor fallbacks already resolved.
pub trait Fullscreen {
    async fn fullscreen_element(&self) -> PlayerResult<FullscreenTarget>;
    async fn request_fullscreen(&self, target: FullscreenTarget) -> PlayerResult<()>;
    async fn exit_fullscreen(&self) -> PlayerResult<()>;
}

/// Presentation and scheduling.
pub trait Presenter {
    fn present(&self, view: &PlayerView);
    fn alert(&self, message: &str);
    fn spawn_local(&self, task: LocalTask);
}

/// Everything the controller needs from its environment.
pub trait PlayerHost: MediaElement + Fullscreen + Presenter + 'static {}

impl<T> PlayerHost for T where T: MediaElement + Fullscreen + Presenter + 'static {}
