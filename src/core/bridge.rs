//! Web view implementation of the player host traits.
//!
//! Commands go out as one-shot `document::eval` calls into the
//! `window.speedPlayer` object installed by `PLAYER_BRIDGE_SCRIPT`; every
//! call answers `{ ok, value, error }`. Notifications come back over the
//! long-lived bridge eval (see `app.rs`).

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{PlayerError, PlayerResult};
use super::fullscreen::FullscreenTarget;
use super::host::{Fullscreen, LocalTask, MediaElement, Presenter};
use super::media::{IncomingFile, SourceUrl};
use crate::state::PlayerView;

#[derive(Debug, Deserialize)]
struct BridgeReply {
    ok: bool,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error: Option<String>,
}

impl BridgeReply {
    fn into_result(self, method: &str) -> PlayerResult<Value> {
        if self.ok {
            Ok(self.value)
        } else {
            Err(PlayerError::Rejected(
                self.error.unwrap_or_else(|| format!("{} failed", method)),
            ))
        }
    }
}

/// Build the eval body for one bridge call.
fn call_script(method: &str, args: &Value) -> PlayerResult<String> {
    Ok(format!(
        "return await window.speedPlayer.call({}, {});",
        serde_json::to_string(method)?,
        serde_json::to_string(args)?
    ))
}

pub struct WebviewHost {
    view: Signal<PlayerView>,
}

impl WebviewHost {
    pub fn new(view: Signal<PlayerView>) -> Self {
        Self { view }
    }

    async fn call(&self, method: &str, args: Value) -> PlayerResult<Value> {
        let script = call_script(method, &args)?;
        let raw = document::eval(&script)
            .await
            .map_err(|e| PlayerError::Bridge(format!("{}: {}", method, e)))?;
        let reply: BridgeReply = serde_json::from_value(raw)?;
        reply.into_result(method)
    }

    async fn call_as<T: DeserializeOwned>(&self, method: &str, args: Value) -> PlayerResult<T> {
        let value = self.call(method, args).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl MediaElement for WebviewHost {
    async fn position(&self) -> PlayerResult<f64> {
        self.call_as("position", Value::Null).await
    }

    async fn set_position(&self, seconds: f64) -> PlayerResult<()> {
        self.call("setPosition", json!({ "seconds": seconds })).await.map(drop)
    }

    async fn playback_rate(&self) -> PlayerResult<f64> {
        self.call_as("rate", Value::Null).await
    }

    async fn set_playback_rate(&self, rate: f64) -> PlayerResult<()> {
        self.call("setRate", json!({ "rate": rate })).await.map(drop)
    }

    async fn create_source_url(&self, file: &IncomingFile) -> PlayerResult<SourceUrl> {
        let value = self
            .call("createSourceUrl", json!({ "token": file.token }))
            .await
            .map_err(|err| match err {
                PlayerError::Rejected(_) => PlayerError::UnknownFile(file.token),
                other => other,
            })?;
        Ok(serde_json::from_value(value)?)
    }

    async fn revoke_source_url(&self, url: &SourceUrl) -> PlayerResult<()> {
        self.call("revokeSourceUrl", json!({ "url": url.as_str() })).await.map(drop)
    }

    async fn discard_file(&self, token: u64) -> PlayerResult<()> {
        self.call("discardFile", json!({ "token": token })).await.map(drop)
    }

    async fn load_source(&self, url: &SourceUrl) -> PlayerResult<()> {
        self.call("loadSource", json!({ "url": url.as_str() })).await.map(drop)
    }

    async fn play(&self) -> PlayerResult<()> {
        self.call("play", Value::Null).await.map(drop)
    }
}

impl Fullscreen for WebviewHost {
    async fn fullscreen_element(&self) -> PlayerResult<FullscreenTarget> {
        self.call_as("fullscreenElement", Value::Null).await
    }

    async fn request_fullscreen(&self, target: FullscreenTarget) -> PlayerResult<()> {
        self.call("requestFullscreen", json!({ "target": target })).await.map(drop)
    }

    async fn exit_fullscreen(&self) -> PlayerResult<()> {
        self.call("exitFullscreen", Value::Null).await.map(drop)
    }
}

impl Presenter for WebviewHost {
    fn present(&self, view: &PlayerView) {
        let mut signal = self.view;
        signal.set(view.clone());
    }

    fn alert(&self, message: &str) {
        match serde_json::to_string(message) {
            Ok(text) => {
                let _ = document::eval(&format!("window.alert({});", text));
            }
            Err(err) => log::warn!("could not encode alert text: {}", err),
        }
    }

    fn spawn_local(&self, task: LocalTask) {
        spawn(task);
    }
}
