//! Root application component
//!
//! Builds the player controller, runs the bridge event loop and lays out
//! the window.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::{DropZone, PlayerSurface, StatusBar, TitleBar, TransportBar};
use crate::constants::*;
use crate::core::bridge::WebviewHost;
use crate::core::controller::{PlayerController, SpeedStep};
use crate::core::events::HostEvent;
use crate::core::paths::settings_path;
use crate::core::transport::SeekDirection;
use crate::state::{PlayerConfig, PlayerView};

type Player = Rc<PlayerController<WebviewHost>>;

/// Main application component
#[component]
pub fn App() -> Element {
    let view = use_signal(PlayerView::default);

    // Core services
    let player: Player = use_hook(|| {
        let path = settings_path();
        log::info!("reading settings from {:?}", path);
        let config = PlayerConfig::load_or_default(&path);
        PlayerController::new(WebviewHost::new(view), config)
    });

    // Bridge: platform notifications in, one at a time.
    let bridge_player = player.clone();
    use_future(move || {
        let player = bridge_player.clone();
        async move {
            let mut eval = document::eval(PLAYER_BRIDGE_SCRIPT);
            loop {
                let raw = match eval.recv::<serde_json::Value>().await {
                    Ok(raw) => raw,
                    Err(err) => {
                        log::error!("player bridge closed: {}", err);
                        break;
                    }
                };
                match serde_json::from_value::<HostEvent>(raw) {
                    Ok(event) => player.handle_event(event).await,
                    Err(err) => log::warn!("ignoring malformed bridge message: {}", err),
                }
            }
        }
    });

    let current = view();
    let container_class = current.container_class();
    let drop_zone_class = current.drop_zone_class();
    let fullscreen_label = current.fullscreen_label();
    let shortcut_hint = {
        let config = player.config();
        format!(
            "{} / {}: seek -/+{}s",
            config.seek_backward_key.to_uppercase(),
            config.seek_forward_key.to_uppercase(),
            config.seek_step_seconds
        )
    };

    let activity_player = player.clone();
    let rewind_player = player.clone();
    let forward_player = player.clone();
    let slower_player = player.clone();
    let faster_player = player.clone();
    let rate_player = player.clone();
    let fullscreen_player = player.clone();

    rsx! {
        style { {PLAYER_STYLES} }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
            ",
            // Suppress the browser's default context menu
            oncontextmenu: move |e| e.prevent_default(),

            TitleBar { source_name: current.source_name.clone() }

            div {
                style: "display: flex; flex-direction: column; flex: 1; min-height: 0; gap: 12px; padding: 12px;",

                DropZone { class: drop_zone_class }

                PlayerSurface {
                    class: container_class,
                    on_activity: move |_| activity_player.note_activity(),

                    TransportBar {
                        rate_text: current.rate_text.clone(),
                        rate_revision: current.rate_revision,
                        fullscreen_label,
                        on_rewind: move |_| {
                            let player = rewind_player.clone();
                            async move { player.seek(SeekDirection::Backward).await }
                        },
                        on_forward: move |_| {
                            let player = forward_player.clone();
                            async move { player.seek(SeekDirection::Forward).await }
                        },
                        on_slower: move |_| {
                            let player = slower_player.clone();
                            async move { player.adjust_speed(SpeedStep::Slower).await }
                        },
                        on_faster: move |_| {
                            let player = faster_player.clone();
                            async move { player.adjust_speed(SpeedStep::Faster).await }
                        },
                        on_rate_commit: move |text: String| {
                            let player = rate_player.clone();
                            async move { player.commit_rate_entry(&text).await }
                        },
                        on_toggle_fullscreen: move |_| {
                            let player = fullscreen_player.clone();
                            async move { player.toggle_fullscreen().await }
                        },
                    }
                }
            }

            StatusBar {
                status: current.status.clone(),
                rate_text: current.rate_text.clone(),
                shortcut_hint,
            }
        }
    }
}
