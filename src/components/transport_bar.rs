use dioxus::prelude::*;
use crate::components::common::RateField;
use crate::constants::{BG_ELEVATED, BG_HOVER, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY};

/// Transport button
#[component]
pub(crate) fn TransportBtn(
    label: &'static str,
    title: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            class: "transport-btn",
            title: "{title}",
            style: "min-width: 34px; height: 28px; padding: 0 8px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_PRIMARY}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
            onclick: move |e| on_click.call(e),
            "{label}"
        }
    }
}

/// Seek, speed and fullscreen controls under the video.
#[component]
pub fn TransportBar(
    rate_text: String,
    rate_revision: u64,
    fullscreen_label: &'static str,
    on_rewind: EventHandler<()>,
    on_forward: EventHandler<()>,
    on_slower: EventHandler<()>,
    on_faster: EventHandler<()>,
    on_rate_commit: EventHandler<String>,
    on_toggle_fullscreen: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "transport-bar",
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 44px; padding: 0 12px; gap: 12px;
                background-color: {BG_ELEVATED}; border-top: 1px solid {BORDER_DEFAULT};
            ",
            div {
                style: "display: flex; align-items: center; gap: 6px;",
                TransportBtn { label: "⏪ 10s", title: "Back 10 seconds (J)", on_click: move |_| on_rewind.call(()) }
                TransportBtn { label: "10s ⏩", title: "Forward 10 seconds (L)", on_click: move |_| on_forward.call(()) }
            }
            div {
                style: "display: flex; align-items: center; gap: 6px;",
                span { style: "font-size: 11px; color: {TEXT_MUTED};", "Speed" }
                TransportBtn { label: "−", title: "Slower", on_click: move |_| on_slower.call(()) }
                RateField {
                    value: rate_text,
                    revision: rate_revision,
                    on_commit: move |text: String| on_rate_commit.call(text),
                }
                TransportBtn { label: "+", title: "Faster", on_click: move |_| on_faster.call(()) }
            }
            TransportBtn {
                label: fullscreen_label,
                title: "Toggle fullscreen",
                primary: true,
                on_click: move |_| on_toggle_fullscreen.call(()),
            }
        }
    }
}
