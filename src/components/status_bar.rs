use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(status: String, rate_text: String, shortcut_hint: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{status}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{shortcut_hint}" }
                span { "{rate_text}" }
            }
        }
    }
}
