use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(source_name: Option<String>) -> Element {
    let file_label = source_name.unwrap_or_else(|| "No file loaded".to_string());
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "{WINDOW_TITLE}" }
            span {
                style: "font-size: 13px; color: {TEXT_MUTED}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; max-width: 60%;",
                "{file_label}"
            }
        }
    }
}
