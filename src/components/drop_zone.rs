use dioxus::prelude::*;
use crate::constants::*;

/// File intake surface: drag target plus a "browse" link to the hidden file input.
///
/// Drag and change events are handled by the bridge script, which hands the
/// files to the controller.
#[component]
pub fn DropZone(class: &'static str) -> Element {
    rsx! {
        div {
            id: DROP_ZONE_ID,
            class: "{class}",
            style: "
                display: flex; align-items: center; justify-content: center; gap: 4px;
                height: 64px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                background-color: {BG_BASE}; color: {TEXT_SECONDARY}; font-size: 13px;
            ",
            span { "Drag & drop a video here or" }
            label {
                r#for: FILE_INPUT_ID,
                class: "browse-link",
                style: "color: {ACCENT_VIDEO};",
                "browse"
            }
            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                accept: "video/*",
                style: "display: none;",
            }
        }
    }
}
