use dioxus::prelude::*;
use crate::constants::*;

/// Editable speed readout.
///
/// Shows `value` until the user types; Enter or blur commits the raw text.
/// A new `revision` from the controller always replaces whatever is typed,
/// even when the text itself is unchanged (e.g. after rejected input).
#[component]
pub fn RateField(
    value: String,
    revision: u64,
    on_commit: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| value.clone());
    let mut last_revision = use_signal(|| revision);

    // Detect controller refreshes (not from typing)
    if revision != last_revision() {
        text.set(value.clone());
        last_revision.set(revision);
    }

    let text_value = text();

    rsx! {
        input {
            id: RATE_INPUT_ID,
            r#type: "text",
            value: "{text_value}",
            title: "Playback speed",
            style: "
                width: 64px; box-sizing: border-box;
                padding: 4px 6px; font-size: 12px; text-align: center;
                font-family: 'SF Mono', Consolas, monospace;
                background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                outline: none;
                user-select: text;
            ",
            oninput: move |e| text.set(e.value()),
            onblur: move |_| on_commit.call(text()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    on_commit.call(text());
                }
            },
        }
    }
}
