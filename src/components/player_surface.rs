use dioxus::prelude::*;
use crate::constants::*;

/// The fullscreen container: the video element plus whatever controls are
/// passed as children. Pointer movement anywhere inside counts as activity.
#[component]
pub fn PlayerSurface(
    class: String,
    on_activity: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            id: CONTAINER_ID,
            class: "{class}",
            style: "border: 1px solid {BORDER_SUBTLE}; border-radius: 6px; overflow: hidden; background-color: {BG_DEEPEST};",
            onmousemove: move |_| on_activity.call(()),
            video {
                id: VIDEO_ID,
                controls: true,
                preload: "metadata",
            }
            {children}
        }
    }
}
