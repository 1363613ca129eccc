//! SpeedPlay
//!
//! A desktop video player with fine-grained speed control, quick seeking and
//! auto-hiding fullscreen controls.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(true)
        )
        .with_menu(None) // Disable default menu bar
        // Let HTML5 drop events reach the page instead of the native handler
        .with_disable_drag_drop_handler(true);

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
