//! State management module
//!
//! - PlayerConfig: user-tunable settings loaded from `player.json`
//! - PlayerView: presentational snapshot the controller pushes to the UI

mod settings;
mod view;

pub use settings::*;
pub use view::*;
