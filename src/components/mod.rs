//! UI components grouped by feature domain.
pub mod common;

mod drop_zone;
mod player_surface;
mod status_bar;
mod title_bar;
mod transport_bar;

pub use drop_zone::DropZone;
pub use player_surface::PlayerSurface;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use transport_bar::TransportBar;
