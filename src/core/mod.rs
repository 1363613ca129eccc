pub mod bridge;
pub mod controller;
pub mod controls;
pub mod error;
pub mod events;
pub mod fullscreen;
pub mod host;
pub mod media;
pub mod paths;
pub mod transport;
