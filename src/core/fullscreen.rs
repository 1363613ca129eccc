//! Fullscreen state machine.
//!
//! The document has a single fullscreen element and no way to hand
//! fullscreen from one element to another atomically. When the user
//! invokes the video element's native fullscreen, the controller exits and
//! then re-requests fullscreen on the player container. `FullscreenMachine`
//! tracks where we are in that dance and holds the guard that keeps two
//! migrations from overlapping.

use serde::{Deserialize, Serialize};

/// The element the platform reports as fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenTarget {
    #[default]
    None,
    Video,
    Container,
    /// Some element that is neither the video nor the container.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenState {
    #[default]
    Normal,
    ContainerFullscreen,
    /// Native video fullscreen was seen; it is being moved to the container.
    Migrating,
}

/// What the controller should do after a fullscreen-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenReaction {
    /// The container just became fullscreen.
    Entered,
    /// The container is no longer fullscreen.
    Exited,
    /// Native video fullscreen detected; start moving it to the container.
    BeginMigration,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct FullscreenMachine {
    state: FullscreenState,
    migration_in_flight: bool,
}

impl FullscreenMachine {
    pub fn state(&self) -> FullscreenState {
        self.state
    }

    pub fn migration_in_flight(&self) -> bool {
        self.migration_in_flight
    }

    /// Whether the container carries the fullscreen-active marker.
    pub fn is_container_active(&self) -> bool {
        self.state == FullscreenState::ContainerFullscreen
    }

    /// Feed the element the platform now reports as fullscreen.
    pub fn observe(&mut self, current: FullscreenTarget) -> FullscreenReaction {
        let was_active = self.is_container_active();
        match current {
            FullscreenTarget::Container => {
                self.state = FullscreenState::ContainerFullscreen;
                if was_active {
                    FullscreenReaction::Ignored
                } else {
                    FullscreenReaction::Entered
                }
            }
            FullscreenTarget::Video if self.migration_in_flight => FullscreenReaction::Ignored,
            FullscreenTarget::Video => {
                self.migration_in_flight = true;
                self.state = FullscreenState::Migrating;
                FullscreenReaction::BeginMigration
            }
            FullscreenTarget::None | FullscreenTarget::Other => {
                self.state = if self.migration_in_flight {
                    FullscreenState::Migrating
                } else {
                    FullscreenState::Normal
                };
                if was_active {
                    FullscreenReaction::Exited
                } else {
                    FullscreenReaction::Ignored
                }
            }
        }
    }

    /// Clear the guard once the settle delay has passed, whatever happened.
    pub fn finish_migration(&mut self) {
        self.migration_in_flight = false;
        if self.state == FullscreenState::Migrating {
            self.state = FullscreenState::Normal;
        }
    }
}
