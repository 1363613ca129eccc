//! Presentational snapshot of the player.

/// Everything the UI renders that the controller decides.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    /// Speed readout, e.g. `1.00x`.
    pub rate_text: String,
    /// Bumped on every rate refresh so the rate field can drop stale edits
    /// even when the text did not change.
    pub rate_revision: u64,
    pub fullscreen_active: bool,
    pub controls_visible: bool,
    pub drag_hover: bool,
    pub source_name: Option<String>,
    pub status: String,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            rate_text: "1.00x".to_string(),
            rate_revision: 0,
            fullscreen_active: false,
            controls_visible: true,
            drag_hover: false,
            source_name: None,
            status: "Drop a video or browse to start".to_string(),
        }
    }
}

impl PlayerView {
    /// Class list for the player container.
    pub fn container_class(&self) -> String {
        let mut class = String::from("player-container");
        if self.fullscreen_active {
            class.push_str(" fullscreen-active");
        }
        if !self.controls_visible {
            class.push_str(" controls-hidden");
        }
        class
    }

    pub fn drop_zone_class(&self) -> &'static str {
        if self.drag_hover {
            "drop-zone dragover"
        } else {
            "drop-zone"
        }
    }

    pub fn fullscreen_label(&self) -> &'static str {
        if self.fullscreen_active {
            "Exit Fullscreen"
        } else {
            "Fullscreen"
        }
    }
}
