use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Seconds skipped by the seek buttons and hotkeys
    #[serde(default = "default_seek_step_seconds")]
    pub seek_step_seconds: f64,
    /// Playback-rate increment for the speed buttons
    #[serde(default = "default_rate_step")]
    pub rate_step: f64,
    /// Lowest rate the speed buttons will go to
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,
    /// Idle time before controls hide in fullscreen
    #[serde(default = "default_controls_hide_delay_ms")]
    pub controls_hide_delay_ms: u64,
    /// Pause between leaving native video fullscreen and requesting it on the container
    #[serde(default = "default_migration_request_delay_ms")]
    pub migration_request_delay_ms: u64,
    /// How long the migration guard stays up after the container request
    #[serde(default = "default_migration_settle_delay_ms")]
    pub migration_settle_delay_ms: u64,
    #[serde(default = "default_seek_forward_key")]
    pub seek_forward_key: String,
    #[serde(default = "default_seek_backward_key")]
    pub seek_backward_key: String,
    /// Release the previous object URL when a new file is loaded
    #[serde(default = "default_revoke_replaced_sources")]
    pub revoke_replaced_sources: bool,
}

fn default_seek_step_seconds() -> f64 {
    10.0
}

fn default_rate_step() -> f64 {
    0.05
}

fn default_min_rate() -> f64 {
    0.1
}

fn default_controls_hide_delay_ms() -> u64 {
    8000
}

fn default_migration_request_delay_ms() -> u64 {
    150
}

fn default_migration_settle_delay_ms() -> u64 {
    1000
}

fn default_seek_forward_key() -> String {
    "l".to_string()
}

fn default_seek_backward_key() -> String {
    "j".to_string()
}

fn default_revoke_replaced_sources() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seek_step_seconds: default_seek_step_seconds(),
            rate_step: default_rate_step(),
            min_rate: default_min_rate(),
            controls_hide_delay_ms: default_controls_hide_delay_ms(),
            migration_request_delay_ms: default_migration_request_delay_ms(),
            migration_settle_delay_ms: default_migration_settle_delay_ms(),
            seek_forward_key: default_seek_forward_key(),
            seek_backward_key: default_seek_backward_key(),
            revoke_replaced_sources: default_revoke_replaced_sources(),
        }
    }
}

impl PlayerConfig {
    pub fn controls_hide_delay(&self) -> Duration {
        Duration::from_millis(self.controls_hide_delay_ms)
    }

    pub fn migration_request_delay(&self) -> Duration {
        Duration::from_millis(self.migration_request_delay_ms)
    }

    pub fn migration_settle_delay(&self) -> Duration {
        Duration::from_millis(self.migration_settle_delay_ms)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Like `load`, but logs and falls back to the defaults on error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; using default settings", err);
                Self::default()
            }
        }
    }

    /// Replace values the player cannot work with by their defaults.
    fn sanitized(mut self) -> Self {
        if !(self.seek_step_seconds.is_finite() && self.seek_step_seconds > 0.0) {
            self.seek_step_seconds = default_seek_step_seconds();
        }
        if !(self.rate_step.is_finite() && self.rate_step > 0.0) {
            self.rate_step = default_rate_step();
        }
        if !(self.min_rate.is_finite() && self.min_rate > 0.0) {
            self.min_rate = default_min_rate();
        }
        if self.seek_forward_key.chars().count() != 1 {
            self.seek_forward_key = default_seek_forward_key();
        }
        if self.seek_backward_key.chars().count() != 1 {
            self.seek_backward_key = default_seek_backward_key();
        }
        self
    }
}
