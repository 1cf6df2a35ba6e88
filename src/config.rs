//! Host configuration
//!
//! Timing and input tuning the host may override without rebuilding. Arena
//! geometry, the win threshold and the serve positions are deliberately not
//! here; they define the game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_STEP, SCORE_PAUSE_MS, TICK_MS};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PONG_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds each frame is held before the state advances.
    pub tick_ms: u64,
    /// Milliseconds a scoring banner stays up.
    pub score_pause_ms: u64,
    /// Paddle travel per tick while a button is held.
    pub paddle_step: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            score_pause_ms: SCORE_PAUSE_MS,
            paddle_step: PADDLE_STEP,
        }
    }
}

impl Config {
    /// Load from the file named by `PONG_CONFIG`, falling back to defaults
    /// when the variable is unset or the file is unusable.
    pub fn load() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::load_from(Path::new(&path)),
            Err(_) => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Load from an explicit path with the same fallback behavior.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Bad config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write as pretty JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}
