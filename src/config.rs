//! Runtime settings: defaults, then an optional TOML file, then CLI flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target frame rate of the fixed-step loop.
    pub fps: u32,
    /// Seed for level generation and arena spawns.  `None` uses entropy.
    pub seed: Option<u64>,
    /// Frames a key stays held after its last press/repeat event.  Must
    /// outlast the OS key-repeat interval at the chosen frame rate.
    pub hold_window: u64,
    /// Log destination.  The terminal itself is the game's screen.
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            fps: 60,
            seed: None,
            hold_window: 8,
            log_file: PathBuf::from("room_games.log"),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Duration of one frame.  A zero fps is treated as 1.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
