//! Game settings
//!
//! Read once at startup from an optional JSON file. Every field has a
//! default, so a partial file is fine and a missing or broken one just means
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rules;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay tunables
    pub rules: Rules,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,

    // === Arena outline ===
    pub arena_sides: usize,
    pub arena_thickness: f32,

    // === Storage ===
    pub highscore_path: PathBuf,

    /// Fixed RNG seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),

            window_width: SCREEN_WIDTH,
            window_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,

            arena_sides: ARENA_SIDES,
            arena_thickness: ARENA_THICKNESS,

            highscore_path: PathBuf::from(HIGHSCORE_FILE),

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from disk, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Screen center in logical pixels
    pub fn screen_center(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.window_width as f32 / 2.0,
            self.window_height as f32 / 2.0,
        )
    }
}
