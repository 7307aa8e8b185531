//! Game settings and preferences
//!
//! Read from an optional JSON file. Every field has a default, so a file only
//! needs the values it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Text drawn under the score line
    pub caption: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,
    /// Directory holding the sound files
    pub asset_dir: PathBuf,

    // === Loop ===
    /// Upper bound on frames per second; `None` runs flat out
    pub frame_cap: Option<u32>,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            caption: "Touch Pong".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            asset_dir: PathBuf::from("assets"),

            frame_cap: Some(120),

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        settings.frame_cap = settings.frame_cap.filter(|cap| *cap > 0);
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a file
    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}): {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
