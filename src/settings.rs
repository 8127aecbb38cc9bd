//! User preferences
//!
//! Persisted as JSON next to the executable (or wherever
//! `SAV_CONVERTER_CONFIG` points).

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::progress::ProgressAnimation;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "SAV_CONVERTER_CONFIG";
/// Settings file used when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "sav-converter.json";

/// Application preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Conversion ===
    /// Show the progress bar before converting
    pub progress_animation: bool,
    /// How long the progress bar takes to fill
    pub progress_duration_ms: u64,
    /// Path to the external converter
    pub converter_path: PathBuf,

    // === Credits ===
    /// Fixed minigame seed (random when unset)
    pub minigame_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            progress_animation: true,
            progress_duration_ms: 1000,
            converter_path: default_converter_path(),
            minigame_seed: None,
        }
    }
}

impl Settings {
    /// Settings file location
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Progress animation described by these settings
    pub fn progress(&self) -> ProgressAnimation {
        ProgressAnimation::with_duration(Duration::from_millis(self.progress_duration_ms))
    }

    /// Load settings, falling back to defaults on a missing or unreadable file
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("Could not read {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring invalid settings in {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

/// `uesave` next to our own executable, or on `PATH` as a fallback
fn default_converter_path() -> PathBuf {
    let name = if cfg!(windows) { "uesave.exe" } else { "uesave" };
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(name)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(name))
}
