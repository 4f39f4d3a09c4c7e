//! Persistent front-end settings.
//!
//! Read from `<config dir>/maze-solver/settings.json` when it exists. Any field
//! missing from the file keeps its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of a built-in color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

/// Front-end options, persisted as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory that maze names typed at the prompt are resolved against
    pub maze_dir: PathBuf,
    /// Pause between animation frames, in milliseconds
    pub frame_delay_ms: u64,
    /// How many of the most recent frames are kept for playback
    pub frame_capacity: usize,
    /// Mazes with more cells than this are solved without recording frames
    pub max_animated_cells: usize,
    /// Color theme used for playback
    pub theme: ThemeName,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maze_dir: PathBuf::from("mazes"),
            frame_delay_ms: 40,
            frame_capacity: 200,
            max_animated_cells: 10_000,
            theme: ThemeName::Dark,
        }
    }
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("maze-solver").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults when the file is
    /// absent or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Load from an explicit file. Unlike [`Settings::load`], errors are reported.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.maze_dir, PathBuf::from("mazes"));
        assert_eq!(settings.frame_delay(), Duration::from_millis(40));
        assert_eq!(settings.frame_capacity, 200);
        assert_eq!(settings.max_animated_cells, 10_000);
        assert_eq!(settings.theme, ThemeName::Dark);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "frame_delay_ms": 10, "theme": "high-contrast" }"#).unwrap();
        assert_eq!(settings.frame_delay_ms, 10);
        assert_eq!(settings.theme, ThemeName::HighContrast);
        assert_eq!(settings.frame_capacity, 200);
        assert_eq!(settings.maze_dir, PathBuf::from("mazes"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("maze-settings-{}.json", std::process::id()));
        let settings = Settings {
            maze_dir: PathBuf::from("/tmp/labyrinths"),
            theme: ThemeName::Light,
            ..Settings::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_bad_file_is_an_error() {
        assert!(Settings::load_from(Path::new("/nonexistent/maze/settings.json")).is_err());
        assert!(Settings::from_json("{ not json").is_err());
    }
}
