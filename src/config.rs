//! YAML configuration for the `raster-lab` binary.
//!
//! Precedence: CLI flags > file > defaults. Every field is optional; a
//! missing file falls back to defaults.

use crate::error::{Error, Result};
use crate::geometry::DisplayBounds;
use crate::scene::{CircleSettings, ClipSettings, Demo, LineSettings, SceneSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Input poll timeout in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Enable mouse picking.
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Demo shown at startup.
    #[serde(default)]
    pub demo: Demo,

    /// Headless render width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Headless render height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_tick_ms() -> u64 {
    100
}
fn default_mouse() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_width() -> u32 {
    900
}
fn default_height() -> u32 {
    600
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            mouse: default_mouse(),
            log_level: default_log_level(),
            demo: Demo::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings.
    #[serde(default)]
    pub global: GlobalConfig,

    /// Line demo settings.
    #[serde(default)]
    pub lines: LineSettings,

    /// Circle demo settings.
    #[serde(default)]
    pub circles: CircleSettings,

    /// Clipping demo settings.
    #[serde(default)]
    pub clipping: ClipSettings,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/raster-lab/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("raster-lab").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or any file fails
    /// to parse.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Input poll timeout.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.global.tick_ms.max(1))
    }

    /// Headless render size.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        DisplayBounds::new(self.global.width, self.global.height)
    }

    /// Settings for every scene.
    #[must_use]
    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            lines: self.lines.clone(),
            circles: self.circles.clone(),
            clipping: self.clipping.clone(),
        }
    }
}
