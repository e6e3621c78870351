/// Viewer settings
///
/// Settings are read once at start-up from a JSON file. Nothing is ever
/// written back: the viewer keeps no state between sessions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default multiplier applied by one zoom step
pub const DEFAULT_ZOOM_STEP: f32 = 1.1;

/// Smallest zoom level the viewer allows
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Default edge length of a thumbnail, in pixels
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 160;

/// All user-tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Factor applied per zoom step (wheel notch or button press)
    pub zoom_step: f32,

    /// Zoom floor; there is no ceiling
    pub min_zoom: f32,

    /// Thumbnails are downscaled to fit in a square of this size
    pub thumbnail_size: u32,

    /// File extensions (without the dot, lowercase) treated as images
    pub extensions: Vec<String>,

    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            dark_theme: true,
        }
    }
}

impl Config {
    /// Get the path where the settings file lives
    /// - Linux: ~/.config/photo-strip/config.json
    /// - macOS: ~/Library/Application Support/photo-strip/config.json
    /// - Windows: %APPDATA%\photo-strip\config.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-strip");
        path.push("config.json");
        Some(path)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config.sanitized())
    }

    /// Read the settings file at `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error; callers decide whether to fall back.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::read(&path.to_string_lossy(), e)),
        }
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::warn!("no configuration directory available, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => {
                log::debug!("settings loaded from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            log::warn!("zoom_step must be greater than 1, got {}", self.zoom_step);
            self.zoom_step = defaults.zoom_step;
        }
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            log::warn!("min_zoom must be positive, got {}", self.min_zoom);
            self.min_zoom = defaults.min_zoom;
        }
        if self.thumbnail_size == 0 {
            self.thumbnail_size = defaults.thumbnail_size;
        }

        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if self.extensions.is_empty() {
            self.extensions = defaults.extensions;
        }

        self
    }
}
