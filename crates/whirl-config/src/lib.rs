//! Configuration file support for whirl.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/whirl/config.toml` on Linux). The file is optional and every
//! key in it is optional; it is only ever read.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use whirl_core::{
    DEFAULT_COUNT, DEFAULT_SIZE, FieldSettings, SAFE_AREA_HEIGHT, SAFE_AREA_WIDTH, ShapeKind,
};

/// Frame rate used when none is configured.
pub const DEFAULT_FPS: u32 = 60;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read, or an explicit path is missing.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has keys of the wrong type.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Size of the reserved rectangle in the middle of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SafeAreaConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SafeAreaConfig {
    fn default() -> Self {
        Self {
            width: SAFE_AREA_WIDTH,
            height: SAFE_AREA_HEIGHT,
        }
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of objects in the field.
    pub count: usize,
    /// Object size in pixels.
    pub size: f64,
    /// Shape drawn by every object.
    pub shape: ShapeKind,
    /// Target frames per second.
    pub fps: u32,
    /// Seed for reproducible placement; random when absent.
    pub seed: Option<u64>,
    /// Text shown in the safe area; hidden when empty.
    pub headline: String,
    /// Show the control panel at startup.
    pub show_menu: bool,
    /// Write logs to this file.
    pub log_file: Option<PathBuf>,
    /// Reserved area in the middle of the canvas.
    pub safe_area: SafeAreaConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size: DEFAULT_SIZE,
            shape: ShapeKind::default(),
            fps: DEFAULT_FPS,
            seed: None,
            headline: "whirl".to_string(),
            show_menu: false,
            log_file: None,
            safe_area: SafeAreaConfig::default(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "whirl").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be clamped into something sensible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::Invalid {
                key: "fps",
                reason: format!("must be between 1 and {MAX_FPS}, got {}", self.fps),
            });
        }
        if !self.size.is_finite() {
            return Err(ConfigError::Invalid {
                key: "size",
                reason: "must be a finite number".to_string(),
            });
        }
        let area = self.safe_area;
        if !(area.width.is_finite() && area.height.is_finite())
            || area.width < 0.0
            || area.height < 0.0
        {
            return Err(ConfigError::Invalid {
                key: "safe_area",
                reason: "width and height must be non-negative".to_string(),
            });
        }
        Ok(())
    }

    /// Field parameters, clamped into the slider ranges.
    pub fn field_settings(&self) -> FieldSettings {
        FieldSettings {
            count: self.count,
            size: self.size,
            shape: self.shape,
            safe_area_width: self.safe_area.width,
            safe_area_height: self.safe_area.height,
        }
        .clamped()
    }
}
