//! Command line flags.

use std::path::PathBuf;

use clap::Parser;
use whirl_config::{Config, ConfigError};
use whirl_core::ShapeKind;

/// An interactive field of rotating shapes for your terminal.
#[derive(Debug, Default, Parser)]
#[command(name = "whirl", version, about)]
pub struct Cli {
    /// Config file to read instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of objects in the field.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Object size in pixels.
    #[arg(short, long)]
    pub size: Option<f64>,

    /// Shape to draw: line, triangle or square.
    #[arg(long)]
    pub shape: Option<ShapeKind>,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seed for reproducible placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply flag overrides on top.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overwrite config values with any flags given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
