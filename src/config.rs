//! Configuration management for the cmapkit binary.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CmapError, Result};
use crate::reference::ColormapRef;

/// Command-line arguments for cmapkit
#[derive(Parser, Debug, Default)]
#[command(name = "cmapkit")]
#[command(author, version, about = "Render a discrete, threshold-labelled colour bar to PNG", long_about = None)]
pub struct Args {
    /// Colormap name (e.g. jet, terrain, niceterrain, viridis_r)
    #[arg(short = 'm', long, env = "CMAPKIT_COLORMAP")]
    pub colormap: Option<String>,

    /// Number of colour bins
    #[arg(short, long, env = "CMAPKIT_NCOLORS")]
    pub ncolors: Option<usize>,

    /// Data value at the low end of the colour bar
    #[arg(long, env = "CMAPKIT_MIN", allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Data value at the high end of the colour bar
    #[arg(long, env = "CMAPKIT_MAX", allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Truncate the colormap to [truncate_min, truncate_max] before discretizing
    #[arg(long, requires = "truncate_max")]
    pub truncate_min: Option<f64>,

    /// Upper truncation bound, see --truncate-min
    #[arg(long, requires = "truncate_min")]
    pub truncate_max: Option<f64>,

    /// Image width in pixels
    #[arg(long, env = "CMAPKIT_WIDTH")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, env = "CMAPKIT_HEIGHT")]
    pub height: Option<u32>,

    /// Output PNG path
    #[arg(short, long, env = "CMAPKIT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "CMAPKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CMAPKIT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Sub-range of the colormap kept before discretizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruncateConfig {
    pub minval: f64,
    pub maxval: f64,
}

/// Colour bar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarConfig {
    /// Colormap name; any other JSON value is rejected
    #[serde(default = "default_colormap")]
    pub colormap: serde_json::Value,

    /// Number of colour bins
    #[serde(default = "default_ncolors")]
    pub ncolors: usize,

    /// Data value at the low end
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f64,

    /// Data value at the high end
    #[serde(default = "default_max_threshold")]
    pub max_threshold: f64,

    /// Optional truncation applied before discretizing
    #[serde(default)]
    pub truncate: Option<TruncateConfig>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// PNG file to write
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Colour bar configuration
    #[serde(default)]
    pub colorbar: ColorbarConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Layer parsed arguments over the config file and defaults
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(colormap) = args.colormap {
            config.colorbar.colormap = serde_json::Value::String(colormap);
        }
        if let Some(ncolors) = args.ncolors {
            config.colorbar.ncolors = ncolors;
        }
        if let Some(min) = args.min {
            config.colorbar.min_threshold = min;
        }
        if let Some(max) = args.max {
            config.colorbar.max_threshold = max;
        }
        if let (Some(minval), Some(maxval)) = (args.truncate_min, args.truncate_max) {
            config.colorbar.truncate = Some(TruncateConfig { minval, maxval });
        }
        if let Some(width) = args.width {
            config.output.width = width;
        }
        if let Some(height) = args.height {
            config.output.height = height;
        }
        if let Some(output) = args.output {
            config.output.path = output;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.colorbar = other.colorbar;
        self.output = other.output;
        self.log_level = other.log_level;
    }

    /// The configured colormap as a reference
    pub fn colormap_ref(&self) -> Result<ColormapRef> {
        ColormapRef::try_from(self.colorbar.colormap.clone())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // The colormap must name a registered map
        self.colormap_ref()?.resolve()?;

        if self.colorbar.ncolors == 0 {
            return Err(CmapError::Config {
                message: "ncolors must be at least 1".to_string(),
            });
        }

        let (min, max) = (self.colorbar.min_threshold, self.colorbar.max_threshold);
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(CmapError::Config {
                message: format!(
                    "Thresholds must be finite with min < max, got [{}, {}]",
                    min, max
                ),
            });
        }

        if let Some(truncate) = self.colorbar.truncate {
            if !(0.0 <= truncate.minval && truncate.minval < truncate.maxval && truncate.maxval <= 1.0)
            {
                return Err(CmapError::Config {
                    message: format!(
                        "Truncation bounds must satisfy 0 <= minval < maxval <= 1, got [{}, {}]",
                        truncate.minval, truncate.maxval
                    ),
                });
            }
        }

        if self.output.width == 0 || self.output.height == 0 {
            return Err(CmapError::Config {
                message: "Output width and height must be non-zero".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(CmapError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colorbar: ColorbarConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ColorbarConfig {
    fn default() -> Self {
        Self {
            colormap: default_colormap(),
            ncolors: default_ncolors(),
            min_threshold: default_min_threshold(),
            max_threshold: default_max_threshold(),
            truncate: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}

// Default value functions for serde
fn default_colormap() -> serde_json::Value {
    serde_json::Value::String("jet".to_string())
}

fn default_ncolors() -> usize {
    5
}

fn default_min_threshold() -> f64 {
    0.0
}

fn default_max_threshold() -> f64 {
    1.0
}

fn default_output_path() -> PathBuf {
    PathBuf::from("colorbar.png")
}

fn default_width() -> u32 {
    60
}

fn default_height() -> u32 {
    400
}

fn default_log_level() -> String {
    "info".to_string()
}
