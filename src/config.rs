//! Batch configuration.
//!
//! Handles loading, validating, and layering the run configuration. Values are
//! resolved once, before any file is touched, in three layers:
//!
//! ```text
//! stock defaults  ←  boxfit.toml (or --config FILE)  ←  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input_dir = "images"            # Folder with the original images
//! output_dir = "resized_images"   # Folder for resized copies (created if absent)
//!
//! [resize]
//! size = [800, 800]               # Target box as [width, height] in pixels
//! pad = true                      # Letterbox onto an exact-size canvas
//! background = [255, 255, 255]    # Padding color (RGB)
//!
//! [output]
//! # format = "JPEG"               # Force a format; omit to keep each file's own
//! jpeg_quality = 90               # JPEG quality (0-100)
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::imaging::{Background, FitConfig, Quality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "boxfit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Run configuration loaded from `boxfit.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Directory holding the original images. Only its direct entries are read.
    pub input_dir: PathBuf,
    /// Directory receiving the resized images.
    pub output_dir: PathBuf,
    /// Target box, padding and background.
    pub resize: ResizeSection,
    /// Output format and encoder settings.
    pub output: OutputSection,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("resized_images"),
            resize: ResizeSection::default(),
            output: OutputSection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeSection {
    /// Target box as `[width, height]`.
    pub size: [u32; 2],
    /// Letterbox-pad every image to exactly `size`.
    pub pad: bool,
    /// RGB padding color.
    pub background: [u8; 3],
}

impl Default for ResizeSection {
    fn default() -> Self {
        Self {
            size: [800, 800],
            pad: true,
            background: [255, 255, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Forced output format. `None` keeps each input's own format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// JPEG encoding quality (0 = worst, 100 = best).
    pub jpeg_quality: u32,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: None,
            jpeg_quality: 90,
        }
    }
}

impl ResizeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resize.size[0] == 0 || self.resize.size[1] == 0 {
            return Err(ConfigError::Validation(
                "resize.size values must be non-zero".into(),
            ));
        }
        if self.output.jpeg_quality > 100 {
            return Err(ConfigError::Validation(
                "output.jpeg_quality must be 0-100".into(),
            ));
        }
        if self
            .output
            .format
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "output.format must not be empty (omit it to keep the original format)".into(),
            ));
        }
        Ok(())
    }

    /// The per-image settings handed to the imaging layer.
    pub fn fit_config(&self) -> FitConfig {
        FitConfig {
            width: self.resize.size[0],
            height: self.resize.size[1],
            pad: self.resize.pad,
            background: Background(self.resize.background),
            format: self.output.format.clone(),
            quality: Quality::new(self.output.jpeg_quality),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub no_pad: bool,
    pub format: Option<String>,
    pub jpeg_quality: Option<u32>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut ResizeConfig) {
        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(width) = self.width {
            config.resize.size[0] = width;
        }
        if let Some(height) = self.height {
            config.resize.size[1] = height;
        }
        if self.no_pad {
            config.resize.pad = false;
        }
        if let Some(format) = &self.format {
            config.output.format = Some(format.clone());
        }
        if let Some(quality) = self.jpeg_quality {
            config.output.jpeg_quality = quality;
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ResizeConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ResizeConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ResizeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Resolve the run configuration.
///
/// An explicit `config_file` must exist. Without one, [`CONFIG_FILE_NAME`] in
/// the working directory is used if present. Command-line overrides are
/// applied last and the result is validated again.
pub fn load_config(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ResizeConfig, ConfigError> {
    let overlay: Option<toml::Value> = match config_file {
        Some(path) => Some(toml::from_str(&fs::read_to_string(path)?)?),
        None => load_raw_config(Path::new(CONFIG_FILE_NAME))?,
    };
    let mut config = resolve_config(stock_defaults_value(), overlay)?;
    overrides.apply(&mut config);
    config.validate()?;
    log::debug!("resolved config: {config:?}");
    Ok(config)
}

/// Returns a fully-commented stock `boxfit.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# boxfit configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# boxfit reads ./boxfit.toml, or the file given with --config.
# Command-line flags override values from this file.
# Unknown keys will cause an error.

# Folder with the original images. Only files directly inside it are read;
# supported extensions: png, jpg, jpeg, webp, bmp, tif, tiff.
input_dir = "images"

# Folder for the resized copies. Created if missing; files with the same
# name are overwritten.
output_dir = "resized_images"

# ---------------------------------------------------------------------------
# Resizing
# ---------------------------------------------------------------------------
[resize]
# Target box as [width, height] in pixels. Images are shrunk to fit inside
# it, keeping their aspect ratio. Smaller images are never enlarged.
size = [800, 800]

# Letterbox every image onto a canvas of exactly `size`, centered.
pad = true

# Padding color as [red, green, blue]. Images with transparency keep a
# transparent background instead, unless the output is JPEG.
background = [255, 255, 255]

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Force one output format for every image: "JPEG", "PNG", "WEBP", "BMP",
# "TIFF". Omit to keep each file's own format.
# format = "JPEG"

# JPEG encoding quality (0 = worst, 100 = best).
jpeg_quality = 90
"##
}
