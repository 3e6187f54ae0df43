//! High-level image operations.
//!
//! These functions combine output naming with backend execution. They take
//! configuration, compute parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Background, Quality, ResizeParams};
use crate::naming::output_path;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// How every image in a batch is fitted and encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub width: u32,
    pub height: u32,
    pub pad: bool,
    pub background: Background,
    /// Forced output format name (`"JPEG"`, `"PNG"`, ...). `None` keeps each file's format.
    pub format: Option<String>,
    pub quality: Quality,
}

/// A written output image.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizedImage {
    pub output: PathBuf,
    pub dimensions: Dimensions,
}

/// Resize one source image into `output_dir`.
pub fn resize_image(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    config: &FitConfig,
) -> Result<ResizedImage> {
    let output = output_path(output_dir, source, config.format.as_deref());

    let dimensions = backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: output.clone(),
        width: config.width,
        height: config.height,
        pad: config.pad,
        background: config.background,
        quality: config.quality,
    })?;

    Ok(ResizedImage { output, dimensions })
}
