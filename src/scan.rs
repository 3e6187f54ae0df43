//! Input discovery.
//!
//! Lists the direct entries of the input directory and keeps the regular
//! files with a supported image extension (case-insensitive). Subdirectories
//! and everything else are skipped without being opened.
//!
//! Files come back in the order the filesystem lists them. No sorting is
//! applied, so the order can differ between platforms.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input directory not found: {0}")]
    InputNotFound(PathBuf),
}

/// Extensions considered for processing, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff"];

/// Whether the file name has a supported image extension.
pub fn is_supported(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}

/// Collect the supported image files directly inside `input_dir`.
pub fn scan(input_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !input_dir.is_dir() {
        return Err(ScanError::InputNotFound(input_dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            log::debug!("skipping {}: not a file", path.display());
            continue;
        }
        if !is_supported(&path) {
            log::debug!("skipping {}: unsupported extension", path.display());
            continue;
        }
        images.push(path);
    }
    Ok(images)
}
