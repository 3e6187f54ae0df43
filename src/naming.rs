//! Output filename resolution.
//!
//! Every output file is named `<input_stem>.<resolved_extension>` inside the
//! output directory. The extension comes from the forced format, if one is
//! configured, or from the input file otherwise:
//!
//! - `"JPG"` / `"JPEG"` → `jpg`
//! - `"PNG"` → `png`
//! - `"WEBP"` → `webp`
//! - anything else → the format name, lowercased (`"TIFF"` → `tiff`)
//! - no forced format → the input extension, lowercased (`IMG.JPEG` → `jpeg`)

use std::path::{Path, PathBuf};

/// Canonical extension for a forced output format name.
pub fn format_extension(format: &str) -> String {
    match format.to_uppercase().as_str() {
        "JPG" | "JPEG" => "jpg".to_string(),
        "PNG" => "png".to_string(),
        "WEBP" => "webp".to_string(),
        _ => format.to_lowercase(),
    }
}

/// Resolve the output extension for a source file.
pub fn resolve_extension(source: &Path, forced_format: Option<&str>) -> String {
    match forced_format {
        Some(format) => format_extension(format),
        None => source
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    }
}

/// Full output path for a source file: `<output_dir>/<stem>.<ext>`.
pub fn output_path(output_dir: &Path, source: &Path, forced_format: Option<&str>) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = resolve_extension(source, forced_format);
    output_dir.join(format!("{stem}.{ext}"))
}
