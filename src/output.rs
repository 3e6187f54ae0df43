//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Resize
//!
//! ```text
//! ✔ Resized → resized_images/photo.png
//! ✖ Error processing bad.jpg: cannot decode images/bad.jpg: ...
//! ✔ Resized → resized_images/IMG_01.jpg
//!
//! ✅ Done. Processed 2 image(s).
//! ```
//!
//! ## Check
//!
//! ```text
//! photo.png (1000x500) → resized_images/photo.jpg
//! bad.jpg (unreadable: cannot decode images/bad.jpg: ...) → resized_images/bad.jpg
//!
//! 2 image(s) would be written to resized_images, fitted to 800x800 (padded)
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::ResizeConfig;
use crate::process::{PlannedImage, ProcessEvent, ProcessResult};
use std::path::Path;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Resize
// ============================================================================

/// Format a single per-file event as one display line.
pub fn format_process_event(event: &ProcessEvent) -> String {
    match event {
        ProcessEvent::Resized { output, .. } => {
            format!("\u{2714} Resized \u{2192} {}", output.display())
        }
        ProcessEvent::Failed { name, error } => {
            format!("\u{2716} Error processing {}: {}", name, error)
        }
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    println!("{}", format_process_event(event));
}

/// Format the end-of-run summary. Starts with a blank line.
pub fn format_summary(result: &ProcessResult) -> Vec<String> {
    vec![
        String::new(),
        format!("\u{2705} Done. Processed {} image(s).", result.processed),
    ]
}

pub fn print_summary(result: &ProcessResult) {
    for line in format_summary(result) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the dry-run listing: one line per planned file plus a summary.
pub fn format_check_output(planned: &[PlannedImage], config: &ResizeConfig) -> Vec<String> {
    let mut lines: Vec<String> = planned
        .iter()
        .map(|p| {
            let dims = match &p.dimensions {
                Ok(d) => d.to_string(),
                Err(e) => format!("unreadable: {}", e),
            };
            format!(
                "{} ({}) \u{2192} {}",
                display_name(&p.source),
                dims,
                p.output.display()
            )
        })
        .collect();

    let [width, height] = config.resize.size;
    let mode = if config.resize.pad { "padded" } else { "fit" };
    lines.push(String::new());
    lines.push(format!(
        "{} image(s) would be written to {}, fitted to {}x{} ({})",
        planned.len(),
        config.output_dir.display(),
        width,
        height,
        mode
    ));
    lines
}

pub fn print_check_output(planned: &[PlannedImage], config: &ResizeConfig) {
    for line in format_check_output(planned, config) {
        println!("{}", line);
    }
}
