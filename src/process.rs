//! Batch resizing.
//!
//! Takes the resolved [`ResizeConfig`], lists the input directory, and runs
//! every supported image through the imaging backend one at a time:
//!
//! ```text
//! images/                     resized_images/
//! ├── photo.png   ──────────▶ ├── photo.png     (or photo.jpg with format = "JPEG")
//! ├── IMG_01.JPG  ──────────▶ ├── IMG_01.jpg
//! ├── bad.jpg     ──✖ reported, no output
//! └── anim.gif    (skipped, never opened)
//! ```
//!
//! ## Failure Model
//!
//! Errors outside the per-file loop (missing input directory, output directory
//! that cannot be created) abort the run with a [`ProcessError`]. A failure on
//! a single file is reported as a [`ProcessEvent::Failed`] and the batch moves
//! on; it never reaches the caller as an error.
//!
//! ## Sequential Processing
//!
//! Files are handled in directory-listing order on the calling thread. Only
//! one decoded image is alive at a time.

use crate::config::ResizeConfig;
use crate::imaging::{Dimensions, ImageBackend, RustBackend, get_dimensions, resize_image};
use crate::naming::output_path;
use crate::scan::{ScanError, scan};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Outcome of one file, emitted as soon as it is known.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    Resized {
        source: PathBuf,
        output: PathBuf,
        dimensions: Dimensions,
    },
    Failed {
        /// File name of the source, without its directory.
        name: String,
        error: String,
    },
}

/// Tally reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessResult {
    pub processed: usize,
    pub failed: usize,
}

/// A file the batch would process, as reported by [`check`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedImage {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Stored dimensions, or the reason the file cannot be read.
    pub dimensions: Result<Dimensions, String>,
}

pub fn process(
    config: &ResizeConfig,
    on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    process_with_backend(&RustBackend::new(), config, on_event)
}

/// Process the batch using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    config: &ResizeConfig,
    mut on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    fs::create_dir_all(&config.output_dir)?;
    let sources = scan(&config.input_dir)?;
    log::info!(
        "resizing {} image(s) from {} into {}",
        sources.len(),
        config.input_dir.display(),
        config.output_dir.display()
    );

    let fit = config.fit_config();
    let mut result = ProcessResult::default();

    for source in sources {
        let event = match resize_image(backend, &source, &config.output_dir, &fit) {
            Ok(resized) => {
                result.processed += 1;
                ProcessEvent::Resized {
                    source,
                    output: resized.output,
                    dimensions: resized.dimensions,
                }
            }
            Err(e) => {
                log::debug!("failed on {}: {e:?}", source.display());
                result.failed += 1;
                ProcessEvent::Failed {
                    name: file_name(&source),
                    error: e.to_string(),
                }
            }
        };
        on_event(&event);
    }

    Ok(result)
}

/// List what a run would do without writing anything.
pub fn check(config: &ResizeConfig) -> Result<Vec<PlannedImage>, ProcessError> {
    check_with_backend(&RustBackend::new(), config)
}

pub fn check_with_backend(
    backend: &impl ImageBackend,
    config: &ResizeConfig,
) -> Result<Vec<PlannedImage>, ProcessError> {
    let format = config.output.format.as_deref();
    let planned = scan(&config.input_dir)?
        .into_iter()
        .map(|source| PlannedImage {
            output: output_path(&config.output_dir, &source, format),
            dimensions: get_dimensions(backend, &source).map_err(|e| e.to_string()),
            source,
        })
        .collect();
    Ok(planned)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
