//! # boxfit
//!
//! Batch-resize every image in a folder so it fits a target box, optionally
//! letterbox-padded to the exact box size and optionally converted to another
//! format.
//!
//! # Pipeline
//!
//! Each supported file goes through the same linear steps, one file at a time:
//!
//! ```text
//! list input dir → decode → apply EXIF orientation → fit (shrink only)
//!                → letterbox (optional) → adapt color type → encode → write
//! ```
//!
//! A failure on one file is reported and the batch continues. Only errors
//! outside the per-file loop (missing input directory, invalid config) stop
//! the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `boxfit.toml` loading, layering with CLI flags, validation |
//! | [`scan`] | Lists the input directory and filters supported extensions |
//! | [`naming`] | Output filename and extension resolution |
//! | [`imaging`] | Fit/letterbox math, the backend trait, and the `image`-crate backend |
//! | [`process`] | The batch runner and the dry-run `check` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Shrink, Never Enlarge
//!
//! The fit step only scales down. An image smaller than the box keeps its
//! pixel size; with padding on it is centered on the canvas at that size.
//! Enlarging would only add interpolation blur.
//!
//! ## Alpha Follows the Output Format
//!
//! A padded canvas stays transparent when the source has alpha and the output
//! format can store it. JPEG output always gets an opaque canvas in the
//! configured background color.
//!
//! ## Encode Before Write
//!
//! Images are encoded into memory and written in one call, so a file that
//! fails to encode never leaves a truncated output behind.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
