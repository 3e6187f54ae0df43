//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the batch runner
//! needs: identify (for dry runs) and resize (decode → orient → fit → pad →
//! encode → write, for one file).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a mock that records calls.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(String),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resize one file and write it to `params.output`.
    ///
    /// Returns the dimensions of the written image. On error nothing is
    /// written.
    fn resize(&self, params: &ResizeParams) -> Result<Dimensions, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::calculations::calculate_contain_dimensions;
    use std::cell::RefCell;

    /// Mock backend that records operations without touching pixels.
    ///
    /// Files whose name is listed in `failing` return a decode error. Every
    /// other source is treated as `source_dims`.
    pub struct MockBackend {
        pub source_dims: Dimensions,
        pub failing: Vec<String>,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Resize {
            source: String,
            output: String,
            width: u32,
            height: u32,
            pad: bool,
            quality: u8,
        },
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self {
                source_dims: Dimensions {
                    width: 1000,
                    height: 500,
                },
                failing: Vec::new(),
                operations: RefCell::new(Vec::new()),
            }
        }
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(names: &[&str]) -> Self {
            Self {
                failing: names.iter().map(|n| n.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }

        fn check_failure(&self, path: &Path) -> Result<(), BackendError> {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if self.failing.contains(&name) {
                return Err(BackendError::Decode(format!("mock decode failure for {name}")));
            }
            Ok(())
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));
            self.check_failure(path)?;
            Ok(self.source_dims)
        }

        fn resize(&self, params: &ResizeParams) -> Result<Dimensions, BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Resize {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                width: params.width,
                height: params.height,
                pad: params.pad,
                quality: params.quality.value(),
            });
            self.check_failure(&params.source)?;

            if params.pad {
                return Ok(Dimensions {
                    width: params.width,
                    height: params.height,
                });
            }
            let (width, height) = calculate_contain_dimensions(
                (self.source_dims.width, self.source_dims.height),
                (params.width, params.height),
            );
            Ok(Dimensions { width, height })
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::new();

        let result = backend.identify(Path::new("/in/photo.png")).unwrap();
        assert_eq!(result.to_string(), "1000x500");

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/in/photo.png"));
    }

    #[test]
    fn mock_records_resize() {
        let backend = MockBackend::new();

        let dims = backend
            .resize(&ResizeParams {
                source: "/in/photo.png".into(),
                output: "/out/photo.png".into(),
                width: 800,
                height: 800,
                pad: false,
                background: crate::imaging::Background::white(),
                quality: crate::imaging::Quality::new(90),
            })
            .unwrap();
        assert_eq!(dims, Dimensions { width: 800, height: 400 });

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Resize {
                width: 800,
                height: 800,
                pad: false,
                quality: 90,
                ..
            }
        ));
    }

    #[test]
    fn mock_fails_listed_files() {
        let backend = MockBackend::failing_on(&["bad.jpg"]);
        let err = backend.identify(Path::new("/in/bad.jpg")).unwrap_err();
        assert!(err.to_string().contains("bad.jpg"));
        assert!(backend.identify(Path::new("/in/good.jpg")).is_ok());
    }
}
