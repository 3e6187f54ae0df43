//! Image processing on top of the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Orient** | EXIF orientation via `ImageDecoder::orientation` |
//! | **Fit** | Lanczos3 `resize_exact` to the contained size (shrink only) |
//! | **Letterbox** | centered paste onto an exact-size canvas |
//! | **Encode** | format picked from the output extension; JPEG honours quality |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining naming + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{calculate_center_offset, calculate_contain_dimensions};
pub use operations::{FitConfig, ResizedImage, get_dimensions, resize_image};
pub use params::{Background, Quality, ResizeParams};
pub use rust_backend::RustBackend;
