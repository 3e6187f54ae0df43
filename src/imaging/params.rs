//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides where each output goes and in which format) and the
//! [`backend`](super::backend) (which does the actual pixel work). Keeping them
//! separate lets the batch loop run against a mock backend in tests.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 90). Clamped on construction.
//! - [`Background`] — RGB fill color for letterbox padding.
//! - [`ResizeParams`] — Everything needed to process one file: source, output path,
//!   target box, padding, background, quality.

use std::path::PathBuf;

/// Quality setting for lossy JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    /// The JPEG encoder rejects 0, so configured values are clamped to 1-100.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Padding color for letterboxed canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background(pub [u8; 3]);

impl Background {
    pub fn white() -> Self {
        Self([255, 255, 255])
    }

    pub fn rgb(self) -> image::Rgb<u8> {
        image::Rgb(self.0)
    }

    /// Same color with zero alpha, for canvases that keep transparency.
    pub fn transparent(self) -> image::Rgba<u8> {
        let [r, g, b] = self.0;
        image::Rgba([r, g, b, 0])
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::white()
    }
}

/// Parameters for resizing a single file into the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    /// Final path including the resolved extension. The extension selects the encoder.
    pub output: PathBuf,
    /// Target box (width, height).
    pub width: u32,
    pub height: u32,
    /// Letterbox onto an exact `width`×`height` canvas.
    pub pad: bool,
    pub background: Background,
    pub quality: Quality,
}
