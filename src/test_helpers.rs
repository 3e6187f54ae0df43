//! Shared test utilities for the boxfit test suite.
//!
//! Synthetic image writers and readers, so tests never depend on binary
//! fixtures checked into the repo.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! create_test_png_rgba(&tmp.path().join("photo.png"), 1000, 500);
//! write_corrupt_file(&tmp.path().join("bad.jpg"));
//! ```

use image::{DynamicImage, ImageEncoder, ImageReader, RgbImage, RgbaImage};
use std::path::Path;

// =========================================================================
// Pixel buffers
// =========================================================================

/// RGB gradient: red follows x, green follows y.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

// =========================================================================
// File writers
// =========================================================================

/// Write an opaque RGB PNG.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient_rgb(width, height).save(path).unwrap();
}

/// Write an RGBA PNG with a fully opaque gradient.
pub fn create_test_png_rgba(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
    });
    img.save(path).unwrap();
}

/// Write a baseline RGB JPEG.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_jpeg(width, height)).unwrap();
}

/// Write a JPEG carrying an EXIF orientation tag (1-8).
///
/// The APP1 segment is spliced in right after the SOI marker:
/// `Exif\0\0` + little-endian TIFF header + one IFD entry for tag 0x0112.
pub fn create_test_jpeg_with_orientation(path: &Path, width: u32, height: u32, orientation: u16) {
    let jpeg = encode_jpeg(width, height);

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes()); // first IFD offset
    tiff.extend_from_slice(&1u16.to_le_bytes()); // entry count
    tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_le_bytes()); // count
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&[0, 0]); // value padding
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);

    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, out).unwrap();
}

/// Write bytes that look like a JPEG header but do not decode.
pub fn write_corrupt_file(path: &Path) {
    std::fs::write(path, b"\xFF\xD8\xFF\xE0 definitely not a jpeg").unwrap();
}

fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_rgb(width, height);
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

// =========================================================================
// Readers
// =========================================================================

/// Decode an image by content, ignoring its extension.
pub fn read_image(path: &Path) -> DynamicImage {
    ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap_or_else(|e| panic!("failed to decode {}: {e}", path.display()))
}
