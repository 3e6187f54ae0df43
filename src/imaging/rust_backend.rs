//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, BMP) | `image::ImageReader` with content sniffing |
//! | EXIF orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Fit inside box | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Letterbox | `imageops::overlay` (alpha) / `imageops::replace` (opaque) |
//! | Encode → JPEG | `jpeg_encoder::Encoder` with configured quality and optimized Huffman tables |
//! | Encode → others | `DynamicImage::write_to` with the format from the output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{calculate_center_offset, calculate_contain_dimensions};
use super::params::{Background, Quality, ResizeParams};
use image::imageops::{self, FilterType};
use image::metadata::Orientation;
use image::{ColorType, DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

/// `image` crate backend.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load, decode and upright an image.
///
/// The format is sniffed from the file contents, not the extension. EXIF
/// orientation is baked into the pixels; the metadata itself is not kept.
pub fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let mut decoder = reader.into_decoder().map_err(|e| decode_error(path, e))?;
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(path, e))?;
    img.apply_orientation(orientation);
    Ok(img)
}

fn decode_error(path: &Path, e: image::ImageError) -> BackendError {
    BackendError::Decode(format!("cannot decode {}: {}", path.display(), e))
}

/// Shrink an image to fit inside `width`×`height`, keeping its aspect ratio.
///
/// Images already inside the box come back untouched.
pub fn fit_image(img: DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (fit_w, fit_h) = calculate_contain_dimensions((img.width(), img.height()), (width, height));
    if (fit_w, fit_h) == (img.width(), img.height()) {
        return img;
    }
    img.resize_exact(fit_w, fit_h, FilterType::Lanczos3)
}

/// Center `fitted` on an exact `width`×`height` canvas.
///
/// With `keep_alpha` the canvas is transparent and `fitted` is alpha-blended
/// onto it; otherwise the canvas is filled with `background` and the fitted
/// pixels replace it.
pub fn letterbox(
    fitted: &DynamicImage,
    width: u32,
    height: u32,
    background: Background,
    keep_alpha: bool,
) -> DynamicImage {
    let (x, y) = calculate_center_offset((width, height), (fitted.width(), fitted.height()));

    if keep_alpha {
        let mut canvas = RgbaImage::from_pixel(width, height, background.transparent());
        imageops::overlay(&mut canvas, &fitted.to_rgba8(), x as i64, y as i64);
        DynamicImage::ImageRgba8(canvas)
    } else {
        let mut canvas = RgbImage::from_pixel(width, height, background.rgb());
        imageops::replace(&mut canvas, &fitted.to_rgb8(), x as i64, y as i64);
        DynamicImage::ImageRgb8(canvas)
    }
}

/// Resolve the encoder from the output path's extension.
pub fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ImageFormat::from_extension(&ext) {
        Some(format) if format.writing_enabled() => Ok(format),
        _ => Err(BackendError::UnsupportedFormat(ext)),
    }
}

/// Whether `format` can store an alpha channel.
pub fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}

/// Convert the color type to one the target encoder accepts.
///
/// JPEG has no alpha: anything other than 8-bit RGB or grayscale becomes
/// 8-bit RGB. WebP and BMP only take 8-bit samples. PNG has no float support.
/// TIFF has no gray+alpha layout, so those widen to RGBA.
pub fn prepare_for_encoding(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    match format {
        ImageFormat::Jpeg => match img.color() {
            ColorType::Rgb8 | ColorType::L8 => img,
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        ImageFormat::WebP | ImageFormat::Bmp => match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => img,
            c if c.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        ImageFormat::Tiff => match img.color() {
            ColorType::La8 => DynamicImage::ImageRgba8(img.to_rgba8()),
            ColorType::La16 => DynamicImage::ImageRgba16(img.to_rgba16()),
            _ => img,
        },
        ImageFormat::Png => match img.color() {
            ColorType::Rgba32F => DynamicImage::ImageRgba16(img.to_rgba16()),
            ColorType::Rgb32F => DynamicImage::ImageRgb16(img.to_rgb16()),
            _ => img,
        },
        _ => img,
    }
}

/// Encode into memory so a failed encode never leaves a partial file.
fn encode(img: &DynamicImage, format: ImageFormat, quality: Quality) -> Result<Vec<u8>, BackendError> {
    if format == ImageFormat::Jpeg {
        return encode_jpeg(img, quality);
    }

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).map_err(|e| {
        BackendError::ProcessingFailed(format!("{format:?} encode failed: {e}"))
    })?;
    Ok(buf.into_inner())
}

/// Baseline JPEG with optimized Huffman tables.
fn encode_jpeg(img: &DynamicImage, quality: Quality) -> Result<Vec<u8>, BackendError> {
    let too_large = |_: std::num::TryFromIntError| {
        BackendError::ProcessingFailed(format!(
            "Jpeg encode failed: {}x{} exceeds the 65535px JPEG limit",
            img.width(),
            img.height()
        ))
    };
    let width = u16::try_from(img.width()).map_err(too_large)?;
    let height = u16::try_from(img.height()).map_err(too_large)?;

    let (pixels, color) = match img.color() {
        ColorType::L8 => (Cow::Borrowed(img.as_bytes()), jpeg_encoder::ColorType::Luma),
        ColorType::Rgb8 => (Cow::Borrowed(img.as_bytes()), jpeg_encoder::ColorType::Rgb),
        _ => (Cow::Owned(img.to_rgb8().into_raw()), jpeg_encoder::ColorType::Rgb),
    };

    let mut out = Vec::new();
    let mut encoder = jpeg_encoder::Encoder::new(&mut out, quality.value());
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(&pixels, width, height, color)
        .map_err(|e| BackendError::ProcessingFailed(format!("Jpeg encode failed: {e}")))?;
    Ok(out)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<Dimensions, BackendError> {
        let format = output_format(&params.output)?;

        let img = load_image(&params.source)?;
        let fitted = fit_image(img, params.width, params.height);

        let composed = if params.pad {
            let keep_alpha = fitted.color().has_alpha() && supports_alpha(format);
            letterbox(&fitted, params.width, params.height, params.background, keep_alpha)
        } else {
            fitted
        };

        let final_img = prepare_for_encoding(composed, format);
        let bytes = encode(&final_img, format, params.quality)?;
        std::fs::write(&params.output, bytes)?;

        Ok(Dimensions {
            width: final_img.width(),
            height: final_img.height(),
        })
    }
}
