// SPDX-License-Identifier: MPL-2.0
//! Deterministic, stateless raster transforms: decode, adjust, encode.
//!
//! The adjustment pass follows the semantics of the CSS filter chain
//! `brightness() contrast() saturate()`, in that fixed order, so the live
//! preview and the baked output stay in parity with browser rendering.
//! Scaling happens first, uniformly on both axes, preserving the source
//! aspect ratio.
//!
//! Everything here is a pure function over pixel data; no I/O, no caching,
//! no embedded metadata, so identical inputs always produce identical
//! outputs.

use crate::config::defaults::{MAX_JPEG_QUALITY, MIN_JPEG_QUALITY};
use crate::domain::editing::{codec_scale_bounds, AdjustmentParams};
use crate::error::{Error, Result};
use crate::media::ImageSource;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ExtendedColorType, Rgba};

/// Rec. 709 luma coefficients, as used by the CSS `saturate()` filter matrix.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Decodes encoded image bytes into a raster image.
///
/// Fails with [`Error::Decode`] when the bytes are not a supported image
/// format.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Applies the full adjustment transform: uniform scale, then brightness,
/// contrast, and saturation, in that order.
pub fn apply_adjustment(raster: &DynamicImage, params: &AdjustmentParams) -> DynamicImage {
    let scaled = if params.scale.is_identity() {
        raster.clone()
    } else {
        let (width, height) = scaled_dimensions(raster.width(), raster.height(), params.scale.value());
        // resize_exact with one factor for both axes keeps the native aspect
        // ratio without Lanczos fitting surprises near rounding boundaries.
        raster.resize_exact(width, height, FilterType::Lanczos3)
    };

    if params.is_color_identity() {
        return scaled;
    }

    let brightness = params.brightness.as_factor();
    let contrast = params.contrast.as_factor();
    let saturation = params.saturation.as_factor();

    let mut rgba = scaled.into_rgba8();
    for pixel in rgba.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let adjusted = adjust_color(
            [channel_to_f32(r), channel_to_f32(g), channel_to_f32(b)],
            brightness,
            contrast,
            saturation,
        );
        *pixel = Rgba([
            f32_to_channel(adjusted[0]),
            f32_to_channel(adjusted[1]),
            f32_to_channel(adjusted[2]),
            a,
        ]);
    }
    DynamicImage::ImageRgba8(rgba)
}

/// Re-encodes a raster image as a JPEG at the given quality.
///
/// The output carries no timestamps or metadata, so identical rasters encode
/// to identical bytes.
pub fn encode(raster: &DynamicImage, quality: u8) -> Result<ImageSource> {
    let quality = quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY);
    // JPEG has no alpha channel.
    let rgb = raster.to_rgb8();

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| Error::Encode(e.to_string()))?;

    Ok(ImageSource::new("image/jpeg", bytes))
}

/// Computes the scaled output dimensions for a scale percentage.
///
/// The percentage is defensively clamped to the codec range (1%–400%) so a
/// direct caller can never request a zero- or absurd-size output; slider
/// input is already bounded well inside that range. Both dimensions get a
/// 1-px floor.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, scale_percent: i32) -> (u32, u32) {
    let percent = scale_percent.clamp(codec_scale_bounds::MIN, codec_scale_bounds::MAX);
    let factor = f64::from(percent) / 100.0;
    let new_width = (f64::from(width) * factor).round().max(1.0) as u32;
    let new_height = (f64::from(height) * factor).round().max(1.0) as u32;
    (new_width, new_height)
}

/// Applies brightness, contrast, and saturation to one normalized RGB value.
///
/// Factors of 1.0 leave the corresponding axis unchanged:
/// - brightness multiplies each channel
/// - contrast scales the distance from mid-gray
/// - saturation interpolates between the pixel's luma and its color
fn adjust_color(rgb: [f32; 3], brightness: f32, contrast: f32, saturation: f32) -> [f32; 3] {
    let mut out = rgb;
    for v in &mut out {
        *v *= brightness;
    }
    for v in &mut out {
        *v = (*v - 0.5) * contrast + 0.5;
    }
    let luma = LUMA_R * out[0] + LUMA_G * out[1] + LUMA_B * out[2];
    for v in &mut out {
        *v = luma + (*v - luma) * saturation;
    }
    out
}

fn channel_to_f32(value: u8) -> f32 {
    f32::from(value) / 255.0
}

fn f32_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
