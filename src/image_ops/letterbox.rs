//! Blurred letterboxing to reach exact output dimensions
//!
//! The captioned image keeps its aspect ratio and is pasted, inside a thin
//! black border, over a darkened and blurred copy of the original background
//! stretched to the requested box.

use image::{imageops, Rgba, RgbaImage};

use super::processor::resize_rgba;
use crate::config::RenderConfig;
use crate::error::RenderError;

/// Scale colour channels by `factor`, leaving alpha untouched.
pub fn darken(img: &mut RgbaImage, factor: f32) {
    let factor = factor.clamp(0.0, 1.0);
    for pixel in img.pixels_mut() {
        for channel in 0..3 {
            pixel[channel] = (pixel[channel] as f32 * factor) as u8;
        }
    }
}

/// Copy `foreground` centered onto an opaque black canvas one pixel larger on
/// each side, clamped to `max_width` x `max_height`.
fn bordered(foreground: &RgbaImage, max_width: u32, max_height: u32) -> RgbaImage {
    let (base_width, base_height) = foreground.dimensions();
    let border_width = max_width.min(base_width + 2);
    let border_height = max_height.min(base_height + 2);

    let mut border = RgbaImage::from_pixel(border_width, border_height, Rgba([0, 0, 0, 255]));
    imageops::replace(
        &mut border,
        foreground,
        (border_width as i64 - base_width as i64) / 2,
        (border_height as i64 - base_height as i64) / 2,
    );

    // the border is an opaque layer whatever the foreground's alpha
    for pixel in border.pixels_mut() {
        pixel[3] = 255;
    }
    border
}

/// Produce a `width` x `height` image with `foreground` centered over a
/// darkened, blurred `background`.
pub fn pad_with_blurred_background(
    foreground: &RgbaImage,
    background: &RgbaImage,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<RgbaImage, RenderError> {
    let border = bordered(foreground, width, height);

    let mut padded = resize_rgba(background, width, height)?;
    darken(&mut padded, config.darken_factor);

    let mut blurred = if config.blur_radius > 0.0 {
        imageops::blur(&padded, config.blur_radius)
    } else {
        padded
    };

    imageops::replace(
        &mut blurred,
        &border,
        (width as i64 - border.width() as i64) / 2,
        (height as i64 - border.height() as i64) / 2,
    );

    tracing::debug!(
        width,
        height,
        foreground_width = foreground.width(),
        foreground_height = foreground.height(),
        "Padded image with blurred background"
    );

    Ok(blurred)
}
