//! Placement of caption blocks and the watermark.
//!
//! Positions are the top-left corner of the text block and may be
//! fractional or negative when text is wider than the image.

use super::metrics::TextSize;
use crate::config::RenderConfig;

/// Top-left corner of a text block in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPosition {
    pub x: f32,
    pub y: f32,
}

impl TextPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

fn centered_x(image_width: u32, block: TextSize) -> f32 {
    image_width as f32 / 2.0 - block.width as f32 / 2.0
}

/// Horizontally centered, flush with the top edge.
pub fn top_position(image_width: u32, block: TextSize) -> TextPosition {
    TextPosition::new(centered_x(image_width, block), 0.0)
}

/// Horizontally centered near the bottom edge, lifted further when a
/// watermark will be stamped underneath.
pub fn bottom_position(
    image_width: u32,
    image_height: u32,
    block: TextSize,
    watermarked: bool,
    config: &RenderConfig,
) -> TextPosition {
    let mut y = image_height as f32 - block.height as f32 * config.bottom_anchor_ratio;
    if watermarked {
        y -= config.watermark_lift as f32;
    }
    TextPosition::new(centered_x(image_width, block), y)
}

/// Bottom-left inset for the watermark.
pub fn watermark_position(image_height: u32, config: &RenderConfig) -> TextPosition {
    TextPosition::new(
        config.watermark_inset_x as f32,
        image_height as f32 - config.watermark_inset_bottom as f32,
    )
}
