use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Layout and letterboxing constants used by the compositor.
///
/// Every field has a default, so an empty `render:` section is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Width used when the request names neither width nor height
    #[serde(default = "default_baseline_width")]
    pub baseline_width: u32,

    /// Horizontal room subtracted from the image width for text
    #[serde(default = "default_text_margin")]
    pub text_margin: u32,

    /// maxFontSize = imageHeight / max_font_divisor
    #[serde(default = "default_max_font_divisor")]
    pub max_font_divisor: u32,

    /// minSingleLineFontSize = imageHeight / min_single_line_divisor
    #[serde(default = "default_min_single_line_divisor")]
    pub min_single_line_divisor: u32,

    /// Bottom text sits at imageHeight - blockHeight * bottom_anchor_ratio
    #[serde(default = "default_bottom_anchor_ratio")]
    pub bottom_anchor_ratio: f32,

    /// Extra lift applied to bottom text when a watermark is stamped
    #[serde(default = "default_watermark_lift")]
    pub watermark_lift: u32,

    #[serde(default = "default_watermark_font_size")]
    pub watermark_font_size: u32,

    #[serde(default = "default_watermark_inset_x")]
    pub watermark_inset_x: u32,

    #[serde(default = "default_watermark_inset_bottom")]
    pub watermark_inset_bottom: u32,

    /// Gaussian blur radius for letterbox padding
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f32,

    /// Multiplier applied to letterbox colour channels (0.0 to 1.0)
    #[serde(default = "default_darken_factor")]
    pub darken_factor: f32,

    /// Largest accepted target width or height
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            baseline_width: default_baseline_width(),
            text_margin: default_text_margin(),
            max_font_divisor: default_max_font_divisor(),
            min_single_line_divisor: default_min_single_line_divisor(),
            bottom_anchor_ratio: default_bottom_anchor_ratio(),
            watermark_lift: default_watermark_lift(),
            watermark_font_size: default_watermark_font_size(),
            watermark_inset_x: default_watermark_inset_x(),
            watermark_inset_bottom: default_watermark_inset_bottom(),
            blur_radius: default_blur_radius(),
            darken_factor: default_darken_factor(),
            max_dimension: default_max_dimension(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.baseline_width == 0 {
            return Err(RenderError::InvalidConfig(
                "baseline_width must be greater than 0".to_string(),
            ));
        }
        if self.max_font_divisor == 0 || self.min_single_line_divisor == 0 {
            return Err(RenderError::InvalidConfig(
                "font size divisors must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.darken_factor) {
            return Err(RenderError::InvalidConfig(format!(
                "darken_factor must be between 0.0 and 1.0, got {}",
                self.darken_factor
            )));
        }
        if !(self.blur_radius >= 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "blur_radius must be non-negative, got {}",
                self.blur_radius
            )));
        }
        if !(self.bottom_anchor_ratio >= 1.0) {
            return Err(RenderError::InvalidConfig(format!(
                "bottom_anchor_ratio must be at least 1.0, got {}",
                self.bottom_anchor_ratio
            )));
        }
        if self.max_dimension == 0 {
            return Err(RenderError::InvalidConfig(
                "max_dimension must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_baseline_width() -> u32 {
    600
}

fn default_text_margin() -> u32 {
    20
}

fn default_max_font_divisor() -> u32 {
    5
}

fn default_min_single_line_divisor() -> u32 {
    12
}

fn default_bottom_anchor_ratio() -> f32 {
    7.0 / 6.0
}

fn default_watermark_lift() -> u32 {
    5
}

fn default_watermark_font_size() -> u32 {
    15
}

fn default_watermark_inset_x() -> u32 {
    3
}

fn default_watermark_inset_bottom() -> u32 {
    20
}

fn default_blur_radius() -> f32 {
    5.0
}

fn default_darken_factor() -> f32 {
    0.4
}

fn default_max_dimension() -> u32 {
    4096
}
