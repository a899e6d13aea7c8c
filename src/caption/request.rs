//! Render request and result types.

use image::{DynamicImage, RgbaImage};
use std::sync::Arc;

use super::typeface::Typeface;
use crate::error::RenderError;
use crate::image_ops::{encode, Background, OutputFormat};

/// Everything needed to caption one background.
///
/// Resources are already loaded and shared through `Arc`, so one decoded
/// background or font can serve many concurrent requests.
#[derive(Clone)]
pub struct RenderRequest {
    pub(crate) background: Arc<Background>,
    pub(crate) font: Arc<dyn Typeface>,
    pub(crate) top_text: String,
    pub(crate) bottom_text: String,
    pub(crate) target_width: Option<u32>,
    pub(crate) target_height: Option<u32>,
    pub(crate) watermark: Option<String>,
    pub(crate) watermark_font: Option<Arc<dyn Typeface>>,
}

impl std::fmt::Debug for RenderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderRequest")
            .field(
                "background",
                &(self.background.width(), self.background.height()),
            )
            .field("top_text", &self.top_text)
            .field("bottom_text", &self.bottom_text)
            .field("target_width", &self.target_width)
            .field("target_height", &self.target_height)
            .field("watermark", &self.watermark)
            .finish()
    }
}

impl RenderRequest {
    pub fn new(background: Arc<Background>, font: Arc<dyn Typeface>) -> Self {
        Self {
            background,
            font,
            top_text: String::new(),
            bottom_text: String::new(),
            target_width: None,
            target_height: None,
            watermark: None,
            watermark_font: None,
        }
    }

    pub fn with_top(mut self, text: impl Into<String>) -> Self {
        self.top_text = text.into();
        self
    }

    pub fn with_bottom(mut self, text: impl Into<String>) -> Self {
        self.bottom_text = text.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.target_width = Some(width);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.target_height = Some(height);
        self
    }

    pub fn with_size(self, width: u32, height: u32) -> Self {
        self.with_width(width).with_height(height)
    }

    /// Empty watermark text means no watermark.
    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.watermark = if text.is_empty() { None } else { Some(text) };
        self
    }

    pub fn with_watermark_font(mut self, font: Arc<dyn Typeface>) -> Self {
        self.watermark_font = Some(font);
        self
    }

    pub fn top_text(&self) -> &str {
        &self.top_text
    }

    pub fn bottom_text(&self) -> &str {
        &self.bottom_text
    }

    pub fn target_size(&self) -> (Option<u32>, Option<u32>) {
        (self.target_width, self.target_height)
    }

    pub fn watermark(&self) -> Option<&str> {
        self.watermark.as_deref()
    }
}

/// Finished pixels plus the format they should be encoded in.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    image: DynamicImage,
    format: OutputFormat,
}

impl RenderedImage {
    /// Photographic output drops alpha; lossless output keeps it.
    pub fn new(surface: RgbaImage, format: OutputFormat) -> Self {
        let image = match format {
            OutputFormat::Jpeg => {
                DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(surface).to_rgb8())
            }
            OutputFormat::Png => DynamicImage::ImageRgba8(surface),
        };
        Self { image, format }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn encode(&self) -> Result<Vec<u8>, RenderError> {
        encode(&self.image, self.format)
    }
}
