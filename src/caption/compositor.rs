//! Caption compositor.
//!
//! Turns a [`RenderRequest`] into a [`RenderedImage`]:
//!
//! 1. convert the background to RGBA and resize it to the target size
//! 2. lay out top and bottom text independently
//! 3. draw both with a black outline and white fill
//! 4. letterbox onto a blurred background when an exact size was requested
//! 5. stamp the watermark in the bottom-left corner
//!
//! Rendering is synchronous and touches no shared mutable state, so
//! independent requests can run on separate threads with one `Compositor`.

use tracing::Span;

use super::metrics::FontMetrics;
use super::optimizer::{optimize, LayoutConstraints, LayoutResult};
use super::outline::OutlinedTextRenderer;
use super::position::{bottom_position, top_position, watermark_position};
use super::request::{RenderRequest, RenderedImage};
use super::typeface::{GlyphFont, Typeface};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::image_ops::{
    fit_dimensions, pad_with_blurred_background, resize_rgba, validate_fitted, validate_target,
};

/// Renders caption requests with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Compositor {
    config: RenderConfig,
    span: Span,
}

impl Compositor {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self {
            config,
            span: tracing::info_span!("compositor"),
        })
    }

    /// Emit this compositor's events inside `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, request: &RenderRequest) -> Result<RenderedImage, RenderError> {
        let _entered = self.span.enter();
        let config = &self.config;
        let (target_width, target_height) = request.target_size();

        validate_target(target_width, target_height, config.max_dimension)?;

        let background = &request.background;
        let source = background.to_rgba8();
        let (width, height) = fit_dimensions(
            background.width(),
            background.height(),
            target_width,
            target_height,
            config.baseline_width,
        );
        validate_fitted(width, height, config.max_dimension)?;

        tracing::info!(
            source_width = background.width(),
            source_height = background.height(),
            width,
            height,
            format = %background.output_format(),
            "Resizing background"
        );

        let mut surface = resize_rgba(&source, width, height)?;

        let font: &dyn Typeface = request.font.as_ref();
        let constraints = LayoutConstraints::for_image(width, height, config);
        let top = optimize(font, &request.top_text, &constraints);
        let bottom = optimize(font, &request.bottom_text, &constraints);

        self.draw_captions(&mut surface, font, &top, &bottom, request.watermark.is_some());

        if let (Some(box_width), Some(box_height)) = (target_width, target_height) {
            surface =
                pad_with_blurred_background(&surface, &source, box_width, box_height, config)?;
        }

        if let Some(text) = &request.watermark {
            let fallback;
            let watermark_font: &dyn Typeface = match &request.watermark_font {
                Some(font) => font.as_ref(),
                None => {
                    fallback = GlyphFont::embedded()?;
                    &fallback
                }
            };
            let position = watermark_position(surface.height(), config);
            OutlinedTextRenderer::new(watermark_font).draw(
                &mut surface,
                position,
                text,
                config.watermark_font_size,
            );
        }

        tracing::info!(
            width = surface.width(),
            height = surface.height(),
            top_size = top.font_size,
            bottom_size = bottom.font_size,
            "Rendered caption"
        );

        Ok(RenderedImage::new(surface, background.output_format()))
    }

    fn draw_captions(
        &self,
        surface: &mut image::RgbaImage,
        font: &dyn Typeface,
        top: &LayoutResult,
        bottom: &LayoutResult,
        watermarked: bool,
    ) {
        let metrics = FontMetrics::new(font);
        let renderer = OutlinedTextRenderer::new(font);
        let (width, height) = surface.dimensions();

        let top_block = metrics.block_size(&top.lines, top.font_size);
        let bottom_block = metrics.block_size(&bottom.lines, bottom.font_size);

        let top_at = top_position(width, top_block);
        let bottom_at = bottom_position(width, height, bottom_block, watermarked, &self.config);

        renderer.draw_lines(surface, top_at, &top.lines, top.font_size);
        renderer.draw_lines(surface, bottom_at, &bottom.lines, bottom.font_size);
    }
}
