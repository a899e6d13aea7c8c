//! White caption text with a solid black outline.
//!
//! The outline is produced by stamping the text in black at every integer
//! offset within the outline thickness, then stamping it once in white at
//! the original position. All black passes happen before the white one.

use image::{Rgba, RgbaImage};

use super::metrics::FontMetrics;
use super::position::TextPosition;
use super::typeface::Typeface;

pub const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const FILL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Outline thickness in pixels for a font size: one pixel per 25, at least 1.
pub fn outline_thickness(font_size: u32) -> u32 {
    (font_size / 25).max(1)
}

/// Glyph coverage of a text block, relative to the block's pixel origin.
struct CoverageMask {
    samples: Vec<(i32, i32, f32)>,
}

impl CoverageMask {
    /// Rasterize center-aligned `lines`; `subpixel` is the fractional part of
    /// the block position.
    fn rasterize<S: AsRef<str>>(
        metrics: &FontMetrics<'_>,
        lines: &[S],
        font_size: u32,
        subpixel: (f32, f32),
    ) -> Self {
        let face = metrics.face();
        let px = font_size.max(1) as f32;
        let block = metrics.block_size(lines, font_size);
        let advance = metrics.line_advance(font_size) as f32;

        let mut samples = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let line_width = face.line_width(line, px);
            let origin = (
                subpixel.0 + (block.width as f32 - line_width) / 2.0,
                subpixel.1 + index as f32 * advance,
            );
            face.rasterize_line(line, px, origin, &mut |x, y, coverage| {
                if coverage > 0.0 {
                    samples.push((x, y, coverage));
                }
            });
        }

        Self { samples }
    }

    fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Blend the mask in `color` with its origin at `(left, top)`.
    fn stamp(&self, surface: &mut RgbaImage, left: i32, top: i32, color: Rgba<u8>) {
        let width = surface.width() as i32;
        let height = surface.height() as i32;

        for &(x, y, coverage) in &self.samples {
            let tx = left + x;
            let ty = top + y;
            if tx >= 0 && ty >= 0 && tx < width && ty < height {
                let pixel = surface.get_pixel_mut(tx as u32, ty as u32);
                blend_coverage(pixel, color, coverage);
            }
        }
    }
}

/// Mix `color` into `pixel` by `coverage`, raising alpha the same way.
fn blend_coverage(pixel: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let c = coverage.clamp(0.0, 1.0);
    let mix = |dst: u8, src: u8| -> u8 {
        let dst = dst as f32;
        (dst + (src as f32 - dst) * c).round().clamp(0.0, 255.0) as u8
    };

    *pixel = Rgba([
        mix(pixel[0], color[0]),
        mix(pixel[1], color[1]),
        mix(pixel[2], color[2]),
        mix(pixel[3], 255),
    ]);
}

/// Draws outlined caption text onto a surface it borrows exclusively.
pub struct OutlinedTextRenderer<'a> {
    metrics: FontMetrics<'a>,
}

impl<'a> OutlinedTextRenderer<'a> {
    pub fn new(face: &'a dyn Typeface) -> Self {
        Self {
            metrics: FontMetrics::new(face),
        }
    }

    /// Draw `text` (newline separated) with its block's top-left at `position`.
    pub fn draw(
        &self,
        surface: &mut RgbaImage,
        position: TextPosition,
        text: &str,
        font_size: u32,
    ) {
        let lines: Vec<&str> = text.split('\n').collect();
        self.draw_lines(surface, position, &lines, font_size);
    }

    /// Draw center-aligned `lines` with the block's top-left at `position`.
    pub fn draw_lines<S: AsRef<str>>(
        &self,
        surface: &mut RgbaImage,
        position: TextPosition,
        lines: &[S],
        font_size: u32,
    ) {
        let left = position.x.floor();
        let top = position.y.floor();
        let mask = CoverageMask::rasterize(
            &self.metrics,
            lines,
            font_size,
            (position.x - left, position.y - top),
        );
        if mask.is_empty() {
            return;
        }

        let (left, top) = (left as i32, top as i32);
        let thickness = outline_thickness(font_size) as i32;

        for dx in -thickness..=thickness {
            for dy in -thickness..=thickness {
                mask.stamp(surface, left + dx, top + dy, OUTLINE_COLOR);
            }
        }

        mask.stamp(surface, left, top, FILL_COLOR);
    }
}
