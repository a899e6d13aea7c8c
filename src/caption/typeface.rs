//! Font capability used by measuring, layout and drawing.
//!
//! The caption engine never opens font files itself. Callers hand it an
//! already-loaded [`Typeface`]; [`GlyphFont`] is the `ab_glyph` backed
//! implementation, and the crate ships an embedded fallback face used for
//! watermarks when no other font is supplied.

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use std::sync::OnceLock;

use crate::error::{RenderError, ResourceKind};

/// Embedded font data (DejaVu Sans Mono, see fonts/LICENSE-DejaVu.txt).
const EMBEDDED_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

/// Parsed embedded face, shared by every caller after the first load.
static EMBEDDED_FONT: OnceLock<FontArc> = OnceLock::new();

/// Measures and rasterizes single lines of text at a pixel size.
///
/// Implementations must be monotonic: a larger `px` never yields a narrower
/// line. The font size search relies on it.
pub trait Typeface: Send + Sync {
    /// Advance width of `line` including kerning.
    fn line_width(&self, line: &str, px: f32) -> f32;

    /// Height of one line box (ascent to descent).
    fn line_height(&self, px: f32) -> f32;

    /// Distance from the top of the line box to the baseline.
    fn ascent(&self, px: f32) -> f32;

    /// Rasterize `line` with the top-left of its line box at `origin`.
    ///
    /// `plot` receives integer pixel coordinates and a coverage in 0.0..=1.0.
    fn rasterize_line(
        &self,
        line: &str,
        px: f32,
        origin: (f32, f32),
        plot: &mut dyn FnMut(i32, i32, f32),
    );
}

/// TrueType/OpenType face loaded through `ab_glyph`.
#[derive(Clone)]
pub struct GlyphFont {
    font: FontArc,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphFont {
    /// Load a font from raw file bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RenderError> {
        FontArc::try_from_vec(data)
            .map(|font| Self { font })
            .map_err(|e| RenderError::resource(ResourceKind::Font, e.to_string()))
    }

    /// The font bundled with the crate, parsed once per process.
    pub fn embedded() -> Result<Self, RenderError> {
        if let Some(font) = EMBEDDED_FONT.get() {
            return Ok(Self { font: font.clone() });
        }

        let font = FontArc::try_from_slice(EMBEDDED_FONT_DATA).map_err(|e| {
            RenderError::resource(ResourceKind::Font, format!("embedded font: {}", e))
        })?;
        let font = EMBEDDED_FONT.get_or_init(|| font).clone();
        Ok(Self { font })
    }

    fn scale(px: f32) -> PxScale {
        PxScale::from(px.max(1.0))
    }
}

impl Typeface for GlyphFont {
    fn line_width(&self, line: &str, px: f32) -> f32 {
        let scaled_font = self.font.as_scaled(Self::scale(px));

        let mut width = 0.0f32;
        let mut prev_glyph: Option<GlyphId> = None;

        for c in line.chars() {
            let glyph_id = scaled_font.glyph_id(c);
            if let Some(prev) = prev_glyph {
                width += scaled_font.kern(prev, glyph_id);
            }
            width += scaled_font.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }

        width.max(0.0)
    }

    fn line_height(&self, px: f32) -> f32 {
        self.font.as_scaled(Self::scale(px)).height()
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font.as_scaled(Self::scale(px)).ascent()
    }

    fn rasterize_line(
        &self,
        line: &str,
        px: f32,
        origin: (f32, f32),
        plot: &mut dyn FnMut(i32, i32, f32),
    ) {
        let scale = Self::scale(px);
        let scaled_font = self.font.as_scaled(scale);

        let baseline_y = origin.1 + scaled_font.ascent();
        let mut cursor_x = origin.0;
        let mut prev_glyph: Option<GlyphId> = None;

        for c in line.chars() {
            let glyph_id = scaled_font.glyph_id(c);

            if let Some(prev) = prev_glyph {
                cursor_x += scaled_font.kern(prev, glyph_id);
            }

            let glyph = glyph_id.with_scale_and_position(scale, point(cursor_x, baseline_y));

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = gx as i32 + bounds.min.x as i32;
                    let y = gy as i32 + bounds.min.y as i32;
                    plot(x, y, coverage);
                });
            }

            cursor_x += scaled_font.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }
    }
}
