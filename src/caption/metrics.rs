//! Integer text measurement on top of a [`Typeface`].

use super::typeface::Typeface;

/// Vertical gap between lines of a multi-line block, in pixels.
pub const LINE_SPACING: u32 = 4;

/// Rendered extent of a string or block of lines, rounded up to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Measures text at integer font sizes. Sizes below 1 are measured as 1.
#[derive(Clone, Copy)]
pub struct FontMetrics<'a> {
    face: &'a dyn Typeface,
}

impl<'a> FontMetrics<'a> {
    pub fn new(face: &'a dyn Typeface) -> Self {
        Self { face }
    }

    pub fn face(&self) -> &'a dyn Typeface {
        self.face
    }

    /// Size of `text` laid out as a single line.
    pub fn text_size(&self, text: &str, font_size: u32) -> TextSize {
        let px = font_size.max(1) as f32;
        TextSize {
            width: self.face.line_width(text, px).ceil() as u32,
            height: self.face.line_height(px).ceil() as u32,
        }
    }

    /// Size of a block of lines: widest line by stacked line heights.
    pub fn block_size<S: AsRef<str>>(&self, lines: &[S], font_size: u32) -> TextSize {
        if lines.is_empty() {
            return TextSize::default();
        }

        let px = font_size.max(1) as f32;
        let width = lines
            .iter()
            .map(|line| self.face.line_width(line.as_ref(), px))
            .fold(0.0f32, f32::max);
        let count = lines.len() as u32;

        TextSize {
            width: width.ceil() as u32,
            height: count * self.line_advance(font_size) - LINE_SPACING,
        }
    }

    /// Distance between the tops of consecutive lines.
    pub fn line_advance(&self, font_size: u32) -> u32 {
        let px = font_size.max(1) as f32;
        self.face.line_height(px).ceil() as u32 + LINE_SPACING
    }
}
