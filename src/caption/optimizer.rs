//! Font size search for a caption region.

use super::metrics::FontMetrics;
use super::splitter::split;
use super::typeface::Typeface;
use crate::config::RenderConfig;

/// Space available to one caption region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstraints {
    /// Upper bound for the font size of a single line
    pub max_font_size: u32,
    /// Size at which text is tested to decide whether it needs two lines
    pub min_single_line_font_size: u32,
    /// Widest a line may render
    pub max_text_width: u32,
}

impl LayoutConstraints {
    /// Constraints for an image of the given size.
    pub fn for_image(width: u32, height: u32, config: &RenderConfig) -> Self {
        Self {
            max_font_size: height / config.max_font_divisor.max(1),
            min_single_line_font_size: height / config.min_single_line_divisor.max(1),
            max_text_width: width.saturating_sub(config.text_margin),
        }
    }
}

/// Font size and line breaks chosen for a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    pub font_size: u32,
    /// One or two lines, in drawing order
    pub lines: Vec<String>,
    /// Some line is still wider than allowed at `font_size`
    pub overflow: bool,
}

impl LayoutResult {
    /// Lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Find the largest font size (and optional two-line split) that fits.
///
/// Text that is too wide at the minimum single-line size is split in two and
/// the size budget halves. Each line then gets the largest size not exceeding
/// the budget that fits the width, and the smallest of those is shared by all
/// lines. If nothing fits even at size 1 the layout is returned anyway with
/// `overflow` set.
pub fn optimize(face: &dyn Typeface, text: &str, constraints: &LayoutConstraints) -> LayoutResult {
    let metrics = FontMetrics::new(face);
    let max_width = constraints.max_text_width;

    let probe_size = constraints.min_single_line_font_size.max(1);
    let lines: Vec<&str> = if metrics.text_size(text, probe_size).width > max_width {
        split(text)
    } else {
        vec![text]
    };

    let candidate = constraints.max_font_size / lines.len() as u32;

    let font_size = if text.is_empty() {
        candidate
    } else {
        lines
            .iter()
            .map(|line| largest_fitting_size(&metrics, line, candidate, max_width).unwrap_or(1))
            .fold(candidate, u32::min)
    }
    .max(1);

    let overflow = lines
        .iter()
        .any(|line| metrics.text_size(line, font_size).width > max_width);

    if overflow {
        tracing::warn!(
            text = %text,
            font_size,
            max_text_width = max_width,
            "Caption does not fit the available width, rendering with overflow"
        );
    } else {
        tracing::debug!(
            text = %text,
            font_size,
            lines = lines.len(),
            "Caption layout resolved"
        );
    }

    LayoutResult {
        font_size,
        lines: lines.into_iter().map(str::to_owned).collect(),
        overflow,
    }
}

/// Largest size in `1..=ceiling` at which `line` is at most `max_width` wide.
fn largest_fitting_size(
    metrics: &FontMetrics<'_>,
    line: &str,
    ceiling: u32,
    max_width: u32,
) -> Option<u32> {
    let fits = |size: u32| metrics.text_size(line, size).width <= max_width;

    if ceiling == 0 || !fits(1) {
        return None;
    }

    // invariant: fits(low)
    let (mut low, mut high) = (1, ceiling);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if fits(mid) {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    Some(low)
}
