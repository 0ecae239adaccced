// Chunk: docs/chunks/glyph_metrics - Pixel distances along a line for cursor placement

//! Glyph measurement and column/distance conversion.
//!
//! Views keep the cursor's horizontal goal as a pixel distance rather than a
//! column so that vertical movement across lines with tabs or wide
//! characters keeps the cursor visually aligned. The actual font is behind
//! [`GlyphMetrics`]; [`MonospaceMetrics`] is the cell-grid implementation.

use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;

/// Measures glyphs for layout.
pub trait GlyphMetrics {
    /// Horizontal advance of `ch` when drawn with its left edge at `x`.
    ///
    /// `x` matters for tabs, whose width depends on the next tab stop.
    fn advance(&self, ch: char, x: f32) -> f32;

    /// Height of one line in pixels.
    fn line_height(&self) -> f32;
}

/// A cell grid: each character is one or two cells wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub cell_width: f32,
    pub line_height: f32,
    /// Tab stops every `tab_width` cells.
    pub tab_width: usize,
}

impl MonospaceMetrics {
    pub fn new(cell_width: f32, line_height: f32, tab_width: usize) -> Self {
        Self {
            cell_width,
            line_height,
            tab_width: tab_width.max(1),
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0, 4)
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn advance(&self, ch: char, x: f32) -> f32 {
        if ch == '\t' {
            let cell = (x / self.cell_width).round() as usize;
            let next_stop = (cell / self.tab_width + 1) * self.tab_width;
            return (next_stop - cell) as f32 * self.cell_width;
        }
        // Control characters have no width of their own but still occupy a
        // cell when drawn as a placeholder.
        ch.width().unwrap_or(1) as f32 * self.cell_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Pixel distance from the start of `line` to the left edge of `column`.
///
/// Columns past the end of the line measure to the line end.
pub fn column_distance<M: GlyphMetrics + ?Sized>(
    buffer: &Buffer,
    line: usize,
    column: usize,
    metrics: &M,
) -> f32 {
    buffer
        .line_chars(line)
        .take(column)
        .fold(0.0, |x, ch| x + metrics.advance(ch, x))
}

/// The column on `line` whose left edge is closest to `distance`.
///
/// A distance inside a glyph rounds to the nearer edge, with ties going to
/// the left. Results are clamped to `0..=line_len`.
pub fn column_closest_to_distance<M: GlyphMetrics + ?Sized>(
    buffer: &Buffer,
    line: usize,
    distance: f32,
    metrics: &M,
) -> usize {
    let mut x = 0.0;
    let mut column = 0;
    for ch in buffer.line_chars(line) {
        let next = x + metrics.advance(ch, x);
        if distance < next {
            return if distance - x <= next - distance {
                column
            } else {
                column + 1
            };
        }
        x = next;
        column += 1;
    }
    column
}
