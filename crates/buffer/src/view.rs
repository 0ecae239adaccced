// Chunk: docs/chunks/buffer_view - Cursor, selection and scroll state over a buffer
// Subsystem: docs/subsystems/viewport_scroll - Viewport mapping & scroll arithmetic

//! Per-view state over a shared [`Buffer`].
//!
//! A view stores its buffer's [`BufferId`], never a reference, so buffers can
//! be destroyed while views still exist. Every operation that needs content
//! takes the resolved buffer as an argument; the editor does the lookup.
//!
//! Horizontal intent is kept as `desired_distance`, a pixel distance from the
//! line start. Vertical moves aim for that distance on the target line and
//! leave it unchanged, so moving through a short line and back returns to
//! the original column. Every other cursor change resets it.

use std::ops::Range;

use crate::buffer::Buffer;
use crate::error::BufferError;
use crate::metrics::{column_closest_to_distance, column_distance, GlyphMetrics};
use crate::types::BufferId;

/// Fraction of the remaining scroll distance covered per second, as an
/// exponential rate.
const SCROLL_RATE: f32 = 18.0;

/// Scroll animation stops once within this many pixels of the target.
const SCROLL_SNAP_PX: f32 = 0.5;

/// A point in view-local pixels, relative to the top-left of the text area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Cursor, selection, scroll and focus for one view of a buffer.
#[derive(Debug, Clone)]
pub struct BufferView {
    buffer_id: BufferId,
    cursor: usize,
    /// Selection anchor. Equal to `cursor` when nothing is selected.
    selection: usize,
    line: usize,
    column: usize,
    desired_distance: f32,
    current_scroll_y: f32,
    target_scroll_y: f32,
    viewport_height: f32,
    focused: bool,
    /// Buffer generation the cursor was last validated against.
    seen_generation: u64,
}

impl BufferView {
    pub fn new(buffer_id: BufferId) -> Self {
        Self {
            buffer_id,
            cursor: 0,
            selection: 0,
            line: 0,
            column: 0,
            desired_distance: 0.0,
            current_scroll_y: 0.0,
            target_scroll_y: 0.0,
            viewport_height: 0.0,
            focused: false,
            seen_generation: 0,
        }
    }

    pub fn buffer_id(&self) -> BufferId {
        self.buffer_id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Cursor line, as of the last cursor info refresh.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Cursor column, as of the last cursor info refresh.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn desired_distance(&self) -> f32 {
        self.desired_distance
    }

    pub fn scroll_y(&self) -> f32 {
        self.current_scroll_y
    }

    pub fn target_scroll_y(&self) -> f32 {
        self.target_scroll_y
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // ==================== Cursor info ====================

    /// Recomputes `line` and `column` from the cursor offset.
    ///
    /// With `update_desired`, also resets the desired distance to the
    /// cursor's current pixel position.
    pub fn refresh_cursor_info<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
        update_desired: bool,
    ) {
        debug_assert_eq!(buffer.id(), self.buffer_id, "view used with wrong buffer");
        let pos = buffer.position_of(self.cursor);
        self.line = pos.line;
        self.column = pos.col;
        if update_desired {
            self.desired_distance = column_distance(buffer, pos.line, pos.col, metrics);
        }
        self.seen_generation = buffer.generation();
    }

    /// Pulls the cursor and anchor back inside the buffer after edits made
    /// elsewhere. Does nothing if the buffer has not changed.
    pub fn clamp_to<M: GlyphMetrics + ?Sized>(&mut self, buffer: &Buffer, metrics: &M) {
        if buffer.generation() == self.seen_generation {
            return;
        }
        let count = buffer.count();
        self.cursor = self.cursor.min(count);
        self.selection = self.selection.min(count);
        self.refresh_cursor_info(buffer, metrics, false);
    }

    fn collapse_to(&mut self, offset: usize) {
        self.cursor = offset;
        self.selection = offset;
    }

    // ==================== Selection ====================

    /// Places the cursor at `offset` and clears the selection.
    pub fn set_cursor<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
        offset: usize,
    ) -> Result<(), BufferError> {
        if offset > buffer.count() {
            return Err(BufferError::OutOfBounds {
                index: offset,
                count: buffer.count(),
            });
        }
        self.collapse_to(offset);
        self.refresh_cursor_info(buffer, metrics, true);
        Ok(())
    }

    /// Moves the cursor to `offset`, keeping the anchor where it is.
    pub fn select_to<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
        offset: usize,
    ) -> Result<(), BufferError> {
        if offset > buffer.count() {
            return Err(BufferError::OutOfBounds {
                index: offset,
                count: buffer.count(),
            });
        }
        self.cursor = offset;
        self.refresh_cursor_info(buffer, metrics, true);
        Ok(())
    }

    pub fn has_selection(&self) -> bool {
        self.cursor != self.selection
    }

    /// The selected range in ascending order, if any.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        if !self.has_selection() {
            return None;
        }
        Some(self.cursor.min(self.selection)..self.cursor.max(self.selection))
    }

    // ==================== Navigation ====================

    /// Moves to the start of the cursor's line.
    pub fn seek_line_start<M: GlyphMetrics + ?Sized>(&mut self, buffer: &Buffer, metrics: &M) {
        let line = buffer.line_of(self.cursor.min(buffer.count()));
        self.collapse_to(buffer.line_start(line).unwrap_or(0));
        self.refresh_cursor_info(buffer, metrics, true);
    }

    /// Moves to the end of the cursor's line, before its newline.
    pub fn seek_line_end<M: GlyphMetrics + ?Sized>(&mut self, buffer: &Buffer, metrics: &M) {
        let line = buffer.line_of(self.cursor.min(buffer.count()));
        self.collapse_to(buffer.line_end(line).unwrap_or(buffer.count()));
        self.refresh_cursor_info(buffer, metrics, true);
    }

    /// Moves one character left or right, clamped to the document.
    pub fn seek_horizontal<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
        right: bool,
    ) {
        let cursor = self.cursor.min(buffer.count());
        let offset = if right {
            (cursor + 1).min(buffer.count())
        } else {
            cursor.saturating_sub(1)
        };
        self.collapse_to(offset);
        self.refresh_cursor_info(buffer, metrics, true);
    }

    /// Moves `delta` lines up (negative) or down, aiming for the desired
    /// distance. Clamped to the first and last line.
    pub fn move_vertical<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
        delta: isize,
    ) {
        let current = buffer.line_of(self.cursor.min(buffer.count()));
        let last = buffer.line_count() - 1;
        let target = current.saturating_add_signed(delta).min(last);

        let column = column_closest_to_distance(buffer, target, self.desired_distance, metrics);
        let start = buffer.line_start(target).unwrap_or(0);
        self.collapse_to(start + column);
        self.refresh_cursor_info(buffer, metrics, false);
    }

    /// Maps a view-local point to the nearest buffer offset.
    ///
    /// Points above the text map to the first line and points below it to
    /// the last.
    pub fn pick_index<M: GlyphMetrics + ?Sized>(
        &self,
        buffer: &Buffer,
        metrics: &M,
        point: Point,
    ) -> usize {
        let line_height = metrics.line_height();
        let row = if line_height > 0.0 {
            ((point.y + self.current_scroll_y) / line_height).floor()
        } else {
            0.0
        };
        let last = buffer.line_count() - 1;
        let line = if row < 0.0 {
            0
        } else {
            (row as usize).min(last)
        };
        let column = column_closest_to_distance(buffer, line, point.x, metrics);
        buffer.line_start(line).unwrap_or(0) + column
    }

    // ==================== Scrolling ====================

    /// Sets the height of the visible text area and re-clamps the scroll.
    pub fn set_viewport_height<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
        height: f32,
    ) {
        self.viewport_height = height.max(0.0);
        self.target_scroll_y = self.clamp_scroll(buffer, metrics, self.target_scroll_y);
        self.current_scroll_y = self.clamp_scroll(buffer, metrics, self.current_scroll_y);
    }

    fn clamp_scroll<M: GlyphMetrics + ?Sized>(&self, buffer: &Buffer, metrics: &M, y: f32) -> f32 {
        let line_height = metrics.line_height();
        if !line_height.is_finite() || line_height <= 0.0 {
            return 0.0;
        }
        let visible = (self.viewport_height / line_height).floor() as usize;
        let max_rows = buffer.line_count().saturating_sub(visible.max(1));
        y.clamp(0.0, max_rows as f32 * line_height)
    }

    /// Moves the scroll target by `delta` pixels. The visible scroll follows
    /// through [`animate_scroll`](Self::animate_scroll).
    pub fn scroll_by<M: GlyphMetrics + ?Sized>(&mut self, buffer: &Buffer, metrics: &M, delta: f32) {
        self.target_scroll_y = self.clamp_scroll(buffer, metrics, self.target_scroll_y + delta);
    }

    /// Eases the visible scroll toward the target.
    ///
    /// Returns true while the animation is still running.
    pub fn animate_scroll(&mut self, dt: f32) -> bool {
        let remaining = self.target_scroll_y - self.current_scroll_y;
        if remaining.abs() <= SCROLL_SNAP_PX {
            self.current_scroll_y = self.target_scroll_y;
            return false;
        }
        let step = 1.0 - (-SCROLL_RATE * dt.max(0.0)).exp();
        self.current_scroll_y += remaining * step;
        true
    }

    /// Moves the scroll target the minimum distance that shows the cursor's
    /// whole line. Returns whether the target changed.
    pub fn ensure_cursor_visible<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &Buffer,
        metrics: &M,
    ) -> bool {
        let line_height = metrics.line_height();
        let line = buffer.line_of(self.cursor.min(buffer.count()));
        let top = line as f32 * line_height;
        let bottom = top + line_height;

        let old = self.target_scroll_y;
        if top < self.target_scroll_y {
            self.target_scroll_y = top;
        } else if bottom > self.target_scroll_y + self.viewport_height {
            self.target_scroll_y = bottom - self.viewport_height;
        }
        self.target_scroll_y = self.clamp_scroll(buffer, metrics, self.target_scroll_y);
        self.target_scroll_y != old
    }

    // ==================== Focus ====================

    pub fn gained_focus(&mut self) {
        self.focused = true;
        tracing::trace!(buffer = %self.buffer_id, "view gained focus");
    }

    pub fn lost_focus(&mut self) {
        self.focused = false;
        tracing::trace!(buffer = %self.buffer_id, "view lost focus");
    }
}
