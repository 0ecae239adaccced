// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/buffer_view - Cursor, selection and scroll state over a buffer

//! yeet-buffer: the document model of the yeet editor core.
//!
//! # Overview
//!
//! - [`Buffer`]: gap buffer content with an incrementally maintained line
//!   index and lazily refreshed syntax breakpoints.
//! - [`BufferView`]: cursor, selection, scroll and focus for one view of a
//!   buffer. Views name their buffer by [`BufferId`].
//! - [`Editor`]: owns the buffers, hands out ids and re-lexes dirty buffers
//!   on [`Editor::tick`].
//! - [`GlyphMetrics`]: the measurement seam used to place the cursor.
//!
//! # Example
//!
//! ```
//! use yeet_buffer::{BufferView, Editor, MonospaceMetrics};
//! use yeet_syntax::TokenKind;
//!
//! let mut editor = Editor::new();
//! let buffer = editor.create_buffer();
//! buffer.insert_str("int x; /* y */", 0).unwrap();
//! let id = buffer.id();
//!
//! editor.tick();
//! let buffer = editor.find_buffer(id).unwrap();
//! assert_eq!(buffer.kind_at(0), TokenKind::Identifier);
//! assert_eq!(buffer.kind_at(7), TokenKind::Comment);
//!
//! let mut view = BufferView::new(id);
//! view.set_cursor(buffer, &MonospaceMetrics::default(), 4).unwrap();
//! assert_eq!(view.column(), 4);
//! ```

mod buffer;
mod editor;
mod error;
mod gap_buffer;
mod line_index;
mod metrics;
mod types;
mod view;

pub use buffer::{language_for, Buffer, BufferOptions};
pub use editor::Editor;
pub use error::{BufferError, EditorError};
pub use gap_buffer::{GapBuffer, DEFAULT_GAP_SIZE};
pub use line_index::LineIndex;
pub use metrics::{column_closest_to_distance, column_distance, GlyphMetrics, MonospaceMetrics};
pub use types::{BufferId, Position};
pub use view::{BufferView, Point};
