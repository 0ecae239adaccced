// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

use std::fmt;

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// Ordering is by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Stable handle for a buffer owned by an [`Editor`](crate::Editor).
///
/// Ids are assigned from a monotonically increasing counter and never
/// reused, so a view holding the id of a destroyed buffer fails its lookup
/// instead of finding a different buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(pub u64);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
