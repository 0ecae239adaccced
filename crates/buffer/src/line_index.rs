// Chunk: docs/chunks/line_index - Incrementally maintained line boundaries

//! Line index for tracking line boundaries in the text buffer.
//!
//! Keeps the sorted offsets where each line starts so that line count is O(1)
//! and offset-to-line lookup is a binary search. Edits patch the table in
//! place rather than rescanning the document.

/// Tracks line boundaries in a text buffer.
///
/// `line_starts[0]` is always 0; every later entry is the offset just past a
/// `'\n'`. A document with no newlines therefore has one line and an empty
/// [`boundaries`](LineIndex::boundaries) list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the line index from the given content.
    ///
    /// O(n) in the content length; used for bulk loads and as the reference
    /// that incremental updates are checked against.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines. Always at least one.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the character offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the offset one past the last character of the line, excluding
    /// its newline. For the last line this is `total_len`.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        match self.line_starts.get(line + 1) {
            Some(&next) => Some(next - 1),
            None => Some(total_len),
        }
    }

    /// Returns the number of characters on the line, excluding its newline.
    pub fn line_len(&self, line: usize, total_len: usize) -> usize {
        match (self.line_start(line), self.line_end(line, total_len)) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Returns the line containing `offset`.
    ///
    /// An offset equal to a line start belongs to that line, so the offset of
    /// a `'\n'` belongs to the line it terminates. Offsets past the end map to
    /// the last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        // line_starts[0] == 0 <= offset, so the partition point is at least 1.
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// All line starts, including the leading 0.
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Offsets just past each `'\n'`, in ascending order.
    pub fn boundaries(&self) -> &[usize] {
        &self.line_starts[1..]
    }

    /// Records a single character inserted at `offset`.
    pub fn insert(&mut self, offset: usize, ch: char) {
        self.insert_chars(offset, &[ch]);
    }

    /// Records a run of characters inserted at `offset`.
    ///
    /// Starts after `offset` shift right by the run length; each `'\n'` in the
    /// run adds a start just past itself. A start equal to `offset` stays, as
    /// the inserted text lands at the beginning of that line.
    pub fn insert_chars(&mut self, offset: usize, chars: &[char]) {
        if chars.is_empty() {
            return;
        }
        let len = chars.len();
        let split = self.line_starts.partition_point(|&start| start <= offset);

        for start in &mut self.line_starts[split..] {
            *start += len;
        }

        let added = chars
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| ch == '\n')
            .map(|(i, _)| offset + i + 1);
        self.line_starts.splice(split..split, added);
    }

    /// Records removal of the half-open range `[first, last)`.
    ///
    /// Starts in `(first, last]` came from newlines inside the range and are
    /// dropped; later starts shift left by the range length.
    pub fn remove_range(&mut self, first: usize, last: usize) {
        if first >= last {
            return;
        }
        let len = last - first;
        let lo = self.line_starts.partition_point(|&start| start <= first);
        let hi = self.line_starts.partition_point(|&start| start <= last);

        self.line_starts.drain(lo..hi);
        for start in &mut self.line_starts[lo..] {
            *start -= len;
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
