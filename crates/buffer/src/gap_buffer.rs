// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Gap buffer implementation for efficient text editing.
//!
//! The storage is one `Vec<char>` laid out as
//!
//! ```text
//!  [ live (front) | gap (unused) | live (back) ]
//!    0..gap_start   gap_start..gap_start+gap_size   ..allocated
//! ```
//!
//! and the document is `front ++ back`. Inserting or removing at the gap is
//! O(1); moving the gap costs the distance moved, which amortizes well
//! because edits cluster around the last edit point.
//!
//! Only logical offsets cross this module's boundary. Physical positions move
//! every time the gap does, so nothing outside may hold on to them.

use std::ops::Index;

/// Gap opened by a fresh buffer and the minimum reopened by growth.
pub const DEFAULT_GAP_SIZE: usize = 1024;

/// A gap buffer of characters.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// The underlying storage. Gap slots hold stale characters.
    data: Vec<char>,
    /// Physical (and logical) index where the gap starts.
    gap_start: usize,
    /// Number of unused slots in the gap.
    gap_size: usize,
    /// Gap size reopened when an insert finds the gap empty.
    min_gap: usize,
}

impl GapBuffer {
    /// Creates an empty gap buffer with the default gap.
    pub fn new() -> Self {
        Self::with_gap(DEFAULT_GAP_SIZE)
    }

    /// Creates an empty gap buffer whose whole allocation is gap.
    pub fn with_gap(size: usize) -> Self {
        Self {
            data: vec!['\0'; size],
            gap_start: 0,
            gap_size: size,
            min_gap: size.max(1),
        }
    }

    /// Creates a gap buffer holding `chars`, with a gap of `gap` at the end.
    pub fn from_chars<I>(chars: I, gap: usize) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut data: Vec<char> = chars.into_iter().collect();
        let len = data.len();
        data.resize(len + gap, '\0');
        Self {
            data,
            gap_start: len,
            gap_size: gap,
            min_gap: gap.max(1),
        }
    }

    /// Number of live characters (`allocated - gap_size`).
    pub fn count(&self) -> usize {
        self.data.len() - self.gap_size
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Total slots of backing storage, live and gap.
    pub fn allocated(&self) -> usize {
        self.data.len()
    }

    pub fn gap_start(&self) -> usize {
        self.gap_start
    }

    pub fn gap_size(&self) -> usize {
        self.gap_size
    }

    fn gap_end(&self) -> usize {
        self.gap_start + self.gap_size
    }

    fn physical(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_size
        }
    }

    /// Returns the character at a logical position.
    pub fn get(&self, pos: usize) -> Option<char> {
        if pos >= self.count() {
            return None;
        }
        Some(self.data[self.physical(pos)])
    }

    /// Returns a mutable reference to the character at a logical position.
    ///
    /// The reference must not outlive the borrow; any later mutation may
    /// move the character.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut char> {
        if pos >= self.count() {
            return None;
        }
        let physical = self.physical(pos);
        Some(&mut self.data[physical])
    }

    /// Moves the gap so that it starts at logical position `pos`.
    ///
    /// Only the characters between the old and new gap start are copied, and
    /// nothing happens when the gap is already there.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.count());

        if pos < self.gap_start {
            // Slide [pos, gap_start) to just before the gap end.
            let shift = self.gap_start - pos;
            let gap_end = self.gap_end();
            self.data.copy_within(pos..self.gap_start, gap_end - shift);
            self.gap_start = pos;
        } else if pos > self.gap_start {
            // Slide the first `shift` characters after the gap to its start.
            let shift = pos - self.gap_start;
            let gap_end = self.gap_end();
            self.data.copy_within(gap_end..gap_end + shift, self.gap_start);
            self.gap_start = pos;
        }
    }

    /// Widens the gap in place to `new_gap_size` slots.
    ///
    /// The front region stays put and the back region is copied outward, so
    /// the gap start (the edit point) is unchanged.
    pub fn grow(&mut self, new_gap_size: usize) {
        if new_gap_size <= self.gap_size {
            return;
        }

        let extra = new_gap_size - self.gap_size;
        let old_len = self.data.len();
        let gap_end = self.gap_end();

        self.data.resize(old_len + extra, '\0');
        if gap_end < old_len {
            self.data.copy_within(gap_end..old_len, gap_end + extra);
        }
        self.gap_size = new_gap_size;

        tracing::trace!(
            gap_start = self.gap_start,
            gap_size = self.gap_size,
            allocated = self.data.len(),
            "grew gap buffer"
        );
    }

    /// Makes room for at least `needed` characters at the gap.
    fn reserve_gap(&mut self, needed: usize) {
        if self.gap_size >= needed {
            return;
        }
        // Growth also scales with the document so large files do not
        // reallocate on every burst of typing.
        let target = needed.max(self.min_gap).max(self.count() / 2);
        self.grow(target);
    }

    /// Inserts a character at logical position `pos`.
    ///
    /// `pos` must be at most [`count`](Self::count).
    pub fn insert(&mut self, ch: char, pos: usize) {
        debug_assert!(pos <= self.count(), "insert position {} past end", pos);
        self.move_gap_to(pos);
        self.reserve_gap(1);
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
        self.gap_size -= 1;
    }

    /// Inserts a run of characters at logical position `pos`.
    pub fn insert_slice(&mut self, chars: &[char], pos: usize) {
        debug_assert!(pos <= self.count(), "insert position {} past end", pos);
        self.move_gap_to(pos);
        self.reserve_gap(chars.len());
        let start = self.gap_start;
        self.data[start..start + chars.len()].copy_from_slice(chars);
        self.gap_start += chars.len();
        self.gap_size -= chars.len();
    }

    /// Removes the logical range `[first, last)` by folding it into the gap.
    ///
    /// Returns the removed characters. The slots are not cleared.
    pub fn remove_range(&mut self, first: usize, last: usize) -> String {
        debug_assert!(first <= last && last <= self.count());
        self.move_gap_to(first);
        let gap_end = self.gap_end();
        let removed: String = self.data[gap_end..gap_end + (last - first)].iter().collect();
        self.gap_size += last - first;
        removed
    }

    /// Discards all content, keeping the allocation as gap.
    pub fn clear(&mut self) {
        self.gap_start = 0;
        self.gap_size = self.data.len();
    }

    /// The two live regions, in document order.
    pub fn regions(&self) -> (&[char], &[char]) {
        (&self.data[..self.gap_start], &self.data[self.gap_end()..])
    }

    /// Returns an iterator over all characters in the buffer.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        let (front, back) = self.regions();
        front.iter().chain(back.iter()).copied()
    }

    /// Returns the logical range `[start, end)` as a String, clamped to the
    /// buffer.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.count());
        if start >= end {
            return String::new();
        }
        (start..end).filter_map(|i| self.get(i)).collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for GapBuffer {
    type Output = char;

    fn index(&self, pos: usize) -> &char {
        let count = self.count();
        assert!(
            pos < count,
            "index {} out of bounds for gap buffer of {} characters",
            pos,
            count
        );
        &self.data[self.physical(pos)]
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
