// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/split_lexing - Lexing across the gap without a copy

//! A document: gap buffer content, its line index and its lexed syntax.
//!
//! Every mutation goes through [`Buffer`] so that the line index is patched
//! in the same step as the text and the syntax is marked stale. Lexing is
//! deferred to [`Buffer::refresh_syntax`], which the editor's tick calls at
//! most once per dirty buffer.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use yeet_syntax::{lex_split, LexStats, Lexeme, Span, StyledLine, SyntaxTheme, TokenKind};

use crate::error::BufferError;
use crate::gap_buffer::{GapBuffer, DEFAULT_GAP_SIZE};
use crate::line_index::LineIndex;
use crate::types::{BufferId, Position};

/// Per-buffer tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Gap opened by a fresh buffer and reopened by growth.
    pub gap_size: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            gap_size: DEFAULT_GAP_SIZE,
        }
    }
}

/// Returns the highlighting language for a file name.
pub fn language_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("c" | "h") => "c",
        Some("cc" | "cpp" | "cxx" | "hpp" | "hh") => "cpp",
        _ => "text",
    }
}

/// A text document with line tracking and lazily refreshed syntax.
#[derive(Debug)]
pub struct Buffer {
    id: BufferId,
    path: Option<PathBuf>,
    title: String,
    language: &'static str,
    options: BufferOptions,
    text: GapBuffer,
    line_index: LineIndex,
    /// Breakpoints from the last lex, ending with the sentinel at `count`.
    syntax: Vec<Lexeme>,
    syntax_dirty: bool,
    /// Bumped on every content change; views compare it to notice edits.
    generation: u64,
    lex_stats: LexStats,
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl Buffer {
    /// Creates an empty, untitled buffer.
    pub fn new(id: BufferId) -> Self {
        Self::with_options(id, BufferOptions::default())
    }

    pub fn with_options(id: BufferId, options: BufferOptions) -> Self {
        Self {
            id,
            path: None,
            title: String::from("untitled"),
            language: "text",
            options,
            text: GapBuffer::with_gap(options.gap_size),
            line_index: LineIndex::new(),
            syntax: Vec::new(),
            syntax_dirty: true,
            generation: 0,
            lex_stats: LexStats::default(),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a buffer holding `content`.
    pub fn from_text(id: BufferId, content: &str) -> Self {
        let mut buffer = Self::new(id);
        buffer.replace_content(content);
        buffer
    }

    // ==================== Metadata ====================

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Associates the buffer with a file, deriving its title and language.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.language = language_for(&path);
        self.path = Some(path);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_syntax_dirty(&self) -> bool {
        self.syntax_dirty
    }

    /// Stats from the most recent lex.
    pub fn lex_stats(&self) -> LexStats {
        self.lex_stats
    }

    /// Read access to the underlying gap buffer.
    pub fn text(&self) -> &GapBuffer {
        &self.text
    }

    // ==================== Loading ====================

    /// Replaces the content with `bytes`, which must be valid UTF-8.
    ///
    /// On failure the buffer is left empty (and valid).
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                self.replace_content(text);
                Ok(())
            }
            Err(err) => {
                self.reset();
                Err(BufferError::InvalidEncoding {
                    valid_up_to: err.valid_up_to(),
                })
            }
        }
    }

    /// Loads a file into the buffer and associates the buffer with it.
    ///
    /// On failure the buffer is left empty and untitled, detached from any
    /// file it held before.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), BufferError> {
        let path = path.as_ref();
        let loaded = fs::read(path)
            .map_err(|source| BufferError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|bytes| self.load_from_bytes(&bytes));
        if let Err(err) = loaded {
            self.reset();
            self.clear_path();
            return Err(err);
        }
        self.set_path(path);

        tracing::debug!(
            buffer = %self.id,
            path = %path.display(),
            chars = self.count(),
            lines = self.line_count(),
            "loaded file"
        );
        Ok(())
    }

    fn replace_content(&mut self, text: &str) {
        self.text = GapBuffer::from_chars(text.chars(), self.options.gap_size);
        self.line_index.rebuild(self.text.chars());
        self.mark_dirty();
    }

    fn clear_path(&mut self) {
        self.path = None;
        self.title = String::from("untitled");
        self.language = "text";
    }

    fn reset(&mut self) {
        self.text = GapBuffer::with_gap(self.options.gap_size);
        self.line_index = LineIndex::new();
        self.syntax.clear();
        self.mark_dirty();
    }

    // ==================== Accessors ====================

    /// Number of characters in the document.
    pub fn count(&self) -> usize {
        self.text.count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_at(&self, index: usize) -> Result<char, BufferError> {
        self.text.get(index).ok_or(BufferError::OutOfBounds {
            index,
            count: self.count(),
        })
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Returns the full content as a String.
    pub fn content(&self) -> String {
        self.text.to_string()
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.text.slice(start, end)
    }

    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_index.line_start(line)
    }

    /// Offset one past the line's last character, excluding the newline.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        self.line_index.line_end(line, self.count())
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.line_index.line_len(line, self.count())
    }

    /// Returns the characters of a line, excluding its newline.
    pub fn line_chars(&self, line: usize) -> impl Iterator<Item = char> + '_ {
        let (start, end) = match (self.line_start(line), self.line_end(line)) {
            (Some(start), Some(end)) => (start, end),
            _ => (0, 0),
        };
        (start..end).filter_map(move |i| self.text.get(i))
    }

    /// Returns a line's content, excluding its newline.
    pub fn line_content(&self, line: usize) -> String {
        self.line_chars(line).collect()
    }

    /// Returns the line containing `index`.
    pub fn line_of(&self, index: usize) -> usize {
        self.line_index.line_at_offset(index)
    }

    /// All line starts, including the leading 0.
    pub fn line_starts(&self) -> &[usize] {
        self.line_index.line_starts()
    }

    /// Offsets just past each newline.
    pub fn boundaries(&self) -> &[usize] {
        self.line_index.boundaries()
    }

    /// Converts an offset to a position, clamping to the end of the document.
    pub fn position_of(&self, index: usize) -> Position {
        let index = index.min(self.count());
        let line = self.line_of(index);
        let start = self.line_start(line).unwrap_or(0);
        Position::new(line, index - start)
    }

    /// Converts a position to an offset, clamping line and column.
    pub fn offset_of(&self, pos: Position) -> usize {
        let line = pos.line.min(self.line_count() - 1);
        let start = self.line_start(line).unwrap_or(0);
        start + pos.col.min(self.line_len(line))
    }

    // ==================== Mutations ====================

    fn check_bounds(&self, index: usize, limit: usize) -> Result<(), BufferError> {
        if index > limit {
            return Err(BufferError::OutOfBounds {
                index,
                count: self.count(),
            });
        }
        Ok(())
    }

    /// Inserts `ch` at `index`, which may equal `count` to append.
    pub fn insert(&mut self, ch: char, index: usize) -> Result<(), BufferError> {
        self.check_bounds(index, self.count())?;
        self.text.insert(ch, index);
        self.line_index.insert(index, ch);
        self.mark_dirty();
        self.assert_line_index_consistent();
        Ok(())
    }

    /// Inserts a string at `index`, returning the number of characters added.
    pub fn insert_str(&mut self, s: &str, index: usize) -> Result<usize, BufferError> {
        self.check_bounds(index, self.count())?;
        let chars: Vec<char> = s.chars().collect();
        if chars.is_empty() {
            return Ok(0);
        }
        self.text.insert_slice(&chars, index);
        self.line_index.insert_chars(index, &chars);
        self.mark_dirty();
        self.assert_line_index_consistent();
        Ok(chars.len())
    }

    /// Removes and returns the character at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<char, BufferError> {
        let ch = self.char_at(index)?;
        self.remove_range(index, index + 1)?;
        Ok(ch)
    }

    /// Removes the half-open range `[first, last)` and returns its text.
    ///
    /// An empty range is a no-op and leaves the syntax clean.
    pub fn remove_range(&mut self, first: usize, last: usize) -> Result<String, BufferError> {
        self.check_bounds(last, self.count())?;
        self.check_bounds(first, last)?;
        if first == last {
            return Ok(String::new());
        }
        let removed = self.text.remove_range(first, last);
        self.line_index.remove_range(first, last);
        self.mark_dirty();
        self.assert_line_index_consistent();
        Ok(removed)
    }

    fn mark_dirty(&mut self) {
        self.syntax_dirty = true;
        self.generation += 1;
    }

    // ==================== Syntax ====================

    /// Re-lexes the document if it changed since the last lex.
    ///
    /// Returns whether a lex ran.
    pub fn refresh_syntax(&mut self) -> bool {
        if !self.syntax_dirty {
            return false;
        }
        let (front, back) = self.text.regions();
        self.lex_stats = lex_split(front, back, &mut self.syntax);
        self.syntax_dirty = false;

        tracing::debug!(
            buffer = %self.id,
            chars = self.lex_stats.chars,
            lexemes = self.lex_stats.lexemes,
            elapsed_us = self.lex_stats.elapsed.as_micros() as u64,
            "lexed buffer"
        );
        true
    }

    /// Breakpoints from the most recent lex. Stale while
    /// [`is_syntax_dirty`](Self::is_syntax_dirty) is true.
    pub fn syntax(&self) -> &[Lexeme] {
        &self.syntax
    }

    /// Token kind covering `index`, from the most recent lex.
    pub fn kind_at(&self, index: usize) -> TokenKind {
        match self.syntax.partition_point(|lexeme| lexeme.offset <= index) {
            0 => TokenKind::Whitespace,
            i => self.syntax[i - 1].kind,
        }
    }

    /// Non-empty `(range, kind)` runs covering the document.
    ///
    /// Text before the first breakpoint is whitespace. Yields nothing if the
    /// buffer has never been lexed.
    pub fn spans(&self) -> impl Iterator<Item = (Range<usize>, TokenKind)> + '_ {
        let lead = self
            .syntax
            .first()
            .map(|first| (0..first.offset, TokenKind::Whitespace));
        lead.into_iter()
            .chain(
                self.syntax
                    .windows(2)
                    .map(|pair| (pair[0].offset..pair[1].offset, pair[0].kind)),
            )
            .filter(|(range, _)| !range.is_empty())
    }

    /// Renders one line as styled spans.
    ///
    /// A buffer whose syntax is stale renders unstyled rather than with
    /// breakpoints that no longer line up with the text.
    pub fn styled_line(&self, line: usize, theme: &SyntaxTheme) -> StyledLine {
        let (start, end) = match (self.line_start(line), self.line_end(line)) {
            (Some(start), Some(end)) => (start, end),
            _ => return StyledLine::default(),
        };
        if self.syntax_dirty || self.syntax.is_empty() {
            return StyledLine::plain(self.slice(start, end));
        }

        let mut spans = Vec::new();
        let mut next = self.syntax.partition_point(|lexeme| lexeme.offset <= start);
        let mut kind = self.kind_at(start);
        let mut pos = start;
        while pos < end {
            let stop = self
                .syntax
                .get(next)
                .map_or(end, |lexeme| lexeme.offset.min(end));
            spans.push(Span::new(self.slice(pos, stop), theme.style_for(kind)));
            pos = stop;
            if let Some(lexeme) = self.syntax.get(next) {
                kind = lexeme.kind;
                next += 1;
            }
        }
        StyledLine::new(spans)
    }

    // ==================== Consistency ====================

    /// Panics unless the gap layout and line index agree with the content.
    pub fn check_invariants(&self) {
        assert!(
            self.text.gap_start() + self.text.gap_size() <= self.text.allocated(),
            "gap [{}, +{}) exceeds allocation {}",
            self.text.gap_start(),
            self.text.gap_size(),
            self.text.allocated()
        );
        let (front, back) = self.text.regions();
        assert_eq!(front.len() + back.len(), self.count());

        let mut expected = LineIndex::new();
        expected.rebuild(self.text.chars());
        assert_eq!(
            self.line_index.line_starts(),
            expected.line_starts(),
            "line index drifted from content (buffer {}, {} chars)",
            self.id,
            self.count()
        );
    }

    /// Sampled check: a full rebuild on every 64th mutation in debug builds.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        self.check_invariants();
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}
}
