// Chunk: docs/chunks/dfa_lexer - Table-driven lexer for syntax highlighting
// Chunk: docs/chunks/split_lexing - Lexing across the gap without a copy

//! Breakpoint lexer.
//!
//! The lexer walks characters through the DFA in [`crate::dfa`] and records a
//! [`Lexeme`] wherever the token kind changes. Document content normally lives
//! in two physical slices (either side of a gap buffer's gap), so the driver
//! scans both in turn and carries the automaton across the seam.
//!
//! Two details make the seam subtle:
//!
//! - A `\` followed by a newline is a line continuation and is skipped as a
//!   pair. When the `\` is the last character of the first slice, the
//!   character that follows it in the *document* is the first character of
//!   the second slice, never whatever sits in the gap.
//! - When that continuation straddles the seam, the scan of the second slice
//!   has to start one character in.

use std::time::{Duration, Instant};

use crate::char_class::classify;
use crate::dfa::{transition, DfaState, TokenKind};

/// A breakpoint: the token kind that begins at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub offset: usize,
    pub kind: TokenKind,
}

impl Lexeme {
    pub fn new(offset: usize, kind: TokenKind) -> Self {
        Self { offset, kind }
    }
}

/// Measurements from one full lex pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexStats {
    /// Characters scanned (the document length).
    pub chars: usize,
    /// Breakpoints produced, including the end sentinel.
    pub lexemes: usize,
    /// Wall time spent scanning.
    pub elapsed: Duration,
}

/// Automaton state carried between the two slices of a split document.
#[derive(Debug)]
struct Lexer {
    state: DfaState,
    /// Logical position of the most recently classified character.
    prev: usize,
    /// Characters of the next slice already consumed by a line continuation.
    carry: usize,
}

impl Lexer {
    fn new() -> Self {
        Self {
            state: DfaState::Whitespace,
            prev: 0,
            carry: 0,
        }
    }

    /// Scans `region`, whose first character sits at logical offset `base`.
    ///
    /// `lookahead` is the character logically following the region, if any.
    fn scan(
        &mut self,
        region: &[char],
        base: usize,
        lookahead: Option<char>,
        out: &mut Vec<Lexeme>,
    ) {
        let mut i = std::mem::take(&mut self.carry);
        while i < region.len() {
            let ch = region[i];
            if ch == '\\' {
                let next = match region.get(i + 1) {
                    Some(&c) => Some(c),
                    None => lookahead,
                };
                if next == Some('\n') {
                    i += 2;
                    continue;
                }
            }

            let pos = base + i;
            let t = transition(self.state, classify(ch));
            let next = t.next();
            if t.backdates() {
                backdate(out, self.prev, next.kind());
            } else if t.emits() {
                out.push(Lexeme::new(pos, next.kind()));
            }
            self.state = next;
            self.prev = pos;
            i += 1;
        }
        self.carry = i - region.len();
    }
}

/// Moves a comment opener's breakpoint back onto its slash.
fn backdate(out: &mut Vec<Lexeme>, at: usize, kind: TokenKind) {
    match out.last_mut() {
        Some(last) if last.offset == at => last.kind = kind,
        _ => out.push(Lexeme::new(at, kind)),
    }

    // Keep the sequence minimal: a comment directly after a comment is one span.
    let len = out.len();
    let before = if len >= 2 {
        out[len - 2].kind
    } else {
        TokenKind::Whitespace
    };
    if out[len - 1].kind == before {
        out.pop();
    }
}

/// Lexes a document stored as two consecutive slices.
///
/// `out` is cleared and refilled with the breakpoints followed by a
/// `Whitespace` sentinel at the document length.
///
/// # Panics
///
/// Panics if more breakpoints are produced than the document has characters.
/// That can only be a bug in the transition table, and truncating the output
/// would silently corrupt highlighting.
pub fn lex_split(front: &[char], back: &[char], out: &mut Vec<Lexeme>) -> LexStats {
    let count = front.len() + back.len();
    let started = Instant::now();

    out.clear();
    out.reserve(count + 1);

    let mut lexer = Lexer::new();
    lexer.scan(front, 0, back.first().copied(), out);
    lexer.scan(back, front.len(), None, out);

    assert!(
        out.len() <= count,
        "lexeme capacity exceeded: {} breakpoints for {} characters",
        out.len(),
        count
    );
    out.push(Lexeme::new(count, TokenKind::Whitespace));

    LexStats {
        chars: count,
        lexemes: out.len(),
        elapsed: started.elapsed(),
    }
}

/// Lexes contiguous text. Mostly useful for tests and one-off highlighting.
pub fn lex_str(text: &str) -> Vec<Lexeme> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    lex_split(&chars, &[], &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn lx(offset: usize, kind: TokenKind) -> Lexeme {
        Lexeme::new(offset, kind)
    }

    fn split_at(text: &str, at: usize) -> Vec<Lexeme> {
        let chars: Vec<char> = text.chars().collect();
        let (front, back) = chars.split_at(at);
        let mut out = Vec::new();
        lex_split(front, back, &mut out);
        out
    }

    #[test]
    fn test_empty_document_is_just_sentinel() {
        assert_eq!(lex_str(""), vec![lx(0, Whitespace)]);
    }

    #[test]
    fn test_block_comment_then_identifier() {
        assert_eq!(
            lex_str("/* a */ b"),
            vec![lx(0, Comment), lx(7, Whitespace), lx(8, Identifier), lx(9, Whitespace)]
        );
    }

    #[test]
    fn test_string_with_escaped_quote_is_one_span() {
        assert_eq!(lex_str(r#""a\"b""#), vec![lx(0, String), lx(6, Whitespace)]);
    }

    #[test]
    fn test_char_literal_with_escape() {
        assert_eq!(
            lex_str(r"c = '\''"),
            vec![
                lx(0, Identifier),
                lx(1, Whitespace),
                lx(2, Operator),
                lx(3, Whitespace),
                lx(4, Character),
                lx(8, Whitespace),
            ]
        );
    }

    #[test]
    fn test_line_comment_ends_at_newline() {
        assert_eq!(
            lex_str("x // hi\ny"),
            vec![
                lx(0, Identifier),
                lx(1, Whitespace),
                lx(2, Comment),
                lx(7, Whitespace),
                lx(8, Identifier),
                lx(9, Whitespace),
            ]
        );
    }

    #[test]
    fn test_division_stays_operator() {
        assert_eq!(
            lex_str("a/b"),
            vec![lx(0, Identifier), lx(1, Operator), lx(2, Identifier), lx(3, Whitespace)]
        );
    }

    #[test]
    fn test_comment_after_operator_starts_at_slash() {
        assert_eq!(
            lex_str("=/*x*/"),
            vec![lx(0, Operator), lx(1, Comment), lx(6, Whitespace)]
        );
    }

    #[test]
    fn test_adjacent_comments_merge() {
        assert_eq!(lex_str("/**//*x*/"), vec![lx(0, Comment), lx(9, Whitespace)]);
    }

    #[test]
    fn test_numbers_absorb_suffixes() {
        assert_eq!(
            lex_str("0x1Fu;"),
            vec![lx(0, Number), lx(5, Operator), lx(6, Whitespace)]
        );
    }

    #[test]
    fn test_preprocessor_with_trailing_comment() {
        assert_eq!(
            lex_str("#define X 1 /* c */\nint"),
            vec![
                lx(0, Preprocessor),
                lx(12, Comment),
                lx(19, Whitespace),
                lx(20, Identifier),
                lx(23, Whitespace),
            ]
        );
    }

    #[test]
    fn test_preprocessor_resumes_after_inline_comment() {
        assert_eq!(
            lex_str("#if /*a*/ X"),
            vec![lx(0, Preprocessor), lx(4, Comment), lx(9, Preprocessor), lx(11, Whitespace)]
        );
    }

    #[test]
    fn test_line_continuation_extends_line_comment() {
        assert_eq!(
            lex_str("// a\\\nb\nc"),
            vec![lx(0, Comment), lx(7, Whitespace), lx(8, Identifier), lx(9, Whitespace)]
        );
    }

    #[test]
    fn test_line_continuation_is_not_an_operator() {
        // The backslash-newline pair is skipped without emitting anything.
        assert_eq!(
            lex_str("ab\\\ncd"),
            vec![lx(0, Identifier), lx(6, Whitespace)]
        );
    }

    #[test]
    fn test_split_inside_comment_closer() {
        let text = "/* a */ b";
        let whole = lex_str(text);
        for at in 0..=text.len() {
            assert_eq!(split_at(text, at), whole, "split at {}", at);
        }
    }

    #[test]
    fn test_split_between_backslash_and_newline() {
        let text = "x = 1; \\\n y";
        let whole = lex_str(text);
        let backslash = text.find('\\').unwrap();
        assert_eq!(split_at(text, backslash + 1), whole);
    }

    #[test]
    fn test_backslash_at_end_of_document() {
        assert_eq!(
            lex_str("a\\"),
            vec![lx(0, Identifier), lx(1, Operator), lx(2, Whitespace)]
        );
        assert_eq!(split_at("a\\", 2), lex_str("a\\"));
    }

    #[test]
    fn test_stats_count_sentinel() {
        let chars: Vec<char> = "int x;".chars().collect();
        let mut out = Vec::new();
        let stats = lex_split(&chars, &[], &mut out);
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.lexemes, out.len());
    }

    #[test]
    fn test_output_is_replaced_wholesale() {
        let mut out = vec![lx(42, Comment); 10];
        lex_split(&['a'], &[], &mut out);
        assert_eq!(out, vec![lx(0, Identifier), lx(1, Whitespace)]);
    }
}
