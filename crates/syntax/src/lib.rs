// Chunk: docs/chunks/dfa_lexer - Table-driven lexer for syntax highlighting

//! yeet-syntax: lexical highlighting for the yeet editor core.
//!
//! The lexer is a small deterministic finite automaton over a C-family
//! lexical alphabet. It does not parse; it only finds where the token kind
//! changes and records those positions as [`Lexeme`] breakpoints.
//!
//! # Overview
//!
//! - [`CharClass`] / [`classify`]: column reduction from characters to the
//!   lexer's 11-symbol alphabet.
//! - [`DfaState`] / [`TokenKind`]: automaton states and the highlight-level
//!   kind each one belongs to.
//! - [`lex_split`]: scans a document held in two slices (a gap buffer's live
//!   regions) without joining them.
//! - [`SyntaxTheme`]: maps token kinds to [`Style`]s for rendering.
//!
//! # Example
//!
//! ```
//! use yeet_syntax::{lex_str, Lexeme, TokenKind};
//!
//! let lexemes = lex_str("/* a */ b");
//! assert_eq!(lexemes[0], Lexeme::new(0, TokenKind::Comment));
//! assert_eq!(lexemes.last(), Some(&Lexeme::new(9, TokenKind::Whitespace)));
//! ```

mod char_class;
mod dfa;
mod lexer;
mod style;
mod theme;

pub use char_class::{classify, CharClass, CLASS_COUNT};
pub use dfa::{transition, DfaState, TokenKind, Transition, STATE_COUNT};
pub use lexer::{lex_split, lex_str, LexStats, Lexeme};
pub use style::{Color, Span, Style, StyledLine};
pub use theme::{SyntaxTheme, ThemeError};
