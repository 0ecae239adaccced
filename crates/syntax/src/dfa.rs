// Chunk: docs/chunks/dfa_lexer - Table-driven lexer for syntax highlighting

//! The lexer's state machine.
//!
//! States and character classes are closed enums, and the transition matrix
//! is generated at compile time from an exhaustive `match`, so a missing
//! (state, class) pair is a compile error rather than a silent zero entry.
//!
//! Each entry packs the next state together with two flag bits:
//!
//! - `EMIT`: the token kind changes, so a breakpoint is recorded here.
//! - `BACKDATE`: the breakpoint belongs one character earlier. A `/` is lexed
//!   provisionally as an operator; when the following character turns it into
//!   a comment opener the comment starts at the slash, not after it.
//!
//! The `*End` states hold the closing `*/`, `"` or `'` inside its token and
//! then continue exactly like the state they resume.

use crate::char_class::{CharClass, CLASS_COUNT};

/// Number of DFA states (rows of the transition table).
pub const STATE_COUNT: usize = 20;

/// Highlight-level lexical state recorded in breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Whitespace,
    Identifier,
    Number,
    Operator,
    Preprocessor,
    Comment,
    String,
    Character,
}

impl TokenKind {
    pub const COUNT: usize = 8;

    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Whitespace,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Preprocessor,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Character,
    ];

    /// Stable lowercase name, used by theme configuration.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Character => "character",
        }
    }

    /// Looks up a kind by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Internal automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DfaState {
    Whitespace,
    Ident,
    Number,
    Operator,
    Slash,
    Preproc,
    PreprocSlash,
    PreprocBlockComment,
    PreprocBlockCommentStar,
    PreprocBlockCommentEnd,
    BlockComment,
    BlockCommentStar,
    BlockCommentEnd,
    LineComment,
    String,
    StringEscape,
    StringEnd,
    Char,
    CharEscape,
    CharEnd,
}

impl DfaState {
    /// All states in row order.
    pub const ALL: [DfaState; STATE_COUNT] = [
        DfaState::Whitespace,
        DfaState::Ident,
        DfaState::Number,
        DfaState::Operator,
        DfaState::Slash,
        DfaState::Preproc,
        DfaState::PreprocSlash,
        DfaState::PreprocBlockComment,
        DfaState::PreprocBlockCommentStar,
        DfaState::PreprocBlockCommentEnd,
        DfaState::BlockComment,
        DfaState::BlockCommentStar,
        DfaState::BlockCommentEnd,
        DfaState::LineComment,
        DfaState::String,
        DfaState::StringEscape,
        DfaState::StringEnd,
        DfaState::Char,
        DfaState::CharEscape,
        DfaState::CharEnd,
    ];

    /// Returns the table row for this state.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The token kind a character lexed in this state belongs to.
    pub const fn kind(self) -> TokenKind {
        match self {
            DfaState::Whitespace => TokenKind::Whitespace,
            DfaState::Ident => TokenKind::Identifier,
            DfaState::Number => TokenKind::Number,
            DfaState::Operator | DfaState::Slash => TokenKind::Operator,
            DfaState::Preproc | DfaState::PreprocSlash => TokenKind::Preprocessor,
            DfaState::PreprocBlockComment
            | DfaState::PreprocBlockCommentStar
            | DfaState::PreprocBlockCommentEnd
            | DfaState::BlockComment
            | DfaState::BlockCommentStar
            | DfaState::BlockCommentEnd
            | DfaState::LineComment => TokenKind::Comment,
            DfaState::String | DfaState::StringEscape | DfaState::StringEnd => TokenKind::String,
            DfaState::Char | DfaState::CharEscape | DfaState::CharEnd => TokenKind::Character,
        }
    }

    /// Successor state for one input class.
    const fn step(self, class: CharClass) -> DfaState {
        use CharClass as C;
        use DfaState as S;

        match self {
            // A closed string, char literal or comment resumes plain text.
            S::Whitespace | S::StringEnd | S::CharEnd | S::BlockCommentEnd => match class {
                C::Whitespace | C::Newline => S::Whitespace,
                C::Ident => S::Ident,
                C::Digit => S::Number,
                C::Slash => S::Slash,
                C::Star | C::Backslash | C::Operator => S::Operator,
                C::Pound => S::Preproc,
                C::DoubleQuote => S::String,
                C::SingleQuote => S::Char,
            },
            S::Ident => match class {
                C::Whitespace | C::Newline => S::Whitespace,
                C::Ident | C::Digit => S::Ident,
                C::Slash => S::Slash,
                C::Star | C::Backslash | C::Operator => S::Operator,
                C::Pound => S::Preproc,
                C::DoubleQuote => S::String,
                C::SingleQuote => S::Char,
            },
            S::Number => match class {
                C::Whitespace | C::Newline => S::Whitespace,
                C::Ident | C::Digit => S::Number,
                C::Slash => S::Slash,
                C::Star | C::Backslash | C::Operator => S::Operator,
                C::Pound => S::Preproc,
                C::DoubleQuote => S::String,
                C::SingleQuote => S::Char,
            },
            S::Operator => match class {
                C::Whitespace | C::Newline => S::Whitespace,
                C::Ident => S::Ident,
                C::Digit => S::Number,
                C::Slash => S::Slash,
                C::Star | C::Backslash | C::Operator => S::Operator,
                C::Pound => S::Preproc,
                C::DoubleQuote => S::String,
                C::SingleQuote => S::Char,
            },
            S::Slash => match class {
                C::Whitespace | C::Newline => S::Whitespace,
                C::Ident => S::Ident,
                C::Digit => S::Number,
                C::Slash => S::LineComment,
                C::Star => S::BlockComment,
                C::Backslash | C::Operator => S::Operator,
                C::Pound => S::Preproc,
                C::DoubleQuote => S::String,
                C::SingleQuote => S::Char,
            },
            S::Preproc | S::PreprocBlockCommentEnd => match class {
                C::Newline => S::Whitespace,
                C::Slash => S::PreprocSlash,
                _ => S::Preproc,
            },
            S::PreprocSlash => match class {
                C::Newline => S::Whitespace,
                C::Slash => S::LineComment,
                C::Star => S::PreprocBlockComment,
                _ => S::Preproc,
            },
            S::PreprocBlockComment => match class {
                C::Star => S::PreprocBlockCommentStar,
                _ => S::PreprocBlockComment,
            },
            S::PreprocBlockCommentStar => match class {
                C::Slash => S::PreprocBlockCommentEnd,
                C::Star => S::PreprocBlockCommentStar,
                _ => S::PreprocBlockComment,
            },
            S::BlockComment => match class {
                C::Star => S::BlockCommentStar,
                _ => S::BlockComment,
            },
            S::BlockCommentStar => match class {
                C::Slash => S::BlockCommentEnd,
                C::Star => S::BlockCommentStar,
                _ => S::BlockComment,
            },
            S::LineComment => match class {
                C::Newline => S::Whitespace,
                _ => S::LineComment,
            },
            S::String => match class {
                C::DoubleQuote => S::StringEnd,
                C::Backslash => S::StringEscape,
                _ => S::String,
            },
            S::StringEscape => S::String,
            S::Char => match class {
                C::SingleQuote => S::CharEnd,
                C::Backslash => S::CharEscape,
                _ => S::Char,
            },
            S::CharEscape => S::Char,
        }
    }

    const fn opens_comment_at_slash(self, next: DfaState) -> bool {
        matches!(self, DfaState::Slash | DfaState::PreprocSlash)
            && matches!(
                next,
                DfaState::LineComment | DfaState::BlockComment | DfaState::PreprocBlockComment
            )
    }
}

const STATE_MASK: u8 = 0x1f;
const BACKDATE: u8 = 0x40;
const EMIT: u8 = 0x80;

/// One packed cell of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition(u8);

impl Transition {
    const fn new(from: DfaState, next: DfaState) -> Self {
        let mut bits = next as u8;
        if from.kind() as u8 != next.kind() as u8 {
            bits |= EMIT;
        }
        if from.opens_comment_at_slash(next) {
            bits |= BACKDATE;
        }
        Transition(bits)
    }

    /// The state after consuming the character.
    #[inline]
    pub fn next(self) -> DfaState {
        DfaState::ALL[(self.0 & STATE_MASK) as usize]
    }

    /// True when the token kind changes on this transition.
    #[inline]
    pub fn emits(self) -> bool {
        self.0 & EMIT != 0
    }

    /// True when the breakpoint belongs to the previous character.
    #[inline]
    pub fn backdates(self) -> bool {
        self.0 & BACKDATE != 0
    }
}

type Table = [[Transition; CLASS_COUNT]; STATE_COUNT];

const fn build_table() -> Table {
    let mut table = [[Transition(0); CLASS_COUNT]; STATE_COUNT];
    let mut row = 0;
    while row < STATE_COUNT {
        let from = DfaState::ALL[row];
        let mut col = 0;
        while col < CLASS_COUNT {
            table[row][col] = Transition::new(from, from.step(CharClass::ALL[col]));
            col += 1;
        }
        row += 1;
    }
    table
}

static TRANSITIONS: Table = build_table();

/// Looks up the transition for `state` on an input of `class`.
#[inline]
pub fn transition(state: DfaState, class: CharClass) -> Transition {
    TRANSITIONS[state.index()][class.index()]
}
