// Chunk: docs/chunks/dfa_lexer - Table-driven lexer for syntax highlighting

//! Column reduction for the lexer: maps every character to one of a small
//! set of input classes so the transition table stays narrow.

/// Number of distinct character classes (columns of the transition table).
pub const CLASS_COUNT: usize = 11;

/// Input alphabet of the lexer DFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    Whitespace,
    Newline,
    Ident,
    Pound,
    DoubleQuote,
    SingleQuote,
    Digit,
    Slash,
    Star,
    Backslash,
    Operator,
}

impl CharClass {
    /// All classes in column order.
    pub const ALL: [CharClass; CLASS_COUNT] = [
        CharClass::Whitespace,
        CharClass::Newline,
        CharClass::Ident,
        CharClass::Pound,
        CharClass::DoubleQuote,
        CharClass::SingleQuote,
        CharClass::Digit,
        CharClass::Slash,
        CharClass::Star,
        CharClass::Backslash,
        CharClass::Operator,
    ];

    /// Returns the table column for this class.
    pub const fn index(self) -> usize {
        self as usize
    }
}

const fn ascii_class(b: u8) -> CharClass {
    match b {
        // Entry 0 doubles as the class for every non-ASCII character.
        0 => CharClass::Ident,
        b'\n' | b'\r' => CharClass::Newline,
        1..=32 | 127 => CharClass::Whitespace,
        b'"' => CharClass::DoubleQuote,
        b'\'' => CharClass::SingleQuote,
        b'#' => CharClass::Pound,
        b'/' => CharClass::Slash,
        b'*' => CharClass::Star,
        b'\\' => CharClass::Backslash,
        b'0'..=b'9' => CharClass::Digit,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' | b'@' | b'`' => CharClass::Ident,
        _ => CharClass::Operator,
    }
}

const fn build_ascii_table() -> [CharClass; 128] {
    let mut table = [CharClass::Whitespace; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = ascii_class(i as u8);
        i += 1;
    }
    table
}

static ASCII_CLASSES: [CharClass; 128] = build_ascii_table();

/// Classifies a character. Code points outside ASCII fold onto entry 0.
#[inline]
pub fn classify(ch: char) -> CharClass {
    let code = ch as u32;
    let slot = if code < 128 { code as usize } else { 0 };
    ASCII_CLASSES[slot]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_underscore_are_ident() {
        for ch in ['a', 'z', 'A', 'Z', '_', '$'] {
            assert_eq!(classify(ch), CharClass::Ident, "{:?}", ch);
        }
    }

    #[test]
    fn test_non_ascii_folds_to_ident() {
        assert_eq!(classify('é'), CharClass::Ident);
        assert_eq!(classify('λ'), CharClass::Ident);
        assert_eq!(classify('😀'), CharClass::Ident);
    }

    #[test]
    fn test_whitespace_and_newlines() {
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('\u{7f}'), CharClass::Whitespace);
        assert_eq!(classify('\n'), CharClass::Newline);
        assert_eq!(classify('\r'), CharClass::Newline);
    }

    #[test]
    fn test_punctuation_classes() {
        assert_eq!(classify('"'), CharClass::DoubleQuote);
        assert_eq!(classify('\''), CharClass::SingleQuote);
        assert_eq!(classify('#'), CharClass::Pound);
        assert_eq!(classify('/'), CharClass::Slash);
        assert_eq!(classify('*'), CharClass::Star);
        assert_eq!(classify('\\'), CharClass::Backslash);
        assert_eq!(classify('7'), CharClass::Digit);
        for ch in ['+', '-', '=', ';', '{', '}', '(', ')', '[', ']', '<', '>', '.', ','] {
            assert_eq!(classify(ch), CharClass::Operator, "{:?}", ch);
        }
    }

    #[test]
    fn test_class_indices_are_dense() {
        for (i, class) in CharClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }
}
