// Chunk: docs/chunks/split_lexing - Lexing across the gap without a copy

//! Integration tests for the breakpoint lexer.
//!
//! The central property: where the document is split into two slices never
//! changes the result.

use proptest::prelude::*;
use yeet_syntax::{lex_split, lex_str, Lexeme, TokenKind};

fn lex_at(chars: &[char], at: usize) -> Vec<Lexeme> {
    let (front, back) = chars.split_at(at);
    let mut out = Vec::new();
    lex_split(front, back, &mut out);
    out
}

/// Text drawn from the characters that drive interesting transitions.
fn c_like_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop::sample::select(vec![
            'a', 'b', '_', '1', '9', ' ', '\t', '\n', '"', '\'', '#', '/', '*', '\\', '+', ';',
            'é',
        ]),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

#[test]
fn test_real_c_snippet() {
    let src = "#include <stdio.h>\nint main() { return 0; } // done\n";
    let lexemes = lex_str(src);

    assert_eq!(lexemes[0], Lexeme::new(0, TokenKind::Preprocessor));
    let comment = src.find("//").unwrap();
    assert!(lexemes.contains(&Lexeme::new(comment, TokenKind::Comment)));
    let zero = src.find('0').unwrap();
    assert!(lexemes.contains(&Lexeme::new(zero, TokenKind::Number)));
    assert_eq!(
        lexemes.last(),
        Some(&Lexeme::new(src.chars().count(), TokenKind::Whitespace))
    );
}

#[test]
fn test_split_inside_identifier() {
    let chars: Vec<char> = "alpha beta".chars().collect();
    let whole = lex_at(&chars, chars.len());
    assert_eq!(lex_at(&chars, 2), whole);
    assert_eq!(lex_at(&chars, 7), whole);
}

#[test]
fn test_split_between_comment_star_and_slash() {
    let chars: Vec<char> = "x /* c */ y".chars().collect();
    let star = 7;
    assert_eq!(chars[star], '*');
    assert_eq!(lex_at(&chars, star + 1), lex_at(&chars, chars.len()));
}

#[test]
fn test_split_between_opening_slash_and_star() {
    let chars: Vec<char> = "x /* c */ y".chars().collect();
    assert_eq!(lex_at(&chars, 3), lex_at(&chars, 0));
}

#[test]
fn test_multiline_block_comment() {
    let src = "/* one\n two */\nz";
    assert_eq!(
        lex_str(src),
        vec![
            Lexeme::new(0, TokenKind::Comment),
            Lexeme::new(14, TokenKind::Whitespace),
            Lexeme::new(15, TokenKind::Identifier),
            Lexeme::new(16, TokenKind::Whitespace),
        ]
    );
}

proptest! {
    #[test]
    fn prop_split_position_does_not_matter(text in c_like_text(), split in any::<prop::sample::Index>()) {
        let chars: Vec<char> = text.chars().collect();
        let at = split.index(chars.len() + 1);
        prop_assert_eq!(lex_at(&chars, at), lex_at(&chars, chars.len()));
    }

    #[test]
    fn prop_lexing_is_deterministic(text in c_like_text()) {
        prop_assert_eq!(lex_str(&text), lex_str(&text));
    }

    #[test]
    fn prop_breakpoints_are_minimal_and_ordered(text in c_like_text()) {
        let lexemes = lex_str(&text);
        let count = text.chars().count();

        prop_assert!(lexemes.len() <= count + 1);
        prop_assert_eq!(lexemes.last(), Some(&Lexeme::new(count, TokenKind::Whitespace)));

        let mut prev_kind = TokenKind::Whitespace;
        for pair in lexemes.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset);
        }
        for lexeme in &lexemes[..lexemes.len() - 1] {
            prop_assert_ne!(lexeme.kind, prev_kind);
            prev_kind = lexeme.kind;
        }
    }
}
