// Chunk: docs/chunks/highlight_styles - Catppuccin Mocha theme for token kinds

//! Syntax theme mapping token kinds to styles.
//!
//! The default is the Catppuccin Mocha palette. Individual kinds can be
//! recolored from configuration with `kind name -> "#rrggbb"` pairs.

use std::collections::HashMap;

use thiserror::Error;

use crate::dfa::TokenKind;
use crate::style::{Color, Style};

/// Catppuccin Mocha color palette constants.
mod catppuccin {
    use crate::style::Color;

    pub const MAUVE: Color = Color::Rgb {
        r: 0xcb,
        g: 0xa6,
        b: 0xf7,
    }; // #cba6f7
    pub const GREEN: Color = Color::Rgb {
        r: 0xa6,
        g: 0xe3,
        b: 0xa1,
    }; // #a6e3a1
    pub const PEACH: Color = Color::Rgb {
        r: 0xfa,
        g: 0xb3,
        b: 0x87,
    }; // #fab387
    pub const TEAL: Color = Color::Rgb {
        r: 0x94,
        g: 0xe2,
        b: 0xd5,
    }; // #94e2d5
    pub const SKY: Color = Color::Rgb {
        r: 0x89,
        g: 0xdc,
        b: 0xeb,
    }; // #89dceb
    pub const TEXT: Color = Color::Rgb {
        r: 0xcd,
        g: 0xd6,
        b: 0xf4,
    }; // #cdd6f4
    pub const OVERLAY0: Color = Color::Rgb {
        r: 0x6c,
        g: 0x70,
        b: 0x86,
    }; // #6c7086
}

/// Errors from applying theme overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown token kind '{0}'")]
    UnknownKind(String),

    #[error("invalid color '{color}' for '{kind}' (expected #rrggbb)")]
    InvalidColor { kind: String, color: String },
}

/// A style for every [`TokenKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTheme {
    styles: [Style; TokenKind::COUNT],
}

impl SyntaxTheme {
    /// Creates the Catppuccin Mocha syntax theme.
    pub fn catppuccin_mocha() -> Self {
        let mut styles = [Style::fg(catppuccin::TEXT); TokenKind::COUNT];
        styles[TokenKind::Whitespace as usize] = Style::default();
        styles[TokenKind::Number as usize] = Style::fg(catppuccin::PEACH);
        styles[TokenKind::Operator as usize] = Style::fg(catppuccin::SKY);
        styles[TokenKind::Preprocessor as usize] = Style::fg(catppuccin::MAUVE);
        styles[TokenKind::Comment as usize] = Style {
            italic: true,
            ..Style::fg(catppuccin::OVERLAY0)
        };
        styles[TokenKind::String as usize] = Style::fg(catppuccin::GREEN);
        styles[TokenKind::Character as usize] = Style::fg(catppuccin::TEAL);
        Self { styles }
    }

    /// A theme that leaves everything unstyled.
    pub fn plain() -> Self {
        Self {
            styles: [Style::default(); TokenKind::COUNT],
        }
    }

    /// Returns the style for a token kind.
    pub fn style_for(&self, kind: TokenKind) -> Style {
        self.styles[kind as usize]
    }

    /// Replaces the style for a token kind.
    pub fn set_style(&mut self, kind: TokenKind, style: Style) {
        self.styles[kind as usize] = style;
    }

    /// Applies foreground color overrides keyed by token kind name.
    ///
    /// Overrides are validated before any is applied, so a bad entry leaves
    /// the theme untouched.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Result<(), ThemeError> {
        let mut parsed = Vec::with_capacity(overrides.len());
        for (name, hex) in overrides {
            let kind =
                TokenKind::from_name(name).ok_or_else(|| ThemeError::UnknownKind(name.clone()))?;
            let color = Color::from_hex(hex).ok_or_else(|| ThemeError::InvalidColor {
                kind: name.clone(),
                color: hex.clone(),
            })?;
            parsed.push((kind, color));
        }
        for (kind, color) in parsed {
            tracing::debug!(kind = kind.name(), ?color, "theme override");
            self.styles[kind as usize].fg = color;
        }
        Ok(())
    }
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}
