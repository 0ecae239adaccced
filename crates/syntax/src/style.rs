// Chunk: docs/chunks/highlight_styles - Renderer-facing style types
//!
//! Styled text types handed to the rendering collaborator.
//!
//! - [`Color`]: default, 256-color indexed, or 24-bit RGB
//! - [`Style`]: colors plus the few attributes a code view needs
//! - [`Span`]: a run of text with uniform styling
//! - [`StyledLine`]: the spans making up one buffer line

// =============================================================================
// Color
// =============================================================================

/// Text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Let the renderer decide.
    #[default]
    Default,
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

// =============================================================================
// Style
// =============================================================================

/// Visual attributes for a run of text.
///
/// The default style is unstyled text: default colors, no attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub dim: bool,
    pub underline: bool,
}

impl Style {
    /// A style with only a foreground color.
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: Color::Default,
            bold: false,
            italic: false,
            dim: false,
            underline: false,
        }
    }
}

// =============================================================================
// Span and StyledLine
// =============================================================================

/// A contiguous run of text with uniform styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// A line as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// A line with a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total character count across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
