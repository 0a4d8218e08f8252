#![forbid(unsafe_code)]

//! Format codes of the two-character escape grammar.
//!
//! A style escape is the [`INTRODUCER`] followed by exactly one code char.
//! Codes select one of sixteen colors, toggle one of five formats on, or
//! reset the style back to the default.
//!
//! # Example
//! ```
//! use scoreline_style::FormatCode;
//!
//! let red = FormatCode::from_char('c').unwrap();
//! assert!(red.is_color());
//! assert_eq!(red.to_string(), "§c");
//! ```

use std::fmt;

/// Char that begins a style escape sequence.
pub const INTRODUCER: char = '§';

/// Authoring-friendly stand-in for [`INTRODUCER`], see [`crate::translate_alternate`].
pub const ALT_INTRODUCER: char = '&';

/// A recognized code char following the [`INTRODUCER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// `0`
    Black,
    /// `1`
    DarkBlue,
    /// `2`
    DarkGreen,
    /// `3`
    DarkAqua,
    /// `4`
    DarkRed,
    /// `5`
    DarkPurple,
    /// `6`
    Gold,
    /// `7`
    Gray,
    /// `8`
    DarkGray,
    /// `9`
    Blue,
    /// `a`
    Green,
    /// `b`
    Aqua,
    /// `c`
    Red,
    /// `d`
    LightPurple,
    /// `e`
    Yellow,
    /// `f`
    White,
    /// `k`, scrambled glyphs.
    Obfuscated,
    /// `l`
    Bold,
    /// `m`
    Strikethrough,
    /// `n`
    Underline,
    /// `o`
    Italic,
    /// `r`, back to the default style.
    Reset,
}

impl FormatCode {
    /// Every code, in code-char order.
    pub const ALL: [Self; 22] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underline,
        Self::Italic,
        Self::Reset,
    ];

    /// Look up the code for a code char. Matching is case-insensitive.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '0' => Some(Self::Black),
            '1' => Some(Self::DarkBlue),
            '2' => Some(Self::DarkGreen),
            '3' => Some(Self::DarkAqua),
            '4' => Some(Self::DarkRed),
            '5' => Some(Self::DarkPurple),
            '6' => Some(Self::Gold),
            '7' => Some(Self::Gray),
            '8' => Some(Self::DarkGray),
            '9' => Some(Self::Blue),
            'a' => Some(Self::Green),
            'b' => Some(Self::Aqua),
            'c' => Some(Self::Red),
            'd' => Some(Self::LightPurple),
            'e' => Some(Self::Yellow),
            'f' => Some(Self::White),
            'k' => Some(Self::Obfuscated),
            'l' => Some(Self::Bold),
            'm' => Some(Self::Strikethrough),
            'n' => Some(Self::Underline),
            'o' => Some(Self::Italic),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }

    /// The canonical (lower-case) code char.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }

    /// Whether this code selects a color.
    #[inline]
    #[must_use]
    pub const fn is_color(self) -> bool {
        self.rgb().is_some()
    }

    /// Whether this code turns a text format on.
    #[inline]
    #[must_use]
    pub const fn is_format(self) -> bool {
        matches!(
            self,
            Self::Obfuscated | Self::Bold | Self::Strikethrough | Self::Underline | Self::Italic
        )
    }

    /// Whether this is the reset code.
    #[inline]
    #[must_use]
    pub const fn is_reset(self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Foreground palette value as `(r, g, b)`, or `None` for non-color codes.
    #[must_use]
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Black => Some((0x00, 0x00, 0x00)),
            Self::DarkBlue => Some((0x00, 0x00, 0xAA)),
            Self::DarkGreen => Some((0x00, 0xAA, 0x00)),
            Self::DarkAqua => Some((0x00, 0xAA, 0xAA)),
            Self::DarkRed => Some((0xAA, 0x00, 0x00)),
            Self::DarkPurple => Some((0xAA, 0x00, 0xAA)),
            Self::Gold => Some((0xFF, 0xAA, 0x00)),
            Self::Gray => Some((0xAA, 0xAA, 0xAA)),
            Self::DarkGray => Some((0x55, 0x55, 0x55)),
            Self::Blue => Some((0x55, 0x55, 0xFF)),
            Self::Green => Some((0x55, 0xFF, 0x55)),
            Self::Aqua => Some((0x55, 0xFF, 0xFF)),
            Self::Red => Some((0xFF, 0x55, 0x55)),
            Self::LightPurple => Some((0xFF, 0x55, 0xFF)),
            Self::Yellow => Some((0xFF, 0xFF, 0x55)),
            Self::White => Some((0xFF, 0xFF, 0xFF)),
            _ => None,
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{INTRODUCER}{}", self.as_char())
    }
}
