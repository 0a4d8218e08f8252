#![forbid(unsafe_code)]

//! Accumulated style state.
//!
//! Mirrors how a client renders the escape grammar: a color code replaces
//! the color *and* clears every format, a format code adds to whatever is
//! active, and reset clears everything.

use std::fmt::Write as _;

use bitflags::bitflags;

use crate::code::FormatCode;
use crate::scan::{Token, tokens};

bitflags! {
    /// Text formats toggled on by format codes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlags: u8 {
        /// `k`
        const OBFUSCATED    = 0b0000_0001;
        /// `l`
        const BOLD          = 0b0000_0010;
        /// `m`
        const STRIKETHROUGH = 0b0000_0100;
        /// `n`
        const UNDERLINE     = 0b0000_1000;
        /// `o`
        const ITALIC        = 0b0001_0000;
    }
}

impl FormatFlags {
    /// Flag set by a format code, empty for any other code.
    #[must_use]
    pub const fn from_code(code: FormatCode) -> Self {
        match code {
            FormatCode::Obfuscated => Self::OBFUSCATED,
            FormatCode::Bold => Self::BOLD,
            FormatCode::Strikethrough => Self::STRIKETHROUGH,
            FormatCode::Underline => Self::UNDERLINE,
            FormatCode::Italic => Self::ITALIC,
            _ => Self::empty(),
        }
    }
}

const FORMAT_ORDER: [FormatCode; 5] = [
    FormatCode::Obfuscated,
    FormatCode::Bold,
    FormatCode::Strikethrough,
    FormatCode::Underline,
    FormatCode::Italic,
];

/// Style in effect at some point in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActiveStyle {
    /// Last color selected, if any.
    pub color: Option<FormatCode>,
    /// Formats turned on since that color.
    pub flags: FormatFlags,
}

impl ActiveStyle {
    /// The default (unstyled) state.
    pub const DEFAULT: Self = Self {
        color: None,
        flags: FormatFlags::empty(),
    };

    /// Scan `text` and return the style in effect at its end.
    ///
    /// A dangling introducer has no effect, and neither does an escape with an
    /// unrecognized code.
    #[must_use]
    pub fn of(text: &str) -> Self {
        tokens(text)
            .filter_map(|token| match token {
                Token::Escape(_) => token.format_code(),
                Token::Text(_) | Token::Dangling => None,
            })
            .fold(Self::DEFAULT, Self::apply)
    }

    /// Apply one code to this style.
    #[must_use]
    pub fn apply(self, code: FormatCode) -> Self {
        if code.is_reset() {
            Self::DEFAULT
        } else if code.is_color() {
            Self {
                color: Some(code),
                flags: FormatFlags::empty(),
            }
        } else {
            Self {
                color: self.color,
                flags: self.flags | FormatFlags::from_code(code),
            }
        }
    }

    /// Whether nothing is active.
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Canonical escape string reproducing this style from the default state.
    ///
    /// Color first, then formats in code order. Empty for the default style.
    #[must_use]
    pub fn to_sequence(&self) -> String {
        let mut out = String::new();
        if let Some(color) = self.color {
            let _ = write!(out, "{color}");
        }
        for code in FORMAT_ORDER {
            if self.flags.contains(FormatFlags::from_code(code)) {
                let _ = write!(out, "{code}");
            }
        }
        out
    }
}
