#![forbid(unsafe_code)]

//! Left-to-right scanner for the escape grammar.
//!
//! The scanner pairs every [`INTRODUCER`] with the char that follows it,
//! whatever that char is. An introducer with nothing after it is
//! [`Token::Dangling`]. Pairing left to right means `"§§"` is one escape
//! (with `§` as its code char), not two dangling introducers.

use std::str::Chars;

use crate::code::{FormatCode, INTRODUCER};

/// One lexical unit of styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A visible char.
    Text(char),
    /// Introducer plus its code char. The code may be unrecognized.
    Escape(char),
    /// Introducer at the very end of the input.
    Dangling,
}

impl Token {
    /// Number of chars this token covers in the source text.
    #[inline]
    #[must_use]
    pub const fn char_len(&self) -> usize {
        match self {
            Self::Text(_) | Self::Dangling => 1,
            Self::Escape(_) => 2,
        }
    }

    /// The recognized code of an escape token.
    #[must_use]
    pub const fn format_code(&self) -> Option<FormatCode> {
        match self {
            Self::Escape(c) => FormatCode::from_char(*c),
            _ => None,
        }
    }
}

/// Iterator over the [`Token`]s of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Chars<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.chars.next()?;
        if c != INTRODUCER {
            return Some(Token::Text(c));
        }
        Some(match self.chars.next() {
            Some(code) => Token::Escape(code),
            None => Token::Dangling,
        })
    }
}

/// Scan `text` into tokens.
#[must_use]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { chars: text.chars() }
}

/// Whether `text` ends in an introducer that has no code char.
#[must_use]
pub fn ends_with_dangling(text: &str) -> bool {
    // Only the final char can be dangling, so a quick reject avoids the scan.
    if !text.ends_with(INTRODUCER) {
        return false;
    }
    matches!(tokens(text).last(), Some(Token::Dangling))
}

/// Remove recognized escape sequences and a dangling introducer.
///
/// Escapes with an unrecognized code are kept verbatim.
#[must_use]
pub fn strip_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokens(text) {
        match token {
            Token::Text(c) => out.push(c),
            Token::Escape(code) if FormatCode::from_char(code).is_none() => {
                out.push(INTRODUCER);
                out.push(code);
            }
            Token::Escape(_) | Token::Dangling => {}
        }
    }
    out
}

/// Rewrite `alt` followed by a recognized code char into a real escape.
///
/// Lets authored text write `&cRed` instead of `§cRed`. An `alt` char that
/// is not followed by a recognized code is left alone.
///
/// ```
/// use scoreline_style::translate_alternate;
///
/// assert_eq!(translate_alternate('&', "&cHP &Lx&z"), "§cHP §lx&z");
/// ```
#[must_use]
pub fn translate_alternate(alt: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == alt {
            if let Some(code) = chars.peek().copied().and_then(FormatCode::from_char) {
                chars.next();
                out.push(INTRODUCER);
                out.push(code.as_char());
                continue;
            }
        }
        out.push(c);
    }
    out
}
