#![forbid(unsafe_code)]

//! Overflow-safe prefix/suffix splitting.
//!
//! A panel line is shown through two independently capped fields. Splitting
//! naively at the cap can leave an introducer at the end of the prefix
//! (its code char lands in the suffix and renders as a literal) and makes the
//! suffix start unstyled even when the text before the cut was colored.
//!
//! [`split_fields`] cuts at the cap, moves a straddling escape across the cut,
//! and prefixes the suffix with the style in effect at the cut.
//!
//! # Example
//! ```
//! use scoreline_text::split_fields;
//!
//! let split = split_fields("§6Gold coins: 42", 10).unwrap();
//! assert_eq!(split.prefix, "§6Gold coi");
//! assert_eq!(split.suffix, "§6ns: 42");
//! ```

use std::fmt;

use scoreline_style::{ActiveStyle, INTRODUCER, Token, ends_with_dangling, tokens};

/// Result of splitting text across the prefix and suffix fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSplit {
    /// Text for the first field.
    pub prefix: String,
    /// Text for the second field, empty when everything fit in the prefix.
    pub suffix: String,
}

/// Invalid splitter arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The field length was zero.
    ZeroLength,
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "field length must be > 0"),
        }
    }
}

impl std::error::Error for SplitError {}

/// Split `text` into a prefix and suffix of at most `max` chars each.
///
/// - Text that fits goes entirely into the prefix, minus a dangling introducer.
/// - Longer text is cut after `max` chars. An escape whose introducer is the
///   last char before the cut is moved whole to the suffix side.
/// - The suffix starts with the style active over the first `max + 1` chars
///   whenever that style fits in `max` chars; the remaining text is truncated
///   to make room for it. A style longer than `max` is omitted. A recognized
///   escape that straddled the cut is represented by that style.
/// - The suffix is truncated to `max` chars and never ends dangling.
///
/// Lengths are counted in `char`s.
///
/// # Errors
///
/// Returns [`SplitError::ZeroLength`] when `max` is zero.
pub fn split_fields(text: &str, max: usize) -> Result<FieldSplit, SplitError> {
    if max == 0 {
        return Err(SplitError::ZeroLength);
    }

    let len = text.chars().count();
    if len <= max {
        let prefix = if ends_with_dangling(text) {
            &text[..text.len() - INTRODUCER.len_utf8()]
        } else {
            text
        };
        return Ok(FieldSplit {
            prefix: prefix.to_owned(),
            suffix: String::new(),
        });
    }

    let straddle = straddling_escape(text, max);
    let cut = if straddle.is_some() { max - 1 } else { max };
    let prefix = head(text, cut);
    let mut rest = &text[prefix.len()..];

    let carry = ActiveStyle::of(head(text, max + 1)).to_sequence();
    let carry_len = carry.chars().count();
    let emit_carry = !carry.is_empty() && carry_len <= max;

    if emit_carry
        && straddle
            .and_then(|token| token.format_code())
            .is_some_and(|code| !code.is_reset())
    {
        rest = &rest[head(rest, 2).len()..];
    }

    let mut suffix = String::with_capacity(max * INTRODUCER.len_utf8());
    let mut room = max;
    if emit_carry {
        suffix.push_str(&carry);
        room -= carry_len;
    }
    suffix.push_str(head(rest, room));
    if ends_with_dangling(&suffix) {
        suffix.pop();
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        len,
        max,
        straddle = straddle.is_some(),
        carry = carry.as_str(),
        carried = emit_carry,
        "split text across fields"
    );

    Ok(FieldSplit {
        prefix: prefix.to_owned(),
        suffix,
    })
}

/// Truncate `text` to at most `max` chars without leaving a dangling introducer.
///
/// ```
/// use scoreline_text::cap_chars;
///
/// assert_eq!(cap_chars("§aLobby", 4), "§aLo");
/// assert_eq!(cap_chars("Lob§a", 4), "Lob");
/// ```
#[must_use]
pub fn cap_chars(text: &str, max: usize) -> &str {
    let capped = head(text, max);
    if ends_with_dangling(capped) {
        &capped[..capped.len() - INTRODUCER.len_utf8()]
    } else {
        capped
    }
}

/// The escape token that starts at char `max - 1`, if any.
fn straddling_escape(text: &str, max: usize) -> Option<Token> {
    let mut pos = 0;
    for token in tokens(text) {
        let next = pos + token.char_len();
        if next > max {
            return (pos < max).then_some(token);
        }
        if next == max {
            return None;
        }
        pos = next;
    }
    None
}

/// The first `n` chars of `text`.
fn head(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use scoreline_style::strip_codes;

    proptest! {
        #[test]
        fn fields_respect_cap(s in "[ab§clrz]{0,48}", max in 1usize..20) {
            let split = split_fields(&s, max).unwrap();
            prop_assert!(split.prefix.chars().count() <= max);
            prop_assert!(split.suffix.chars().count() <= max);
        }

        #[test]
        fn fields_never_end_dangling(s in "[ab§clrz]{0,48}", max in 1usize..20) {
            let split = split_fields(&s, max).unwrap();
            prop_assert!(!ends_with_dangling(&split.prefix));
            prop_assert!(!ends_with_dangling(&split.suffix));
        }

        #[test]
        fn fitting_text_only_loses_dangling_tail(s in "[ab§cl]{0,16}") {
            let split = split_fields(&s, 16).unwrap();
            let expected = s.strip_suffix('§').filter(|_| ends_with_dangling(&s)).unwrap_or(s.as_str());
            prop_assert_eq!(split.prefix.as_str(), expected);
            prop_assert!(split.suffix.is_empty());
        }

        #[test]
        fn prefix_resplits_to_itself(s in "[ab§clrz]{0,48}", max in 1usize..20) {
            let split = split_fields(&s, max).unwrap();
            let again = split_fields(&split.prefix, max).unwrap();
            prop_assert_eq!(again.prefix, split.prefix);
            prop_assert!(again.suffix.is_empty());
        }

        #[test]
        fn plain_text_reconstructs(s in "[a-z ]{0,40}", max in 1usize..20) {
            let split = split_fields(&s, max).unwrap();
            let joined = format!("{}{}", split.prefix, split.suffix);
            prop_assert!(s.starts_with(&joined));
            if s.chars().count() <= 2 * max {
                prop_assert_eq!(joined, s);
            }
        }

        #[test]
        fn visible_text_is_a_prefix_of_input(s in "[ab§clrz]{0,48}", max in 1usize..20) {
            let split = split_fields(&s, max).unwrap();
            let visible = format!("{}{}", strip_codes(&split.prefix), strip_codes(&split.suffix));
            prop_assert!(strip_codes(&s).starts_with(&visible));
        }
    }
}
