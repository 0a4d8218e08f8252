#![forbid(unsafe_code)]

//! Inline style escapes for scoreline panels.
//!
//! Panel text carries its styling inline as two-char escape sequences:
//! - [`FormatCode`] - the recognized code chars (colors, formats, reset)
//! - [`tokens`] - a scanner pairing each introducer with its code char
//! - [`ActiveStyle`] - the style in effect at a point in a string
//!
//! # Example
//! ```
//! use scoreline_style::{ActiveStyle, strip_codes, translate_alternate};
//!
//! let text = translate_alternate('&', "&aKills: &l12");
//! assert_eq!(text, "§aKills: §l12");
//! assert_eq!(strip_codes(&text), "Kills: 12");
//! assert_eq!(ActiveStyle::of(&text).to_sequence(), "§a§l");
//! ```

pub mod code;
pub mod scan;
pub mod style;

pub use code::{ALT_INTRODUCER, FormatCode, INTRODUCER};
pub use scan::{Token, Tokens, ends_with_dangling, strip_codes, tokens, translate_alternate};
pub use style::{ActiveStyle, FormatFlags};
