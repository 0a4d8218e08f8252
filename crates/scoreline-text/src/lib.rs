#![forbid(unsafe_code)]

//! Text fitting for scoreline panels.
//!
//! - [`split_fields`] - split a line across the prefix/suffix field pair
//! - [`cap_chars`] - truncate a single field without breaking an escape

pub mod split;

pub use split::{FieldSplit, SplitError, cap_chars, split_fields};
