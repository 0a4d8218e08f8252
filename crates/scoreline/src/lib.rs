#![forbid(unsafe_code)]

//! Scoreline public facade crate.
//!
//! Re-exports the panel, title and splitter types from the internal crates
//! and adds a top-level [`Error`] that any of their failures convert into.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use scoreline::prelude::*;
//!
//! fn build() -> scoreline::Result<Panel<MemoryBoard>> {
//!     let limits = ProtocolLimits::for_version_tag("v1_8_R3").unwrap_or_default();
//!     let title = ScoreboardTitle::new(["§bSkyWars"], 0, limits)?;
//!     let panel = Panel::new(
//!         Arc::new(MemoryBoard::new()),
//!         title,
//!         PanelConfig::new().with_limits(limits),
//!     )?;
//!     panel.set_text(2, "§7Kills: §a3")?;
//!     Ok(panel)
//! }
//!
//! assert_eq!(build().unwrap().text(2).as_deref(), Some("§7Kills: §a3"));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use scoreline_core::{
    Board, BoardError, BoardErrorKind, DisplaySlot, LINE_COUNT, LimitsError, LineOrder,
    MIN_UPDATE_TICKS, MemoryBoard, MemoryViewer, OBJECTIVE_NAME, Panel, PanelConfig, PanelError,
    ProtocolLimits, ScoreboardTitle, ServerVersion, TeamSnapshot, TitleError, TitleRotation,
    UpdateInterval, Viewer,
};

// --- Style re-exports ------------------------------------------------------

pub use scoreline_style::{
    ALT_INTRODUCER, ActiveStyle, FormatCode, FormatFlags, INTRODUCER, strip_codes,
    translate_alternate,
};

// --- Text re-exports -------------------------------------------------------

pub use scoreline_text::{FieldSplit, SplitError, cap_chars, split_fields};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for scoreline users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid title list.
    Title(TitleError),
    /// Invalid protocol limits.
    Limits(LimitsError),
    /// Invalid splitter arguments.
    Split(SplitError),
    /// Failure reported by the backing board.
    Board(BoardError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(err) => write!(f, "{err}"),
            Self::Limits(err) => write!(f, "{err}"),
            Self::Split(err) => write!(f, "{err}"),
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Title(err) => Some(err),
            Self::Limits(err) => Some(err),
            Self::Split(err) => Some(err),
            Self::Board(err) => Some(err),
        }
    }
}

impl From<TitleError> for Error {
    fn from(err: TitleError) -> Self {
        Self::Title(err)
    }
}

impl From<LimitsError> for Error {
    fn from(err: LimitsError) -> Self {
        Self::Limits(err)
    }
}

impl From<SplitError> for Error {
    fn from(err: SplitError) -> Self {
        Self::Split(err)
    }
}

impl From<BoardError> for Error {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<PanelError> for Error {
    fn from(err: PanelError) -> Self {
        match err {
            PanelError::Board(err) => Self::Board(err),
            PanelError::Split(err) => Self::Split(err),
        }
    }
}

/// Standard result type for scoreline APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Board, DisplaySlot, Error, LineOrder, MemoryBoard, Panel, PanelConfig, ProtocolLimits,
        Result, ScoreboardTitle, Viewer,
    };

    pub use crate::{core, style, text};
}

pub use scoreline_core as core;
pub use scoreline_style as style;
pub use scoreline_text as text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_errors_flatten() {
        let err = Error::from(PanelError::Split(SplitError::ZeroLength));
        assert_eq!(err, Error::Split(SplitError::ZeroLength));
    }

    #[test]
    fn display_passes_through() {
        let err = Error::from(TitleError::Empty);
        assert_eq!(err.to_string(), "scoreboard title list cannot be empty");
    }

    #[test]
    fn question_mark_converts() {
        fn limits() -> Result<ProtocolLimits> {
            Ok(ProtocolLimits::new(0, 32)?)
        }
        assert!(matches!(limits(), Err(Error::Limits(_))));
    }
}
