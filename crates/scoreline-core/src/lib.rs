#![forbid(unsafe_code)]

//! Core: protocol limits, rotating titles, and the fifteen-line panel.
//!
//! The panel talks to its backing display through the [`Board`] trait and
//! hands itself to viewers through [`Viewer`]. [`MemoryBoard`] is a complete
//! in-memory implementation.

pub mod board;
pub mod limits;
pub(crate) mod logging;
pub mod memory;
pub mod panel;
pub mod title;

pub use board::{Board, BoardError, BoardErrorKind, DisplaySlot, Viewer};
pub use limits::{LimitsError, ProtocolLimits, ServerVersion};
pub use memory::{MemoryBoard, MemoryViewer, TeamSnapshot};
pub use panel::{
    LINE_COUNT, LineOrder, OBJECTIVE_NAME, Panel, PanelConfig, PanelError, is_valid_line,
    line_entry, line_team,
};
pub use title::{MIN_UPDATE_TICKS, ScoreboardTitle, TitleError, TitleRotation, UpdateInterval};
