#![forbid(unsafe_code)]

//! Seams to the backing display object and to viewers.
//!
//! A [`Board`] is the protocol-side scoreboard: one objective carrying the
//! title and the line scores, plus teams whose prefix/suffix fields carry the
//! visible text of each line. Implementations handle their own
//! synchronization, so every method takes `&self`.

use std::fmt;
use std::sync::Arc;

/// Where a board's objective is shown on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplaySlot {
    /// Right-hand sidebar.
    #[default]
    Sidebar,
    /// Tab player list.
    PlayerList,
    /// Under player name tags.
    BelowName,
}

impl DisplaySlot {
    /// Parse a slot name (`sidebar`, `player_list`/`list`, `below_name`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sidebar" => Some(Self::Sidebar),
            "player_list" | "playerlist" | "list" => Some(Self::PlayerList),
            "below_name" | "belowname" => Some(Self::BelowName),
            _ => None,
        }
    }

    /// Canonical slot name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::PlayerList => "player_list",
            Self::BelowName => "below_name",
        }
    }
}

impl fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardErrorKind {
    /// No objective with that name.
    UnknownObjective,
    /// No team with that name.
    UnknownTeam,
    /// An objective with that name already exists.
    DuplicateObjective,
    /// A team with that name already exists.
    DuplicateTeam,
    /// The backend refused the operation.
    Rejected,
}

/// Failure reported by a [`Board`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardError {
    kind: BoardErrorKind,
    name: String,
}

impl BoardError {
    /// Create an error about the named objective, team or entry.
    pub fn new(kind: BoardErrorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Error category.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        self.kind
    }

    /// Name the failed operation referred to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        match self.kind {
            BoardErrorKind::UnknownObjective => write!(f, "unknown objective {name:?}"),
            BoardErrorKind::UnknownTeam => write!(f, "unknown team {name:?}"),
            BoardErrorKind::DuplicateObjective => {
                write!(f, "objective {name:?} is already registered")
            }
            BoardErrorKind::DuplicateTeam => write!(f, "team {name:?} is already registered"),
            BoardErrorKind::Rejected => write!(f, "board rejected operation on {name:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Backing display object of a panel.
pub trait Board: Send + Sync {
    /// Create the objective that carries the title and line scores.
    fn register_objective(
        &self,
        objective: &str,
        display_name: &str,
        slot: DisplaySlot,
    ) -> Result<(), BoardError>;

    /// Title currently shown for `objective`.
    fn display_name(&self, objective: &str) -> Result<String, BoardError>;

    /// Replace the title shown for `objective`.
    fn set_display_name(&self, objective: &str, display_name: &str) -> Result<(), BoardError>;

    /// Move `objective` to another slot.
    fn set_display_slot(&self, objective: &str, slot: DisplaySlot) -> Result<(), BoardError>;

    /// Create a team holding the single `entry`.
    fn register_team(&self, team: &str, entry: &str) -> Result<(), BoardError>;

    /// Set the text fields rendered around a team's entry.
    fn set_team_text(&self, team: &str, prefix: &str, suffix: &str) -> Result<(), BoardError>;

    /// Set the sort score of `entry` under `objective`.
    fn set_score(&self, objective: &str, entry: &str, score: i32) -> Result<(), BoardError>;
}

/// Someone a board can be shown to.
pub trait Viewer<B: ?Sized> {
    /// Make `board` the viewer's active display.
    fn show_board(&self, board: Arc<B>);
}
