#![forbid(unsafe_code)]

//! Fifteen-line status panel with a rotating title.
//!
//! Each line is backed by a team bound to an invisible marker entry. The
//! line's text is split across the team's prefix and suffix fields, and the
//! marker's score under the panel objective decides the line's position.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use scoreline_core::{MemoryBoard, Panel, PanelConfig, ScoreboardTitle, ProtocolLimits};
//!
//! let title = ScoreboardTitle::new(["§6Lobby", "§eLobby"], 20, ProtocolLimits::LEGACY).unwrap();
//! let board = Arc::new(MemoryBoard::new());
//! let panel = Panel::new(Arc::clone(&board), title, PanelConfig::default()).unwrap();
//!
//! panel.set_text(1, "§aPlayers: 12").unwrap();
//! assert_eq!(panel.text(1).as_deref(), Some("§aPlayers: 12"));
//! assert_eq!(panel.current_title().unwrap(), "§6Lobby");
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use scoreline_style::FormatCode;
use scoreline_text::{SplitError, cap_chars, split_fields};

use crate::board::{Board, BoardError, DisplaySlot, Viewer};
use crate::limits::ProtocolLimits;
use crate::logging::{debug, trace};
use crate::title::{ScoreboardTitle, TitleRotation};

/// Number of line slots on a panel.
pub const LINE_COUNT: usize = 15;

/// Name of the objective every panel registers on its board.
pub const OBJECTIVE_NAME: &str = "Scoreboard";

/// Marker color per line; each marker is the color followed by a reset.
const LINE_MARKERS: [FormatCode; LINE_COUNT] = [
    FormatCode::White,
    FormatCode::DarkBlue,
    FormatCode::DarkGreen,
    FormatCode::DarkAqua,
    FormatCode::DarkRed,
    FormatCode::DarkPurple,
    FormatCode::DarkGray,
    FormatCode::Gold,
    FormatCode::Gray,
    FormatCode::Blue,
    FormatCode::Green,
    FormatCode::Aqua,
    FormatCode::Red,
    FormatCode::Yellow,
    FormatCode::Black,
];

/// Whether `line` names a slot (1 to [`LINE_COUNT`]).
#[inline]
#[must_use]
pub const fn is_valid_line(line: usize) -> bool {
    line >= 1 && line <= LINE_COUNT
}

/// Invisible entry bound to `line`'s team.
#[must_use]
pub fn line_entry(line: usize) -> Option<String> {
    is_valid_line(line).then(|| format!("{}{}", LINE_MARKERS[line - 1], FormatCode::Reset))
}

/// Team name backing `line`.
#[must_use]
pub fn line_team(line: usize) -> Option<String> {
    is_valid_line(line).then(|| format!("Line {line}"))
}

/// How line numbers map to sort scores.
///
/// Clients list entries by descending score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineOrder {
    /// Score equals the line number, so line 15 is drawn on top.
    #[default]
    ScoreIsLine,
    /// Score is `16 - line`, so line 1 is drawn on top.
    TopDown,
}

impl LineOrder {
    /// Score registered for `line`.
    #[must_use]
    pub const fn score(self, line: usize) -> i32 {
        match self {
            Self::ScoreIsLine => line as i32,
            Self::TopDown => (LINE_COUNT + 1 - line) as i32,
        }
    }
}

/// Panel settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelConfig {
    /// Where the panel is shown.
    pub slot: DisplaySlot,
    /// Length limits of the connected client.
    pub limits: ProtocolLimits,
    /// Line number to score mapping.
    pub order: LineOrder,
}

impl PanelConfig {
    /// Default settings: sidebar, legacy limits, score equals line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display slot.
    #[must_use]
    pub fn with_slot(mut self, slot: DisplaySlot) -> Self {
        self.slot = slot;
        self
    }

    /// Set the protocol limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ProtocolLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the line ordering.
    #[must_use]
    pub fn with_order(mut self, order: LineOrder) -> Self {
        self.order = order;
        self
    }
}

/// Failure while updating a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// The backing board failed.
    Board(BoardError),
    /// Line text could not be split.
    Split(SplitError),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => write!(f, "board update failed: {err}"),
            Self::Split(err) => write!(f, "cannot split line text: {err}"),
        }
    }
}

impl std::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            Self::Split(err) => Some(err),
        }
    }
}

impl From<BoardError> for PanelError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<SplitError> for PanelError {
    fn from(err: SplitError) -> Self {
        Self::Split(err)
    }
}

#[derive(Debug, Default)]
struct LineSlot {
    text: Option<String>,
    team: Option<String>,
    scored: bool,
}

/// A fifteen-line panel drawn on a [`Board`].
#[derive(Debug)]
pub struct Panel<B: Board> {
    board: Arc<B>,
    rotation: TitleRotation,
    lines: [Mutex<LineSlot>; LINE_COUNT],
    slot: Mutex<DisplaySlot>,
    limits: ProtocolLimits,
    order: LineOrder,
}

impl<B: Board> Panel<B> {
    /// Register the panel objective on `board`, titled with the first title.
    ///
    /// # Errors
    ///
    /// Propagates the board's failure to register the objective.
    pub fn new(
        board: Arc<B>,
        title: ScoreboardTitle,
        config: PanelConfig,
    ) -> Result<Self, BoardError> {
        let limits = config.limits;
        let first = title.title(0).unwrap_or_default();
        board.register_objective(
            OBJECTIVE_NAME,
            cap_chars(first, limits.title_length()),
            config.slot,
        )?;
        debug!(
            slot = %config.slot,
            titles = title.len(),
            "registered panel objective"
        );

        Ok(Self {
            board,
            rotation: TitleRotation::new(title),
            lines: std::array::from_fn(|_| Mutex::new(LineSlot::default())),
            slot: Mutex::new(config.slot),
            limits,
            order: config.order,
        })
    }

    fn line(&self, line: usize) -> Option<MutexGuard<'_, LineSlot>> {
        is_valid_line(line)
            .then(|| self.lines[line - 1].lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Show `text` on `line`.
    ///
    /// Lines outside 1..=15 are ignored. The line's team is registered on
    /// first use and reused afterwards.
    ///
    /// # Errors
    ///
    /// Propagates board failures. The recorded text is only updated once the
    /// board accepted the new fields.
    pub fn set_text(&self, line: usize, text: &str) -> Result<(), PanelError> {
        let Some(mut slot) = self.line(line) else {
            trace!(line, "ignoring text for out-of-range line");
            return Ok(());
        };

        let split = split_fields(text, self.limits.field_length())?;
        let team = match slot.team.clone() {
            Some(team) => team,
            None => {
                let team = self.register_line(line)?;
                slot.team = Some(team.clone());
                team
            }
        };
        if !slot.scored {
            self.board.set_score(
                OBJECTIVE_NAME,
                &line_entry(line).unwrap_or_default(),
                self.order.score(line),
            )?;
            slot.scored = true;
        }

        self.board
            .set_team_text(&team, &split.prefix, &split.suffix)?;
        slot.text = Some(text.to_owned());
        trace!(
            line,
            prefix = split.prefix.as_str(),
            suffix = split.suffix.as_str(),
            "updated line"
        );
        Ok(())
    }

    fn register_line(&self, line: usize) -> Result<String, BoardError> {
        let team = line_team(line).unwrap_or_default();
        let entry = line_entry(line).unwrap_or_default();
        self.board.register_team(&team, &entry)?;
        debug!(line, team = team.as_str(), "registered line team");
        Ok(team)
    }

    /// Last text set on `line`, if any.
    #[must_use]
    pub fn text(&self, line: usize) -> Option<String> {
        self.line(line).and_then(|slot| slot.text.clone())
    }

    /// Blank `line` while keeping its team.
    ///
    /// # Errors
    ///
    /// Propagates board failures.
    pub fn clear_text(&self, line: usize) -> Result<(), PanelError> {
        let Some(mut slot) = self.line(line) else {
            return Ok(());
        };
        if let Some(team) = &slot.team {
            self.board.set_team_text(team, "", "")?;
        }
        slot.text = None;
        Ok(())
    }

    /// Where the panel is shown.
    #[must_use]
    pub fn display_slot(&self) -> DisplaySlot {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the panel to `slot`, keeping its board.
    ///
    /// # Errors
    ///
    /// Propagates board failures.
    pub fn set_display_slot(&self, slot: DisplaySlot) -> Result<(), PanelError> {
        let mut current = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        self.board.set_display_slot(OBJECTIVE_NAME, slot)?;
        *current = slot;
        Ok(())
    }

    /// Advance the title rotation and show the title it hands out.
    ///
    /// # Errors
    ///
    /// Propagates board failures.
    pub fn set_next_title(&self) -> Result<(), PanelError> {
        let title = cap_chars(self.rotation.advance(), self.limits.title_length());
        self.board.set_display_name(OBJECTIVE_NAME, title)?;
        debug!(title, "rotated panel title");
        Ok(())
    }

    /// Title currently shown by the board.
    ///
    /// # Errors
    ///
    /// Propagates board failures.
    pub fn current_title(&self) -> Result<String, PanelError> {
        Ok(self.board.display_name(OBJECTIVE_NAME)?)
    }

    /// Make this panel's board the active display of `viewer`.
    pub fn bind_to<V>(&self, viewer: &V)
    where
        V: Viewer<B> + ?Sized,
    {
        viewer.show_board(Arc::clone(&self.board));
    }

    /// The title list.
    #[must_use]
    pub fn scoreboard_title(&self) -> &ScoreboardTitle {
        self.rotation.title()
    }

    /// The title rotation, for periodic drivers.
    #[must_use]
    pub fn rotation(&self) -> &TitleRotation {
        &self.rotation
    }

    /// The backing board.
    #[must_use]
    pub fn board(&self) -> &Arc<B> {
        &self.board
    }

    /// Length limits in effect.
    #[must_use]
    pub fn limits(&self) -> ProtocolLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardErrorKind;
    use crate::memory::{MemoryBoard, MemoryViewer};

    fn panel(titles: &[&str]) -> Panel<MemoryBoard> {
        let title =
            ScoreboardTitle::new(titles.iter().copied(), 5, ProtocolLimits::LEGACY).unwrap();
        Panel::new(Arc::new(MemoryBoard::new()), title, PanelConfig::default()).unwrap()
    }

    #[test]
    fn line_entries_are_distinct() {
        let entries: std::collections::HashSet<_> =
            (1..=LINE_COUNT).filter_map(line_entry).collect();
        assert_eq!(entries.len(), LINE_COUNT);
        assert_eq!(line_entry(1).as_deref(), Some("§f§r"));
        assert_eq!(line_entry(15).as_deref(), Some("§0§r"));
        assert_eq!(line_entry(0), None);
        assert_eq!(line_entry(16), None);
    }

    #[test]
    fn line_orders() {
        assert_eq!(LineOrder::ScoreIsLine.score(1), 1);
        assert_eq!(LineOrder::ScoreIsLine.score(15), 15);
        assert_eq!(LineOrder::TopDown.score(1), 15);
        assert_eq!(LineOrder::TopDown.score(15), 1);
    }

    #[test]
    fn out_of_range_lines_are_ignored() {
        let panel = panel(&["T"]);
        panel.set_text(0, "x").unwrap();
        panel.set_text(16, "x").unwrap();
        assert_eq!(panel.text(0), None);
        assert_eq!(panel.text(16), None);
        assert_eq!(panel.board().team_count(), 0);
    }

    #[test]
    fn set_text_records_raw_text() {
        let panel = panel(&["T"]);
        assert_eq!(panel.text(1), None);
        panel.set_text(1, "hi").unwrap();
        assert_eq!(panel.text(1).as_deref(), Some("hi"));
    }

    #[test]
    fn team_is_created_once() {
        let panel = panel(&["T"]);
        panel.set_text(3, "first").unwrap();
        panel.set_text(3, "second").unwrap();
        assert_eq!(panel.board().team_count(), 1);

        let team = panel.board().team("Line 3").unwrap();
        assert_eq!(team.entry, "§2§r");
        assert_eq!(team.prefix, "second");
        assert_eq!(
            panel.board().score(OBJECTIVE_NAME, "§2§r"),
            Some(LineOrder::ScoreIsLine.score(3))
        );
    }

    /// Board whose first `set_score` call is rejected.
    #[derive(Default)]
    struct FlakyScores {
        inner: MemoryBoard,
        failed: std::sync::atomic::AtomicBool,
    }

    impl Board for FlakyScores {
        fn register_objective(
            &self,
            objective: &str,
            display_name: &str,
            slot: DisplaySlot,
        ) -> Result<(), BoardError> {
            self.inner.register_objective(objective, display_name, slot)
        }

        fn display_name(&self, objective: &str) -> Result<String, BoardError> {
            self.inner.display_name(objective)
        }

        fn set_display_name(&self, objective: &str, display_name: &str) -> Result<(), BoardError> {
            self.inner.set_display_name(objective, display_name)
        }

        fn set_display_slot(&self, objective: &str, slot: DisplaySlot) -> Result<(), BoardError> {
            self.inner.set_display_slot(objective, slot)
        }

        fn register_team(&self, team: &str, entry: &str) -> Result<(), BoardError> {
            self.inner.register_team(team, entry)
        }

        fn set_team_text(&self, team: &str, prefix: &str, suffix: &str) -> Result<(), BoardError> {
            self.inner.set_team_text(team, prefix, suffix)
        }

        fn set_score(&self, objective: &str, entry: &str, score: i32) -> Result<(), BoardError> {
            if !self.failed.swap(true, std::sync::atomic::Ordering::SeqCst) {
                return Err(BoardError::new(BoardErrorKind::Rejected, entry));
            }
            self.inner.set_score(objective, entry, score)
        }
    }

    #[test]
    fn failed_score_is_retried_on_next_write() {
        let title = ScoreboardTitle::fixed("T", ProtocolLimits::LEGACY).unwrap();
        let board = Arc::new(FlakyScores::default());
        let panel = Panel::new(Arc::clone(&board), title, PanelConfig::default()).unwrap();

        let err = panel.set_text(1, "hello").unwrap_err();
        assert!(matches!(err, PanelError::Board(ref e) if e.kind() == BoardErrorKind::Rejected));
        assert_eq!(panel.text(1), None);

        panel.set_text(1, "hello").unwrap();
        assert_eq!(board.inner.team_count(), 1);
        assert_eq!(board.inner.score(OBJECTIVE_NAME, "§f§r"), Some(1));
        let rendered = board.inner.render(OBJECTIVE_NAME).unwrap();
        assert_eq!(rendered, ["hello§f§r"]);
        assert_eq!(panel.text(1).as_deref(), Some("hello"));
    }

    #[test]
    fn long_text_is_split_across_fields() {
        let panel = panel(&["T"]);
        panel.set_text(1, "§6Gold collected: 1234567").unwrap();
        let team = panel.board().team("Line 1").unwrap();
        assert_eq!(team.prefix, "§6Gold collected");
        assert_eq!(team.suffix, "§6: 1234567");
    }

    #[test]
    fn clear_text_keeps_team() {
        let panel = panel(&["T"]);
        panel.set_text(2, "abc").unwrap();
        panel.clear_text(2).unwrap();
        assert_eq!(panel.text(2), None);
        let team = panel.board().team("Line 2").unwrap();
        assert_eq!((team.prefix.as_str(), team.suffix.as_str()), ("", ""));
        panel.clear_text(9).unwrap();
        panel.clear_text(99).unwrap();
    }

    #[test]
    fn initial_title_is_first_title() {
        let panel = panel(&["A", "B"]);
        assert_eq!(panel.current_title().unwrap(), "A");
    }

    #[test]
    fn set_next_title_follows_rotation() {
        let panel = panel(&["A", "B", "C"]);
        let mut shown = Vec::new();
        for _ in 0..4 {
            panel.set_next_title().unwrap();
            shown.push(panel.current_title().unwrap());
        }
        assert_eq!(shown, ["A", "B", "C", "A"]);
    }

    #[test]
    fn display_slot_updates_board() {
        let panel = panel(&["T"]);
        assert_eq!(panel.display_slot(), DisplaySlot::Sidebar);
        panel.set_display_slot(DisplaySlot::PlayerList).unwrap();
        assert_eq!(panel.display_slot(), DisplaySlot::PlayerList);
        assert_eq!(
            panel.board().display_slot(OBJECTIVE_NAME),
            Some(DisplaySlot::PlayerList)
        );
    }

    #[test]
    fn bind_to_shows_board() {
        let panel = panel(&["T"]);
        let viewer: MemoryViewer = MemoryViewer::new();
        panel.bind_to(&viewer);
        panel.bind_to(&viewer);
        assert!(Arc::ptr_eq(&viewer.board().unwrap(), panel.board()));
    }

    #[test]
    fn shared_objective_name_fails_second_panel() {
        let board = Arc::new(MemoryBoard::new());
        let title = ScoreboardTitle::fixed("T", ProtocolLimits::LEGACY).unwrap();
        Panel::new(Arc::clone(&board), title.clone(), PanelConfig::default()).unwrap();
        let err = Panel::new(board, title, PanelConfig::default()).unwrap_err();
        assert_eq!(err.kind(), BoardErrorKind::DuplicateObjective);
    }

    #[test]
    fn panel_error_exposes_source() {
        use std::error::Error as _;
        let err = PanelError::from(SplitError::ZeroLength);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "cannot split line text: field length must be > 0");
    }
}
