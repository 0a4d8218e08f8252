#![forbid(unsafe_code)]

//! In-memory [`Board`] and [`Viewer`] implementations.
//!
//! Useful for tests and for front ends that draw the panel themselves (the
//! demo renders [`MemoryBoard::render`] to a terminal).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::board::{Board, BoardError, BoardErrorKind, DisplaySlot, Viewer};

#[derive(Debug)]
struct Objective {
    display_name: String,
    slot: DisplaySlot,
    scores: HashMap<String, i32>,
}

/// Snapshot of one registered team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSnapshot {
    /// The single entry bound to the team.
    pub entry: String,
    /// Text rendered before the entry.
    pub prefix: String,
    /// Text rendered after the entry.
    pub suffix: String,
}

#[derive(Debug, Default)]
struct State {
    objectives: HashMap<String, Objective>,
    teams: HashMap<String, TeamSnapshot>,
    entry_teams: HashMap<String, String>,
}

/// Thread-safe board held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryBoard {
    state: Mutex<State>,
}

impl MemoryBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lines of `objective` as a client would draw them, top first.
    ///
    /// Entries are ordered by score, highest first, ties by entry. Each line is
    /// `prefix + entry + suffix` for entries that belong to a team.
    pub fn render(&self, objective: &str) -> Result<Vec<String>, BoardError> {
        let state = self.state();
        let objective = state
            .objectives
            .get(objective)
            .ok_or_else(|| BoardError::new(BoardErrorKind::UnknownObjective, objective))?;

        let mut scored: Vec<(&String, i32)> = objective
            .scores
            .iter()
            .map(|(entry, score)| (entry, *score))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        Ok(scored
            .into_iter()
            .map(|(entry, _)| {
                match state.entry_teams.get(entry).and_then(|t| state.teams.get(t)) {
                    Some(team) => format!("{}{entry}{}", team.prefix, team.suffix),
                    None => entry.clone(),
                }
            })
            .collect())
    }

    /// Current state of a team.
    #[must_use]
    pub fn team(&self, team: &str) -> Option<TeamSnapshot> {
        self.state().teams.get(team).cloned()
    }

    /// Number of registered teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.state().teams.len()
    }

    /// Score of `entry` under `objective`.
    #[must_use]
    pub fn score(&self, objective: &str, entry: &str) -> Option<i32> {
        self.state()
            .objectives
            .get(objective)
            .and_then(|o| o.scores.get(entry).copied())
    }

    /// Slot `objective` is shown in.
    #[must_use]
    pub fn display_slot(&self, objective: &str) -> Option<DisplaySlot> {
        self.state().objectives.get(objective).map(|o| o.slot)
    }
}

impl Board for MemoryBoard {
    fn register_objective(
        &self,
        objective: &str,
        display_name: &str,
        slot: DisplaySlot,
    ) -> Result<(), BoardError> {
        let mut state = self.state();
        if state.objectives.contains_key(objective) {
            return Err(BoardError::new(
                BoardErrorKind::DuplicateObjective,
                objective,
            ));
        }
        state.objectives.insert(
            objective.to_owned(),
            Objective {
                display_name: display_name.to_owned(),
                slot,
                scores: HashMap::new(),
            },
        );
        Ok(())
    }

    fn display_name(&self, objective: &str) -> Result<String, BoardError> {
        self.state()
            .objectives
            .get(objective)
            .map(|o| o.display_name.clone())
            .ok_or_else(|| BoardError::new(BoardErrorKind::UnknownObjective, objective))
    }

    fn set_display_name(&self, objective: &str, display_name: &str) -> Result<(), BoardError> {
        let mut state = self.state();
        let objective = state
            .objectives
            .get_mut(objective)
            .ok_or_else(|| BoardError::new(BoardErrorKind::UnknownObjective, objective))?;
        display_name.clone_into(&mut objective.display_name);
        Ok(())
    }

    fn set_display_slot(&self, objective: &str, slot: DisplaySlot) -> Result<(), BoardError> {
        let mut state = self.state();
        let objective = state
            .objectives
            .get_mut(objective)
            .ok_or_else(|| BoardError::new(BoardErrorKind::UnknownObjective, objective))?;
        objective.slot = slot;
        Ok(())
    }

    fn register_team(&self, team: &str, entry: &str) -> Result<(), BoardError> {
        let mut state = self.state();
        if state.teams.contains_key(team) {
            return Err(BoardError::new(BoardErrorKind::DuplicateTeam, team));
        }
        if state.entry_teams.contains_key(entry) {
            return Err(BoardError::new(BoardErrorKind::Rejected, entry));
        }
        state.teams.insert(
            team.to_owned(),
            TeamSnapshot {
                entry: entry.to_owned(),
                prefix: String::new(),
                suffix: String::new(),
            },
        );
        state.entry_teams.insert(entry.to_owned(), team.to_owned());
        Ok(())
    }

    fn set_team_text(&self, team: &str, prefix: &str, suffix: &str) -> Result<(), BoardError> {
        let mut state = self.state();
        let snapshot = state
            .teams
            .get_mut(team)
            .ok_or_else(|| BoardError::new(BoardErrorKind::UnknownTeam, team))?;
        prefix.clone_into(&mut snapshot.prefix);
        suffix.clone_into(&mut snapshot.suffix);
        Ok(())
    }

    fn set_score(&self, objective: &str, entry: &str, score: i32) -> Result<(), BoardError> {
        let mut state = self.state();
        let objective = state
            .objectives
            .get_mut(objective)
            .ok_or_else(|| BoardError::new(BoardErrorKind::UnknownObjective, objective))?;
        objective.scores.insert(entry.to_owned(), score);
        Ok(())
    }
}

/// Viewer that remembers the last board it was shown.
#[derive(Debug)]
pub struct MemoryViewer<B = MemoryBoard> {
    board: Mutex<Option<Arc<B>>>,
}

impl<B> Default for MemoryViewer<B> {
    fn default() -> Self {
        Self {
            board: Mutex::new(None),
        }
    }
}

impl<B> MemoryViewer<B> {
    /// Create a viewer with no board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The board currently shown to this viewer.
    #[must_use]
    pub fn board(&self) -> Option<Arc<B>> {
        self.board
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<B> Viewer<B> for MemoryViewer<B> {
    fn show_board(&self, board: Arc<B>) {
        *self.board.lock().unwrap_or_else(PoisonError::into_inner) = Some(board);
    }
}
