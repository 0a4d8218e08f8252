#![forbid(unsafe_code)]

//! Rotating panel titles.
//!
//! [`ScoreboardTitle`] is the validated, immutable title list plus the wait
//! between rotations. [`TitleRotation`] adds the cursor that a periodic
//! driver advances.
//!
//! ```text
//! single title  : advance() -> T0, T0, T0, ...       (never updates)
//! n > 1 titles  : advance() -> T0, T1, ..., Tn-1, T0, ...
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::limits::ProtocolLimits;

/// Shortest wait between two title rotations, in ticks.
pub const MIN_UPDATE_TICKS: u64 = 5;

/// How often a title should rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateInterval {
    /// Rotation is disabled (single title).
    Never,
    /// Rotate every this many ticks.
    Every(u64),
}

impl UpdateInterval {
    /// Interval in ticks, `None` when rotation is disabled.
    #[must_use]
    pub const fn ticks(self) -> Option<u64> {
        match self {
            Self::Never => None,
            Self::Every(ticks) => Some(ticks),
        }
    }
}

/// Invalid title configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// The title list was empty.
    Empty,
    /// A title exceeds the protocol's title limit.
    TooLong {
        index: usize,
        length: usize,
        max: usize,
    },
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "scoreboard title list cannot be empty"),
            Self::TooLong { index, length, max } => write!(
                f,
                "scoreboard title {index} is {length} chars long (limit {max})"
            ),
        }
    }
}

impl std::error::Error for TitleError {}

/// Ordered, non-empty list of panel titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardTitle {
    titles: Vec<String>,
    interval: UpdateInterval,
}

impl ScoreboardTitle {
    /// Validate `titles` against `limits` and fix the rotation interval.
    ///
    /// With a single title rotation is disabled. Otherwise `wait_ticks` is
    /// raised to at least [`MIN_UPDATE_TICKS`].
    ///
    /// # Errors
    ///
    /// [`TitleError::Empty`] for an empty list, [`TitleError::TooLong`] for
    /// any title longer than `limits.title_length()` chars.
    pub fn new<I, S>(titles: I, wait_ticks: u64, limits: ProtocolLimits) -> Result<Self, TitleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return Err(TitleError::Empty);
        }

        let max = limits.title_length();
        for (index, title) in titles.iter().enumerate() {
            let length = title.chars().count();
            if length > max {
                return Err(TitleError::TooLong { index, length, max });
            }
        }

        let interval = if titles.len() > 1 {
            UpdateInterval::Every(wait_ticks.max(MIN_UPDATE_TICKS))
        } else {
            UpdateInterval::Never
        };
        Ok(Self { titles, interval })
    }

    /// A title that never rotates.
    ///
    /// # Errors
    ///
    /// [`TitleError::TooLong`] if `title` exceeds the title limit.
    pub fn fixed(title: impl Into<String>, limits: ProtocolLimits) -> Result<Self, TitleError> {
        Self::new([title.into()], 0, limits)
    }

    /// All titles, in rotation order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Title at `index`.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Number of titles (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether there are no titles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Wait between rotations.
    #[must_use]
    pub const fn update_interval(&self) -> UpdateInterval {
        self.interval
    }

    /// Whether the title rotates at all.
    #[must_use]
    pub const fn should_update(&self) -> bool {
        matches!(self.interval, UpdateInterval::Every(_))
    }
}

/// A [`ScoreboardTitle`] with its rotation cursor.
///
/// The cursor is the only state shared between the periodic driver and
/// request handlers, so it is a lone atomic.
#[derive(Debug)]
pub struct TitleRotation {
    title: ScoreboardTitle,
    cursor: AtomicUsize,
}

impl TitleRotation {
    /// Start rotating `title` from its first entry.
    #[must_use]
    pub fn new(title: ScoreboardTitle) -> Self {
        Self {
            title,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Return the title at the cursor and move the cursor on.
    ///
    /// Once the cursor has handed out the last index it goes back to 0, so
    /// every title is shown once per cycle.
    pub fn advance(&self) -> &str {
        let last = self.title.len() - 1;
        if last == 0 {
            return &self.title.titles[0];
        }
        let current = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(if current >= last { 0 } else { current + 1 })
            })
            .unwrap_or_else(|current| current);
        &self.title.titles[current.min(last)]
    }

    /// Whether the title rotates at all.
    #[must_use]
    pub const fn should_update(&self) -> bool {
        self.title.should_update()
    }

    /// Wait between rotations.
    #[must_use]
    pub const fn update_interval(&self) -> UpdateInterval {
        self.title.update_interval()
    }

    /// The underlying title list.
    #[must_use]
    pub const fn title(&self) -> &ScoreboardTitle {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn rotation(titles: &[&str], wait: u64) -> TitleRotation {
        TitleRotation::new(
            ScoreboardTitle::new(titles.iter().copied(), wait, ProtocolLimits::LEGACY).unwrap(),
        )
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = ScoreboardTitle::new(Vec::<String>::new(), 10, ProtocolLimits::LEGACY);
        assert_eq!(err, Err(TitleError::Empty));
    }

    #[test]
    fn long_title_is_rejected() {
        let long = "x".repeat(33);
        let err = ScoreboardTitle::new(["ok", long.as_str()], 10, ProtocolLimits::LEGACY)
            .unwrap_err();
        assert_eq!(
            err,
            TitleError::TooLong {
                index: 1,
                length: 33,
                max: 32
            }
        );
        assert!(ScoreboardTitle::new([long], 10, ProtocolLimits::MODERN).is_ok());
    }

    #[test]
    fn title_length_counts_chars() {
        let title = "é".repeat(32);
        assert!(ScoreboardTitle::fixed(title, ProtocolLimits::LEGACY).is_ok());
    }

    #[test]
    fn single_title_never_updates() {
        let rotation = rotation(&["Only"], 40);
        assert!(!rotation.should_update());
        assert_eq!(rotation.update_interval(), UpdateInterval::Never);
        assert_eq!(rotation.update_interval().ticks(), None);
        for _ in 0..4 {
            assert_eq!(rotation.advance(), "Only");
        }
    }

    #[test]
    fn short_wait_is_clamped() {
        let rotation = rotation(&["A", "B", "C"], 2);
        assert!(rotation.should_update());
        assert_eq!(rotation.update_interval(), UpdateInterval::Every(5));
    }

    #[test]
    fn long_wait_is_kept() {
        let rotation = rotation(&["A", "B"], 40);
        assert_eq!(rotation.update_interval().ticks(), Some(40));
    }

    #[test]
    fn advance_cycles_through_every_title() {
        let rotation = rotation(&["A", "B", "C"], 0);
        let seen: Vec<&str> = (0..7).map(|_| rotation.advance()).collect();
        assert_eq!(seen, ["A", "B", "C", "A", "B", "C", "A"]);
    }

    #[test]
    fn two_titles_alternate() {
        let rotation = rotation(&["A", "B"], 0);
        let seen: Vec<&str> = (0..5).map(|_| rotation.advance()).collect();
        assert_eq!(seen, ["A", "B", "A", "B", "A"]);
    }

    #[test]
    fn accessors_expose_titles() {
        let rotation = rotation(&["A", "B"], 9);
        let title = rotation.title();
        assert_eq!(title.len(), 2);
        assert!(!title.is_empty());
        assert_eq!(title.title(1), Some("B"));
        assert_eq!(title.title(2), None);
        assert_eq!(title.titles(), ["A", "B"]);
    }

    #[test]
    fn concurrent_advances_hand_out_a_full_cycle() {
        let rotation = Arc::new(rotation(&["A", "B", "C", "D"], 5));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rotation = Arc::clone(&rotation);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| rotation.advance().to_owned())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut counts = std::collections::HashMap::new();
        for handle in handles {
            for title in handle.join().unwrap() {
                *counts.entry(title).or_insert(0usize) += 1;
            }
        }
        // 400 advances over 4 titles: each title handed out exactly 100 times.
        assert!(counts.values().all(|&n| n == 100));
        assert_eq!(counts.len(), 4);
    }
}
