#![forbid(unsafe_code)]

//! Tick-driven updates for a running panel.

use scoreline::{Board, Panel, PanelError, UpdateInterval};
use tracing::debug;

/// Line that shows the tick counter.
pub const STATUS_LINE: usize = 9;

/// Counts ticks towards the next title rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: UpdateInterval,
    elapsed: u64,
}

impl Ticker {
    /// Ticker for `interval`.
    #[must_use]
    pub const fn new(interval: UpdateInterval) -> Self {
        Self {
            interval,
            elapsed: 0,
        }
    }

    /// Count one tick; `true` when a rotation is due.
    pub fn tick(&mut self) -> bool {
        let Some(every) = self.interval.ticks() else {
            return false;
        };
        self.elapsed += 1;
        if self.elapsed >= every {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    /// Start counting again from zero.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Drives a panel one tick at a time.
pub struct Driver<'a, B: Board> {
    panel: &'a Panel<B>,
    ticker: Ticker,
    ticks: u64,
    show_status: bool,
}

impl<'a, B: Board> Driver<'a, B> {
    /// Driver for `panel`, rotating at the panel's own interval.
    pub fn new(panel: &'a Panel<B>) -> Self {
        Self {
            panel,
            ticker: Ticker::new(panel.rotation().update_interval()),
            ticks: 0,
            show_status: true,
        }
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick: refresh the status line and rotate the title when due.
    ///
    /// Returns whether the title rotated.
    ///
    /// # Errors
    ///
    /// Propagates panel failures.
    pub fn step(&mut self) -> Result<bool, PanelError> {
        self.ticks += 1;
        if self.show_status {
            self.panel
                .set_text(STATUS_LINE, &format!("§7Tick: §f{}", self.ticks))?;
        }
        if self.ticker.tick() {
            self.panel.set_next_title()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Rotate the title now and restart the interval.
    ///
    /// # Errors
    ///
    /// Propagates panel failures.
    pub fn rotate_now(&mut self) -> Result<(), PanelError> {
        self.panel.set_next_title()?;
        self.ticker.reset();
        Ok(())
    }

    /// Blank the status line and stop refreshing it.
    ///
    /// # Errors
    ///
    /// Propagates panel failures.
    pub fn clear_status(&mut self) -> Result<(), PanelError> {
        self.show_status = false;
        debug!(line = STATUS_LINE, "status line cleared");
        self.panel.clear_text(STATUS_LINE)
    }
}
