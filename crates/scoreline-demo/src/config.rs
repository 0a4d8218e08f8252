#![forbid(unsafe_code)]

//! Panel layout file.
//!
//! ```json
//! {
//!   "titles": ["&6&lARENA", "&e&lARENA"],
//!   "wait_ticks": 10,
//!   "slot": "sidebar",
//!   "order": "top_down",
//!   "lines": [{ "line": 1, "text": "&7Map: &fCanyon" }]
//! }
//! ```
//!
//! Text may use `&` in place of the escape introducer.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use scoreline::{
    ALT_INTRODUCER, DisplaySlot, LineOrder, MemoryBoard, Panel, PanelConfig, ProtocolLimits,
    ScoreboardTitle, translate_alternate,
};
use serde::Deserialize;

/// One preset line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineConfig {
    /// Line number, 1 to 15.
    pub line: usize,
    /// Raw text, `&` codes allowed.
    pub text: String,
}

/// Ordering of lines on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderConfig {
    /// Highest line number on top.
    #[default]
    ScoreIsLine,
    /// Line 1 on top.
    TopDown,
}

impl From<OrderConfig> for LineOrder {
    fn from(order: OrderConfig) -> Self {
        match order {
            OrderConfig::ScoreIsLine => Self::ScoreIsLine,
            OrderConfig::TopDown => Self::TopDown,
        }
    }
}

/// Demo panel layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Titles in rotation order.
    pub titles: Vec<String>,
    /// Ticks between title rotations.
    pub wait_ticks: u64,
    /// Display slot name.
    pub slot: String,
    /// Line ordering.
    pub order: OrderConfig,
    /// Preset lines.
    pub lines: Vec<LineConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            titles: vec![
                "&6&lSCORELINE".into(),
                "&e&lSCORELINE".into(),
                "&f&lSCORELINE".into(),
            ],
            wait_ticks: 10,
            slot: "sidebar".into(),
            order: OrderConfig::TopDown,
            lines: vec![
                LineConfig {
                    line: 1,
                    text: "&7Mode: &bCapture the Flag".into(),
                },
                LineConfig {
                    line: 3,
                    text: "&cRed &7captures: &f2".into(),
                },
                LineConfig {
                    line: 4,
                    text: "&9Blue &7captures: &f1".into(),
                },
                LineConfig {
                    line: 6,
                    text: "&aA long line that spills into the suffix field".into(),
                },
                LineConfig {
                    line: 15,
                    text: "&eplay.example.net".into(),
                },
            ],
        }
    }
}

/// Failure to load or apply a [`DemoConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not a valid layout.
    Parse(serde_json::Error),
    /// Unknown display slot name.
    Slot(String),
    /// The layout was rejected by the panel.
    Panel(scoreline::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Slot(name) => write!(f, "unknown display slot {name:?}"),
            Self::Panel(err) => write!(f, "cannot build panel: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Slot(_) => None,
            Self::Panel(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<scoreline::Error> for ConfigError {
    fn from(err: scoreline::Error) -> Self {
        Self::Panel(err)
    }
}

impl DemoConfig {
    /// Read a layout from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Parse a layout from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolved display slot.
    pub fn display_slot(&self) -> Result<DisplaySlot, ConfigError> {
        DisplaySlot::from_name(&self.slot).ok_or_else(|| ConfigError::Slot(self.slot.clone()))
    }

    /// Build a panel on a fresh in-memory board and fill the preset lines.
    pub fn build_panel(&self, limits: ProtocolLimits) -> Result<Panel<MemoryBoard>, ConfigError> {
        let titles = self
            .titles
            .iter()
            .map(|t| translate_alternate(ALT_INTRODUCER, t));
        let title = ScoreboardTitle::new(titles, self.wait_ticks, limits)
            .map_err(scoreline::Error::from)?;
        let config = PanelConfig::new()
            .with_slot(self.display_slot()?)
            .with_limits(limits)
            .with_order(self.order.into());

        let panel = Panel::new(Arc::new(MemoryBoard::new()), title, config)
            .map_err(scoreline::Error::from)?;
        for line in &self.lines {
            panel
                .set_text(line.line, &translate_alternate(ALT_INTRODUCER, &line.text))
                .map_err(scoreline::Error::from)?;
        }
        Ok(panel)
    }
}
