#![forbid(unsafe_code)]

//! Protocol length limits.
//!
//! Clients cap the objective title and the per-team text at a length that
//! depends on the protocol version: 32 chars before 1.13, 128 from 1.13 on.
//! Per-line text is shown through a prefix and a suffix field, each getting
//! half of the team text limit.
//!
//! # Environment Variables
//!
//! | Variable                | Effect                                         |
//! |-------------------------|------------------------------------------------|
//! | `SCORELINE_VERSION`     | Server version (`1.13.2` or `v1_13_R1`) picking the tier |
//! | `SCORELINE_TITLE_LIMIT` | Override the title limit                       |
//! | `SCORELINE_TEXT_LIMIT`  | Override the team text limit                   |

use std::env;
use std::fmt;

use crate::logging::{debug, warn};

/// Length limits of the connected client's protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolLimits {
    title_length: usize,
    text_length: usize,
}

impl ProtocolLimits {
    /// Limits for clients before 1.13.
    pub const LEGACY: Self = Self {
        title_length: 32,
        text_length: 32,
    };

    /// Limits for 1.13 and later.
    pub const MODERN: Self = Self {
        title_length: 128,
        text_length: 128,
    };

    /// Create limits from explicit lengths.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::Zero`] if either length is zero, or if the text
    /// length is too small to give each field at least one char.
    pub const fn new(title_length: usize, text_length: usize) -> Result<Self, LimitsError> {
        if title_length == 0 {
            return Err(LimitsError::Zero { field: "title" });
        }
        if text_length < 2 {
            return Err(LimitsError::Zero { field: "text" });
        }
        Ok(Self {
            title_length,
            text_length,
        })
    }

    /// Pick the tier for a server version.
    #[must_use]
    pub const fn for_version(version: ServerVersion) -> Self {
        if version.at_least(1, 13) {
            Self::MODERN
        } else {
            Self::LEGACY
        }
    }

    /// Pick the tier for a version tag, see [`ServerVersion::parse`].
    #[must_use]
    pub fn for_version_tag(tag: &str) -> Option<Self> {
        ServerVersion::parse(tag).map(Self::for_version)
    }

    /// Resolve limits from the environment, starting from [`Self::LEGACY`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_inputs(&EnvInputs::from_env())
    }

    fn from_inputs(env: &EnvInputs) -> Self {
        let mut limits = Self::LEGACY;

        if let Some(tag) = env.version.as_deref() {
            match Self::for_version_tag(tag) {
                Some(tier) => limits = tier,
                None => warn!(tag, "ignoring unparsable SCORELINE_VERSION"),
            }
        }
        if let Some(title) = env.title_limit.as_deref() {
            match title.trim().parse::<usize>() {
                Ok(n) if n > 0 => limits.title_length = n,
                _ => warn!(value = title, "ignoring invalid SCORELINE_TITLE_LIMIT"),
            }
        }
        if let Some(text) = env.text_limit.as_deref() {
            match text.trim().parse::<usize>() {
                Ok(n) if n >= 2 => limits.text_length = n,
                _ => warn!(value = text, "ignoring invalid SCORELINE_TEXT_LIMIT"),
            }
        }

        debug!(
            title_length = limits.title_length,
            text_length = limits.text_length,
            "resolved protocol limits"
        );
        limits
    }

    /// Maximum title length.
    #[inline]
    #[must_use]
    pub const fn title_length(&self) -> usize {
        self.title_length
    }

    /// Maximum per-team text length (prefix and suffix together).
    #[inline]
    #[must_use]
    pub const fn text_length(&self) -> usize {
        self.text_length
    }

    /// Maximum length of one prefix or suffix field.
    #[inline]
    #[must_use]
    pub const fn field_length(&self) -> usize {
        self.text_length / 2
    }
}

impl Default for ProtocolLimits {
    fn default() -> Self {
        Self::LEGACY
    }
}

/// Invalid protocol limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitsError {
    /// A limit too small to hold any text.
    Zero { field: &'static str },
}

impl fmt::Display for LimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero { field } => write!(f, "{field} length limit is too small"),
        }
    }
}

impl std::error::Error for LimitsError {}

/// A server version, as used to choose [`ProtocolLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch, or the `R` revision of a package tag.
    pub revision: u32,
}

impl ServerVersion {
    /// Create a version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Parse a dotted version (`1.13.2`) or a package tag (`v1_13_R1`).
    ///
    /// The third component is optional.
    ///
    /// ```
    /// use scoreline_core::ServerVersion;
    ///
    /// assert_eq!(ServerVersion::parse("v1_8_R3"), Some(ServerVersion::new(1, 8, 3)));
    /// assert_eq!(ServerVersion::parse("1.20"), Some(ServerVersion::new(1, 20, 0)));
    /// assert_eq!(ServerVersion::parse("craftbukkit"), None);
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let tag = tag.strip_prefix(['v', 'V']).unwrap_or(tag);
        let mut parts = tag.split(['.', '_']);

        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let revision = match parts.next() {
            Some(part) => {
                let part = part.strip_prefix(['R', 'r']).unwrap_or(part);
                part.parse().ok()?
            }
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, revision))
    }

    /// Whether this version is `major.minor` or later.
    #[must_use]
    pub const fn at_least(&self, major: u32, minor: u32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// Raw environment values, read once.
#[derive(Debug, Clone, Default)]
struct EnvInputs {
    version: Option<String>,
    title_limit: Option<String>,
    text_limit: Option<String>,
}

impl EnvInputs {
    fn from_env() -> Self {
        Self {
            version: env::var("SCORELINE_VERSION").ok(),
            title_limit: env::var("SCORELINE_TITLE_LIMIT").ok(),
            text_limit: env::var("SCORELINE_TEXT_LIMIT").ok(),
        }
    }
}
