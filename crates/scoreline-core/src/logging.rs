#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the crate logs through the `tracing` macros.
//! Without it the same macro names expand to `()`, so call sites need no
//! `cfg` attributes.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    macro_rules! noop_debug {
        ($($arg:tt)*) => {
            ()
        };
    }

    /// No-op trace macro when tracing is disabled.
    macro_rules! noop_trace {
        ($($arg:tt)*) => {
            ()
        };
    }

    /// No-op warn macro when tracing is disabled.
    macro_rules! noop_warn {
        ($($arg:tt)*) => {
            ()
        };
    }

    pub(crate) use noop_debug as debug;
    pub(crate) use noop_trace as trace;
    pub(crate) use noop_warn as warn;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop_macros::{debug, trace, warn};
