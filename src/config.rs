//! Run configuration for lsr.
//!
//! Holds the two switches parsed from the command line. The struct is built
//! once by [crate::utils::cli::handle_args] and then passed by reference into
//! the listing code; nothing mutates it afterwards.

/// Immutable per-invocation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Include entries whose name starts with `.`, plus the `.`/`..`
    /// pseudo-entries.
    pub show_hidden: bool,
    /// Emit the detailed long-format listing instead of bare names.
    pub long_format: bool,
}
