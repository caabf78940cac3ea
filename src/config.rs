//! Runtime configuration for component construction.
//!
//! The execution mode, strict attribute handling, breakpoints, and base
//! attribute allow-list are all injected through [`Config`]. Nothing in the
//! core reads process state on its own.

use crate::attributes::AllowList;
use crate::value::Breakpoints;

/// Environment variable read by [`ExecutionMode::from_env`].
pub const ENV_VAR: &str = "PRIMER_ENV";

/// The host's execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Development and test: missing values stay missing unless asked for.
    #[default]
    Development,
    /// Production: missing property values always fall back to defaults.
    Production,
}

impl ExecutionMode {
    /// Read the mode from `PRIMER_ENV` (`production` selects [`ExecutionMode::Production`]).
    ///
    /// This is a helper for hosts; the core never calls it.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::Development,
        }
    }

    /// Parse a mode name. Anything other than `production` is development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Whether this is [`ExecutionMode::Production`].
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Configuration shared by every component instance of a host.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Execution mode, used for default-value fallback.
    pub mode: ExecutionMode,
    /// Reject disallowed HTML attributes during construction instead of dropping them.
    pub strict_attributes: bool,
    /// Supported breakpoints, smallest first.
    pub breakpoints: Breakpoints,
    /// Attribute names every component accepts.
    pub base_allow_list: AllowList,
}

impl Config {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode (builder).
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable strict attribute validation (builder).
    pub fn with_strict_attributes(mut self, strict: bool) -> Self {
        self.strict_attributes = strict;
        self
    }

    /// Set the breakpoints (builder).
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the base attribute allow-list (builder).
    pub fn with_base_allow_list(mut self, allow_list: AllowList) -> Self {
        self.base_allow_list = allow_list;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::new();
        assert_eq!(config.mode, ExecutionMode::Development);
        assert!(!config.strict_attributes);
        assert_eq!(config.breakpoints.len(), 5);
        assert!(config.base_allow_list.allows("id"));
    }

    #[test]
    fn builder_chain() {
        let config = Config::new()
            .with_mode(ExecutionMode::Production)
            .with_strict_attributes(true)
            .with_breakpoints(Breakpoints::new(["sm", "md"]))
            .with_base_allow_list(AllowList::new(["id"]));
        assert!(config.mode.is_production());
        assert!(config.strict_attributes);
        assert_eq!(config.breakpoints.len(), 2);
        assert!(!config.base_allow_list.allows("role"));
    }

    #[test]
    fn parse_mode() {
        assert_eq!(ExecutionMode::parse("production"), ExecutionMode::Production);
        assert_eq!(ExecutionMode::parse(" Production\n"), ExecutionMode::Production);
        assert_eq!(ExecutionMode::parse("test"), ExecutionMode::Development);
        assert_eq!(ExecutionMode::parse(""), ExecutionMode::Development);
    }
}
