//! Error taxonomy for the allocation engine.
//!
//! Everything here is a deterministic input-validation failure raised
//! synchronously to the caller; nothing is retried. An unresolved tie is
//! *not* an error (see [`crate::result::ResultKind::Tie`]).

use core::fmt;

use thiserror::Error;

/// Which registry a plugin lookup was aimed at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PluginKind {
    Method,
    TallyFilter,
    ResultDecorator,
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PluginKind::Method => "method",
            PluginKind::TallyFilter => "tally filter",
            PluginKind::ResultDecorator => "result decorator",
        };
        f.write_str(s)
    }
}

/// Typed failures of the allocation engine.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SeatAllocationError {
    /// A structurally unusable input (e.g. a tally with no candidates).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A recognized configuration option whose raw value cannot be used.
    /// Always identifies the option name and the offending raw value.
    #[error("configuration option {option} has invalid value '{value}'")]
    InvalidConfiguration { option: String, value: String },

    /// A registry lookup for a key no plugin was registered under.
    #[error("no {kind} registered under key '{key}'")]
    UnresolvablePlugin { kind: PluginKind, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_names_option_and_value() {
        let err = SeatAllocationError::InvalidConfiguration {
            option: "numberOfSeats".into(),
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("numberOfSeats"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn unresolvable_plugin_names_kind_and_key() {
        let err = SeatAllocationError::UnresolvablePlugin {
            kind: PluginKind::Method,
            key: "webster".into(),
        };
        assert_eq!(err.to_string(), "no method registered under key 'webster'");
    }
}
