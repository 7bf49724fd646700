//! Flat option map with typed, defaulting accessors.
//!
//! The map itself stores raw strings; defaults and parsing live in the
//! accessors, so unrelated callers can carry extra options through without
//! this crate caring. A malformed value for a recognized option surfaces as
//! [`SeatAllocationError::InvalidConfiguration`] naming the option and the
//! raw value.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SeatAllocationError;

/// Recognized option names.
pub mod keys {
    /// Non-negative integer; defaults to the candidate count.
    pub const NUMBER_OF_SEATS: &str = "numberOfSeats";
    /// Positive real; absent means "use the method's own first divisor".
    pub const FIRST_DIVISOR: &str = "firstDivisor";
    /// Strict `true`/`false`; defaults to `false`.
    pub const GROUP_SEATS_PER_CANDIDATE: &str = "groupSeatsPerCandidate";
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    options: BTreeMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// `numberOfSeats`, defaulting to `default` (the caller passes the
    /// candidate count). Must parse as a non-negative integer.
    pub fn number_of_seats(&self, default: u32) -> Result<u32, SeatAllocationError> {
        match self.get(keys::NUMBER_OF_SEATS) {
            None => Ok(default),
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|n| (0..=i64::from(u32::MAX)).contains(n))
                .map(|n| n as u32)
                .ok_or_else(|| invalid(keys::NUMBER_OF_SEATS, raw)),
        }
    }

    /// `firstDivisor` override, if any. Must be finite and strictly positive.
    pub fn first_divisor(&self) -> Result<Option<f64>, SeatAllocationError> {
        match self.get(keys::FIRST_DIVISOR) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite() && *d > 0.0)
                .map(Some)
                .ok_or_else(|| invalid(keys::FIRST_DIVISOR, raw)),
        }
    }

    /// `groupSeatsPerCandidate`, defaulting to `false`. Strict parse: only
    /// `true` and `false` are accepted.
    pub fn group_seats_per_candidate(&self) -> Result<bool, SeatAllocationError> {
        match self.get(keys::GROUP_SEATS_PER_CANDIDATE) {
            None => Ok(false),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(raw) => Err(invalid(keys::GROUP_SEATS_PER_CANDIDATE, raw)),
        }
    }
}

fn invalid(option: &str, value: &str) -> SeatAllocationError {
    SeatAllocationError::InvalidConfiguration {
        option: option.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Configuration::new();
        assert_eq!(cfg.number_of_seats(7).unwrap(), 7);
        assert_eq!(cfg.first_divisor().unwrap(), None);
        assert!(!cfg.group_seats_per_candidate().unwrap());
    }

    #[test]
    fn number_of_seats_parses_and_rejects() {
        let mut cfg = Configuration::new();
        cfg.set(keys::NUMBER_OF_SEATS, "3");
        assert_eq!(cfg.number_of_seats(7).unwrap(), 3);

        for bad in ["abc", "-1", "1.5", ""] {
            cfg.set(keys::NUMBER_OF_SEATS, bad);
            let err = cfg.number_of_seats(7).unwrap_err();
            assert_eq!(
                err,
                SeatAllocationError::InvalidConfiguration {
                    option: keys::NUMBER_OF_SEATS.into(),
                    value: bad.into(),
                }
            );
        }
    }

    #[test]
    fn first_divisor_must_be_positive_and_finite() {
        let mut cfg = Configuration::new();
        cfg.set(keys::FIRST_DIVISOR, "1.4");
        assert_eq!(cfg.first_divisor().unwrap(), Some(1.4));

        for bad in ["0", "-1", "inf", "NaN", "two"] {
            cfg.set(keys::FIRST_DIVISOR, bad);
            assert!(cfg.first_divisor().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn grouping_flag_is_strict() {
        let mut cfg = Configuration::new();
        cfg.set(keys::GROUP_SEATS_PER_CANDIDATE, "true");
        assert!(cfg.group_seats_per_candidate().unwrap());
        cfg.set(keys::GROUP_SEATS_PER_CANDIDATE, "yes");
        assert!(cfg.group_seats_per_candidate().is_err());
    }

    #[test]
    fn unrecognized_options_pass_through_untouched() {
        let mut cfg = Configuration::new();
        cfg.set("someOtherLayer.option", "whatever");
        assert_eq!(cfg.get("someOtherLayer.option"), Some("whatever"));
        assert_eq!(cfg.number_of_seats(2).unwrap(), 2);
    }
}
