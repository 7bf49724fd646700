//! Allocation outcomes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tally::Candidate;

/// Classification of an allocation outcome.
///
/// Highest-averages methods produce `Multiple` for every fully resolved
/// allocation, even for a single seat; `Single` is reserved for method
/// families that elect exactly one winner by construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResultKind {
    Single,
    Multiple,
    /// An exact quotient tie no tie breaker resolved. The seat sequence
    /// holds exactly the two tied candidates; nothing was allocated.
    Tie,
}

/// Ordered seat assignments plus their classification.
///
/// `add_seat` is the only mutation and is used while the result is being
/// built; once returned to the caller the value is treated as immutable.
/// A candidate appears once per seat won, so duplicates are expected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResult {
    kind: ResultKind,
    seats: Vec<Candidate>,
}

impl AllocationResult {
    pub fn new(kind: ResultKind) -> Self {
        Self {
            kind,
            seats: Vec::new(),
        }
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn add_seat(&mut self, candidate: Candidate) {
        self.seats.push(candidate);
    }

    /// Seat assignments in award order (or tally order when the method was
    /// asked to group seats per candidate).
    pub fn seats(&self) -> &[Candidate] {
        &self.seats
    }

    pub fn num_seats(&self) -> usize {
        self.seats.len()
    }

    /// Seats won by the named candidate.
    pub fn seat_count_for(&self, name: &str) -> usize {
        self.seats.iter().filter(|c| c.name() == name).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicate_seats() {
        let mut r = AllocationResult::new(ResultKind::Multiple);
        r.add_seat(Candidate::new("A", 100.0).unwrap());
        r.add_seat(Candidate::new("B", 80.0).unwrap());
        r.add_seat(Candidate::new("A", 100.0).unwrap());
        assert_eq!(r.num_seats(), 3);
        assert_eq!(r.seat_count_for("A"), 2);
        assert_eq!(r.seat_count_for("B"), 1);
        assert_eq!(r.seat_count_for("C"), 0);
    }
}
