//! Candidates and immutable tallies.
//!
//! A `Tally` is an ordered, indexable view over candidates and their vote
//! counts. Votes are real numbers because some electoral systems weight
//! ballots; they must be finite and non-negative. Neither type exposes any
//! mutation once constructed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SeatAllocationError;

/// One candidate (or party): opaque identity plus a vote count.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    name: String,
    votes: f64,
}

impl Candidate {
    /// Build a candidate. Votes must be finite and `>= 0`.
    pub fn new(name: impl Into<String>, votes: f64) -> Result<Self, SeatAllocationError> {
        let name = name.into();
        if !votes.is_finite() || votes < 0.0 {
            return Err(SeatAllocationError::InvalidInput(format!(
                "candidate '{name}' has invalid vote count {votes}"
            )));
        }
        Ok(Self { name, votes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn votes(&self) -> f64 {
        self.votes
    }
}

impl core::fmt::Display for Candidate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.name, self.votes)
    }
}

/// Ordered, immutable candidate list for one allocation run.
///
/// Candidate identity is the name; `index_of` resolves a candidate back to
/// its position in tally order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tally {
    candidates: Vec<Candidate>,
}

impl Tally {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate at `index` in tally order.
    ///
    /// Panics on an out-of-range index; callers index with positions they
    /// obtained from this tally, so a miss is a caller bug, not bad input.
    pub fn candidate_at(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }

    /// Position of `candidate` (by name) in tally order.
    pub fn index_of(&self, candidate: &Candidate) -> Option<usize> {
        self.candidates.iter().position(|c| c.name == candidate.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(pairs: &[(&str, f64)]) -> Tally {
        Tally::new(
            pairs
                .iter()
                .map(|(n, v)| Candidate::new(*n, *v).unwrap())
                .collect(),
        )
    }

    #[test]
    fn rejects_negative_and_non_finite_votes() {
        assert!(Candidate::new("A", -1.0).is_err());
        assert!(Candidate::new("A", f64::NAN).is_err());
        assert!(Candidate::new("A", f64::INFINITY).is_err());
        assert!(Candidate::new("A", 0.0).is_ok());
    }

    #[test]
    fn lookup_by_index_and_identity() {
        let t = tally(&[("A", 100.0), ("B", 80.0), ("C", 30.0)]);
        assert_eq!(t.num_candidates(), 3);
        assert_eq!(t.candidate_at(1).name(), "B");

        let b = Candidate::new("B", 999.0).unwrap(); // identity is the name, not the votes
        assert_eq!(t.index_of(&b), Some(1));
        let z = Candidate::new("Z", 0.0).unwrap();
        assert_eq!(t.index_of(&z), None);
    }

    #[test]
    fn order_is_preserved() {
        let t = tally(&[("C", 1.0), ("A", 2.0), ("B", 3.0)]);
        let names: Vec<&str> = t.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
