//! Exact-tie resolution protocol.
//!
//! When the allocation scan finds two cells with exactly equal quotients it
//! consults a [`TieBreaker`], handing over the two candidates in encounter
//! order (previously-best first, newly-scanned second). The breaker answers
//! with a [`TieScenario`]: either an ordered preference or "still tied".
//!
//! Implementations must be symmetric: if `break_tie(a, b)` reports tied,
//! `break_tie(b, a)` must too.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::tally::Candidate;

/// Outcome of one pairwise tie consultation. Borrows the candidates from
/// the tally; owns nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TieScenario<'t> {
    /// No decision possible.
    Tied,
    /// Ordered preference, preferred candidate first.
    Resolved {
        preferred: &'t Candidate,
        other: &'t Candidate,
    },
}

impl<'t> TieScenario<'t> {
    pub fn resolved(preferred: &'t Candidate, other: &'t Candidate) -> Self {
        TieScenario::Resolved { preferred, other }
    }

    pub fn is_tied(&self) -> bool {
        matches!(self, TieScenario::Tied)
    }

    /// The preferred candidate, if the tie was resolved.
    pub fn winner(&self) -> Option<&'t Candidate> {
        match *self {
            TieScenario::Tied => None,
            TieScenario::Resolved { preferred, .. } => Some(preferred),
        }
    }
}

/// Resolves an exact quotient tie between two candidates.
///
/// The receiver is mutable so stateful breakers (seeded RNG, rotation
/// schemes) fit the trait; stateless breakers just ignore it.
pub trait TieBreaker {
    fn name(&self) -> &str;

    fn break_tie<'t>(&mut self, a: &'t Candidate, b: &'t Candidate) -> TieScenario<'t>;
}

/// Prefers the candidate with strictly more raw votes; equal votes stay
/// tied. Symmetric by construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoreVotesTieBreaker;

impl TieBreaker for MoreVotesTieBreaker {
    fn name(&self) -> &str {
        "more-votes"
    }

    fn break_tie<'t>(&mut self, a: &'t Candidate, b: &'t Candidate) -> TieScenario<'t> {
        if a.votes() > b.votes() {
            TieScenario::resolved(a, b)
        } else if b.votes() > a.votes() {
            TieScenario::resolved(b, a)
        } else {
            TieScenario::Tied
        }
    }
}

/// Seeded coin flip (ChaCha20, no OS entropy). Never reports tied, and is
/// fully reproducible for a fixed seed.
pub struct RandomTieBreaker {
    rng: ChaCha20Rng,
}

impl RandomTieBreaker {
    pub fn from_seed(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(bytes),
        }
    }
}

impl TieBreaker for RandomTieBreaker {
    fn name(&self) -> &str {
        "random"
    }

    fn break_tie<'t>(&mut self, a: &'t Candidate, b: &'t Candidate) -> TieScenario<'t> {
        // One draw per consultation; the low bit of a ChaCha20 word is unbiased.
        if self.rng.next_u64() & 1 == 0 {
            TieScenario::resolved(a, b)
        } else {
            TieScenario::resolved(b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(name: &str, votes: f64) -> Candidate {
        Candidate::new(name, votes).unwrap()
    }

    #[test]
    fn more_votes_prefers_the_larger_tally_line() {
        let a = cand("A", 120.0);
        let b = cand("B", 80.0);
        let mut tb = MoreVotesTieBreaker;
        assert_eq!(tb.break_tie(&a, &b).winner().map(Candidate::name), Some("A"));
        assert_eq!(tb.break_tie(&b, &a).winner().map(Candidate::name), Some("A"));
    }

    #[test]
    fn more_votes_is_symmetric_on_equal_votes() {
        let a = cand("A", 50.0);
        let b = cand("B", 50.0);
        let mut tb = MoreVotesTieBreaker;
        assert!(tb.break_tie(&a, &b).is_tied());
        assert!(tb.break_tie(&b, &a).is_tied());
    }

    #[test]
    fn random_is_deterministic_per_seed_and_never_tied() {
        let a = cand("A", 10.0);
        let b = cand("B", 10.0);

        let outcomes: Vec<Option<String>> = (0..16)
            .map(|_| {
                RandomTieBreaker::from_seed(42)
                    .break_tie(&a, &b)
                    .winner()
                    .map(|c| c.name().to_string())
            })
            .collect();
        assert!(outcomes.iter().all(|o| o.is_some()));
        assert!(outcomes.windows(2).all(|w| w[0] == w[1]));

        // A stream from one breaker eventually picks both sides.
        let mut tb = RandomTieBreaker::from_seed(7);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..64 {
            if let Some(w) = tb.break_tie(&a, &b).winner() {
                seen.insert(w.name().to_string());
            }
        }
        assert_eq!(seen.len(), 2);
    }
}
