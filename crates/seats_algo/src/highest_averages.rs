//! Generic highest-averages seat allocation.
//!
//! One algorithm, parameterized by an injected [`DivisorSequence`]; the
//! concrete variants (D'Hondt, Sainte-Laguë, …) differ only in the sequence
//! they carry. Per call the method builds a quotient table (rows =
//! candidates, columns = rounds), then awards each seat to the maximum live
//! cell, consulting the tie breaker whenever a scanned cell equals the
//! running maximum *exactly* (no epsilon — exact equality is what makes a
//! tie a tie, and is intentionally fragile for non-integer inputs).
//!
//! The table is local to one `process` call and dropped on return; the
//! method holds no state across calls and is safe to share between threads.

use tracing::{debug, trace};

use seats_core::{
    AllocationResult, Configuration, ResultKind, SeatAllocationError, SeatAllocationMethod, Tally,
    TieBreaker,
};

use crate::divisors::DivisorSequence;

/// Marks a cell whose seat has been awarded; below any legal quotient.
const CONSUMED: f64 = -2.0;

/// Scratch quotient matrix, flat row-major (candidate, round) arena.
struct QuotientTable {
    cells: Vec<f64>,
    rounds: usize,
}

impl QuotientTable {
    fn new(candidates: usize, rounds: usize) -> Self {
        Self {
            cells: vec![0.0; candidates * rounds],
            rounds,
        }
    }

    fn get(&self, candidate: usize, round: usize) -> f64 {
        self.cells[candidate * self.rounds + round]
    }

    fn set(&mut self, candidate: usize, round: usize, quotient: f64) {
        self.cells[candidate * self.rounds + round] = quotient;
    }

    fn consume(&mut self, candidate: usize, round: usize) {
        self.cells[candidate * self.rounds + round] = CONSUMED;
    }
}

/// A highest-averages method: a name plus its divisor sequence.
pub struct HighestAveragesMethod {
    name: String,
    sequence: Box<dyn DivisorSequence>,
}

impl HighestAveragesMethod {
    pub fn new(name: impl Into<String>, sequence: impl DivisorSequence + 'static) -> Self {
        Self {
            name: name.into(),
            sequence: Box::new(sequence),
        }
    }

    /// D'Hondt (divisors 1, 2, 3, …).
    pub fn dhondt() -> Self {
        Self::new("dhondt", crate::divisors::DHondt)
    }

    /// Sainte-Laguë (divisors 1, 3, 5, …).
    pub fn sainte_lague() -> Self {
        Self::new("sainte-lague", crate::divisors::SainteLague)
    }

    /// Imperiali (divisors 2, 3, 4, …).
    pub fn imperiali() -> Self {
        Self::new("imperiali", crate::divisors::Imperiali)
    }
}

impl SeatAllocationMethod for HighestAveragesMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(
        &self,
        tally: &Tally,
        configuration: &Configuration,
        mut tie_breaker: Option<&mut dyn TieBreaker>,
    ) -> Result<AllocationResult, SeatAllocationError> {
        let num_candidates = tally.num_candidates();
        if num_candidates == 0 {
            return Err(SeatAllocationError::InvalidInput(
                "this tally contains no candidates".into(),
            ));
        }

        let number_of_seats = configuration.number_of_seats(num_candidates as u32)?;
        let mut first_divisor = configuration.first_divisor()?;
        let group_seats_per_candidate = configuration.group_seats_per_candidate()?;

        debug!(
            method = %self.name,
            number_of_seats,
            group_seats_per_candidate,
            "allocating seats"
        );

        let rounds = number_of_seats as usize;
        let mut table = QuotientTable::new(num_candidates, rounds);

        for round in 0..rounds {
            let divisor = match first_divisor.take() {
                // Caller supplied an alternative first divisor. The
                // sequence's own round-0 divisor is still computed and
                // discarded so later rounds stay in phase.
                Some(override_divisor) => {
                    let _ = self.sequence.divisor(round as u32);
                    override_divisor
                }
                None => self.sequence.divisor(round as u32),
            };

            let mut row = String::new();
            for candidate in 0..num_candidates {
                let quotient = tally.candidate_at(candidate).votes() / divisor;
                table.set(candidate, round, quotient);
                row.push_str(&format!("{quotient:.2},\t"));
            }
            debug!("{round} / {divisor} : {row}");
        }

        let mut seats_per_candidate = vec![0usize; num_candidates];
        let mut result = AllocationResult::new(ResultKind::Multiple);
        let mut unallocated_seats = rounds;

        // Award one seat per pass: scan every live cell for the maximum.
        while unallocated_seats > 0 {
            let mut max_candidate = 0usize;
            let mut max_round = 0usize;
            // Below any live quotient (>= 0) and distinct from CONSUMED, so
            // the equality branch can only fire after a live cell was seen.
            let mut max_votes = -1.0f64;

            for round in 0..rounds {
                for candidate in 0..num_candidates {
                    let quotient = table.get(candidate, round);

                    if quotient == max_votes {
                        let previous_best = tally.candidate_at(max_candidate);
                        let newcomer = tally.candidate_at(candidate);
                        debug!(
                            "tie between {previous_best} and {newcomer} at quotient {quotient}"
                        );

                        let Some(breaker) = tie_breaker.as_deref_mut() else {
                            return Ok(tie_result(tally, max_candidate, candidate));
                        };
                        debug!("using tie breaker: {}", breaker.name());

                        // Consultation order follows the scan: previous
                        // best first, newly-scanned second.
                        let scenario = breaker.break_tie(previous_best, newcomer);
                        let Some(winner) = scenario.winner() else {
                            return Ok(tie_result(tally, max_candidate, candidate));
                        };

                        max_candidate = tally.index_of(winner).ok_or_else(|| {
                            SeatAllocationError::InvalidInput(format!(
                                "tie breaker '{}' returned unknown candidate '{}'",
                                breaker.name(),
                                winner.name()
                            ))
                        })?;
                        // Compatibility with established outputs: the
                        // running maximum value is not refreshed after a
                        // resolved tie, and the round coordinate only moves
                        // when the newly-scanned candidate won.
                        if max_candidate == candidate {
                            max_round = round;
                        }
                    } else if quotient > max_votes {
                        max_candidate = candidate;
                        max_round = round;
                        max_votes = quotient;
                    }
                }
            }

            seats_per_candidate[max_candidate] += 1;
            if !group_seats_per_candidate {
                result.add_seat(tally.candidate_at(max_candidate).clone());
            }

            debug!(
                "found maximum {max_votes} at {} : {max_round}",
                tally.candidate_at(max_candidate).name()
            );

            table.consume(max_candidate, max_round);
            unallocated_seats -= 1;
        }

        for candidate in 0..num_candidates {
            trace!(
                "{} has ended with {} seats",
                tally.candidate_at(candidate),
                seats_per_candidate[candidate]
            );
        }

        if group_seats_per_candidate {
            trace!("grouping seats per candidate");
            for candidate in 0..num_candidates {
                for _ in 0..seats_per_candidate[candidate] {
                    result.add_seat(tally.candidate_at(candidate).clone());
                }
            }
        }

        Ok(result)
    }
}

/// Unresolved tie: exactly the two tied candidates, scan-encounter order.
fn tie_result(tally: &Tally, previous_best: usize, newcomer: usize) -> AllocationResult {
    let mut result = AllocationResult::new(ResultKind::Tie);
    result.add_seat(tally.candidate_at(previous_best).clone());
    result.add_seat(tally.candidate_at(newcomer).clone());
    result
}
