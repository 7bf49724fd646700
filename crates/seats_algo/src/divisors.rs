//! Divisor sequences — the sole axis of variation between highest-averages
//! variants.
//!
//! A sequence maps a 0-based round to a divisor. Divisors must be positive
//! and non-decreasing in the round; the greedy seat-by-seat selection is
//! only valid under that condition.

/// Per-round divisor rule. Pure: the same round always yields the same
/// divisor.
pub trait DivisorSequence: Send + Sync {
    fn divisor(&self, round: u32) -> f64;
}

/// Any `Fn(u32) -> f64` is a divisor sequence.
impl<F> DivisorSequence for F
where
    F: Fn(u32) -> f64 + Send + Sync,
{
    fn divisor(&self, round: u32) -> f64 {
        self(round)
    }
}

/// D'Hondt: 1, 2, 3, …
#[derive(Clone, Copy, Debug, Default)]
pub struct DHondt;

impl DivisorSequence for DHondt {
    fn divisor(&self, round: u32) -> f64 {
        f64::from(round) + 1.0
    }
}

/// Sainte-Laguë: 1, 3, 5, …
#[derive(Clone, Copy, Debug, Default)]
pub struct SainteLague;

impl DivisorSequence for SainteLague {
    fn divisor(&self, round: u32) -> f64 {
        2.0 * f64::from(round) + 1.0
    }
}

/// Imperiali: 2, 3, 4, …
#[derive(Clone, Copy, Debug, Default)]
pub struct Imperiali;

impl DivisorSequence for Imperiali {
    fn divisor(&self, round: u32) -> f64 {
        f64::from(round) + 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_prefixes() {
        let first = |s: &dyn DivisorSequence| -> Vec<f64> {
            (0..4).map(|r| s.divisor(r)).collect()
        };
        assert_eq!(first(&DHondt), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(first(&SainteLague), [1.0, 3.0, 5.0, 7.0]);
        assert_eq!(first(&Imperiali), [2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn closures_are_sequences() {
        let webster = |round: u32| f64::from(round) + 0.5;
        assert_eq!(webster.divisor(0), 0.5);
        assert_eq!(webster.divisor(1), 1.5);
    }

    proptest! {
        // Greedy selection requires positive, non-decreasing divisors.
        #[test]
        fn builtins_are_positive_and_non_decreasing(round in 0u32..10_000) {
            for seq in [&DHondt as &dyn DivisorSequence, &SainteLague, &Imperiali] {
                let here = seq.divisor(round);
                let next = seq.divisor(round + 1);
                prop_assert!(here > 0.0);
                prop_assert!(next >= here);
            }
        }
    }
}
