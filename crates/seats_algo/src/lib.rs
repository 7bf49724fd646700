//! seats_algo — highest-averages seat allocation and plugin resolution.
//!
//! Built on `seats_core` only. Callers pick a method through [`Resolver`]
//! (or construct one directly), then run
//! `process(tally, configuration, tie_breaker)`:
//!
//! ```
//! use seats_algo::Resolver;
//! use seats_core::{Candidate, Configuration, SeatAllocationMethod, Tally};
//! use seats_core::config::keys;
//!
//! # fn main() -> Result<(), seats_core::SeatAllocationError> {
//! let resolver = Resolver::with_builtin_methods();
//! let method = resolver.resolve_method("dhondt")?;
//!
//! let tally = Tally::new(vec![
//!     Candidate::new("A", 100.0)?,
//!     Candidate::new("B", 80.0)?,
//!     Candidate::new("C", 30.0)?,
//! ]);
//! let mut cfg = Configuration::new();
//! cfg.set(keys::NUMBER_OF_SEATS, "3");
//!
//! let result = method.process(&tally, &cfg, None)?;
//! assert_eq!(result.seat_count_for("A"), 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod divisors;
pub mod highest_averages;
pub mod resolver;

pub use divisors::{DHondt, DivisorSequence, Imperiali, SainteLague};
pub use highest_averages::HighestAveragesMethod;
pub use resolver::Resolver;
