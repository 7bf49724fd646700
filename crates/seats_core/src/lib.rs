//! seats_core — Core types for seat apportionment.
//!
//! This crate is **I/O-free**. It defines the stable types shared by the
//! engine crates:
//!
//! - `Candidate` / `Tally`: ordered, immutable vote tallies
//! - `Configuration`: flat option map with typed, defaulting accessors
//! - `AllocationResult` / `ResultKind`: the allocation outcome shape
//! - `TieBreaker` / `TieScenario`: exact-tie resolution protocol
//! - Plugin traits (`SeatAllocationMethod`, `TallyFilter`, `ResultDecorator`)
//! - `SeatAllocationError`: the full error taxonomy
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod plugin;
pub mod result;
pub mod tally;
pub mod tie;

pub use config::Configuration;
pub use error::{PluginKind, SeatAllocationError};
pub use plugin::{ResultDecorator, SeatAllocationMethod, TallyFilter};
pub use result::{AllocationResult, ResultKind};
pub use tally::{Candidate, Tally};
pub use tie::{TieBreaker, TieScenario};
