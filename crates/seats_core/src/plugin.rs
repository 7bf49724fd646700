//! Plugin seams handed out by the resolver.
//!
//! Implementations are registered by an external bootstrap step; the core
//! only defines the contracts. All three are object-safe so registries can
//! hold boxed trait objects.

use crate::config::Configuration;
use crate::error::SeatAllocationError;
use crate::result::AllocationResult;
use crate::tally::Tally;
use crate::tie::TieBreaker;

/// A seat allocation method: tally + configuration in, result out.
///
/// `process` is purely computational and holds no state across calls, so a
/// shared instance may serve concurrent allocations as long as each call
/// supplies its own tie breaker.
pub trait SeatAllocationMethod {
    fn name(&self) -> &str;

    fn process(
        &self,
        tally: &Tally,
        configuration: &Configuration,
        tie_breaker: Option<&mut dyn TieBreaker>,
    ) -> Result<AllocationResult, SeatAllocationError>;
}

impl core::fmt::Debug for dyn SeatAllocationMethod + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SeatAllocationMethod")
            .field("name", &self.name())
            .finish()
    }
}

/// Transforms a tally before allocation (e.g. thresholds, eliminations).
pub trait TallyFilter {
    fn name(&self) -> &str;

    fn filter(&self, tally: Tally) -> Tally;
}

impl core::fmt::Debug for dyn TallyFilter + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TallyFilter")
            .field("name", &self.name())
            .finish()
    }
}

/// Reshapes a result after allocation (presentation concerns only).
pub trait ResultDecorator {
    fn name(&self) -> &str;

    fn decorate(&self, result: AllocationResult) -> AllocationResult;
}

impl core::fmt::Debug for dyn ResultDecorator + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResultDecorator")
            .field("name", &self.name())
            .finish()
    }
}
