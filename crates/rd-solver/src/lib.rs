//! rd-solver: voltage-divider candidate evaluation.
//!
//! Takes the series tables from `rd-series` and turns them into printable
//! divider candidates: fitting a resistor pair into a total-resistance
//! window with display units, computing nominal and worst-case ratio error
//! under component tolerances, and driving the per-series sweep that emits
//! one candidate record per feasible pair.

pub mod error;
pub mod evaluate;
pub mod scale;
pub mod sweep;

// Re-exports
pub use error::{SolverError, SolverResult};
pub use evaluate::{ErrorTriplet, RatioMode, Severity, evaluate};
pub use scale::{FitOutcome, Leg, ScaledLeg, ScaledPair, fit};
pub use sweep::{
    Candidate, Direction, HeldVoltage, MAX_TOTAL_RESISTANCE, SweepContext, sweep,
};
