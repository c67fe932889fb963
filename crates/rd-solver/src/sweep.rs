//! Per-series candidate sweep.

use rd_core::{Real, ensure_positive};
use rd_series::Series;
use serde::Serialize;
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::evaluate::{ErrorTriplet, RatioMode, Severity, evaluate};
use crate::scale::{FitOutcome, Leg, ScaledLeg, fit};

/// Upper bound on the total-resistance window.
pub const MAX_TOTAL_RESISTANCE: u32 = 1_000_000_000;

/// Which of the two entered voltages stays fixed while the other is
/// realized by the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeldVoltage {
    Vcc,
    Vout,
}

/// Whether to evaluate the bracket candidate below, above, or on both sides
/// of each ideal leg value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Lower,
    Higher,
    Both,
}

impl Direction {
    pub fn wants_lower(self) -> bool {
        matches!(self, Direction::Lower | Direction::Both)
    }

    pub fn wants_higher(self) -> bool {
        matches!(self, Direction::Higher | Direction::Both)
    }
}

/// Immutable inputs for one sweep, validated at construction.
#[derive(Debug, Clone, Copy)]
pub struct SweepContext {
    pub series: Series,
    pub vcc: Real,
    pub vout: Real,
    pub held: HeldVoltage,
    pub direction: Direction,
    pub min_total: u32,
    pub max_total: u32,
}

impl SweepContext {
    pub fn new(
        series: Series,
        vcc: Real,
        vout: Real,
        held: HeldVoltage,
        direction: Direction,
        min_total: u32,
        max_total: u32,
    ) -> SolverResult<Self> {
        ensure_positive(vcc, "vcc")?;
        ensure_positive(vout, "vout")?;
        if vout >= vcc {
            return Err(SolverError::InvalidInput {
                what: "vout must be smaller than vcc",
            });
        }
        if min_total < 1 {
            return Err(SolverError::InvalidInput {
                what: "minimum total resistance must be at least 1 ohm",
            });
        }
        if min_total > max_total {
            return Err(SolverError::InvalidInput {
                what: "minimum total resistance exceeds the maximum",
            });
        }
        if max_total > MAX_TOTAL_RESISTANCE {
            return Err(SolverError::InvalidInput {
                what: "maximum total resistance exceeds 1,000,000,000 ohms",
            });
        }
        Ok(Self {
            series,
            vcc,
            vout,
            held,
            direction,
            min_total,
            max_total,
        })
    }

    pub fn ratio_mode(&self) -> RatioMode {
        match self.held {
            HeldVoltage::Vout => RatioMode::VoutHeld,
            HeldVoltage::Vcc => RatioMode::VccHeld,
        }
    }

    /// The target divider ratio in the form matching `ratio_mode`.
    pub fn target_ratio(&self) -> Real {
        match self.held {
            HeldVoltage::Vout => self.vcc / self.vout,
            HeldVoltage::Vcc => self.vout / self.vcc,
        }
    }

    /// Entered value of the computed voltage; deviations are quoted against
    /// it.
    pub fn reference_voltage(&self) -> Real {
        match self.held {
            HeldVoltage::Vout => self.vcc,
            HeldVoltage::Vcc => self.vout,
        }
    }
}

/// One feasible divider pair, ready for rendering.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Candidate {
    pub leg1: ScaledLeg,
    pub leg2: ScaledLeg,
    pub total_ohms: Real,
    pub error: ErrorTriplet,
    pub severity: Severity,
}

/// Walk the series, one table entry per fixed leg, and collect every
/// feasible candidate pair.
///
/// With Vout held the fixed leg is R2 and the ideal R1 is `r2 * (ratio - 1)`;
/// with Vcc held the fixed leg is R1 and the ideal R2 is
/// `r1 * ratio / (1 - ratio)`. Candidates whose ideal leg cannot be
/// bracketed, or which no exponent pair fits into the resistance window,
/// are skipped; the sweep itself never fails.
pub fn sweep(ctx: &SweepContext) -> Vec<Candidate> {
    let table = ctx.series.table();
    let ratio = ctx.target_ratio();
    let mode = ctx.ratio_mode();
    let reference = ctx.reference_voltage();

    let mut out = Vec::new();

    for fixed in table.values() {
        let fixed_leg = Leg::new(fixed, 0);
        let ideal = match ctx.held {
            HeldVoltage::Vout => Real::from(fixed) * (ratio - 1.0),
            HeldVoltage::Vcc => Real::from(fixed) * ratio / (1.0 - ratio),
        };

        let bracket = match table.find(ideal) {
            Ok(bracket) => bracket,
            Err(err) => {
                debug!(fixed, %err, "skipping entry with invalid ideal leg");
                continue;
            }
        };

        let mut push = |mantissa: u16, correction: i32| {
            let found_leg = Leg::new(mantissa, correction);
            let (leg1, leg2) = match ctx.held {
                HeldVoltage::Vout => (found_leg, fixed_leg),
                HeldVoltage::Vcc => (fixed_leg, found_leg),
            };
            match fit(leg1, leg2, ctx.min_total, ctx.max_total, &table) {
                FitOutcome::Fitted(pair) => {
                    let error = evaluate(leg1, leg2, ratio, mode, &table, reference);
                    out.push(Candidate {
                        leg1: pair.leg1,
                        leg2: pair.leg2,
                        total_ohms: pair.total_ohms,
                        error,
                        severity: Severity::classify(error.nominal_pct),
                    });
                }
                FitOutcome::Infeasible => {
                    debug!(
                        fixed,
                        mantissa, correction, "no exponent pair fits the resistance window"
                    );
                }
            }
        };

        let emitted_low = ctx.direction.wants_lower();
        if emitted_low {
            push(bracket.low, bracket.low_correction);
        }
        // An exact bracket collapses to one value; do not emit it twice.
        if ctx.direction.wants_higher() && !(emitted_low && bracket.is_exact()) {
            push(bracket.high, bracket.high_correction);
        }
    }

    out
}
