//! Joint exponent fitting of a resistor pair into a total-resistance window.

use rd_core::{Real, pow10};
use rd_series::SeriesTable;
use serde::Serialize;

/// Magnitude-unit letters for exponent groups 0..=3.
const UNITS: [char; 4] = [' ', 'K', 'M', 'G'];

/// One divider leg as found by the bracket search: a table mantissa plus a
/// signed decade correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub mantissa: u16,
    pub correction: i32,
}

impl Leg {
    pub fn new(mantissa: u16, correction: i32) -> Self {
        Self {
            mantissa,
            correction,
        }
    }

    /// Real-valued resistance in ohms.
    pub fn value(&self) -> Real {
        Real::from(self.mantissa) * pow10(self.correction)
    }
}

/// A leg rescaled for display: residual correction after unit extraction,
/// the unit letter, and the fractional digits its series resolution earns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledLeg {
    pub mantissa: u16,
    pub correction: i32,
    pub unit: char,
    pub precision: usize,
}

impl ScaledLeg {
    /// The number printed in front of the unit letter (e.g. 4.7 for 4.7K).
    pub fn display_value(&self) -> Real {
        Real::from(self.mantissa) * pow10(self.correction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledPair {
    pub leg1: ScaledLeg,
    pub leg2: ScaledLeg,
    /// Total series resistance of the pair in ohms.
    pub total_ohms: Real,
}

/// Outcome of a fit attempt. Infeasibility is frequent and expected; the
/// sweep skips the candidate and moves on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    Fitted(ScaledPair),
    Infeasible,
}

/// Adjust both legs' decade exponents in lock-step so their summed
/// resistance lands inside `[min_total, max_total]`, then derive per-leg
/// display units and precision.
///
/// Steps:
/// 1. shift both corrections so the smaller becomes exactly 0 (raw
///    mantissas are hundreds of ohms, so this is the smallest canonical
///    representation at or above 100 ohms per leg);
/// 2. raise both while the sum is below `min_total`;
/// 3. lower both while the sum exceeds `max_total`, but never below the
///    per-leg alignment floor `-2 + (|c1 - c2| % 3)`, which keeps the two
///    legs' unit letters derivable from a shared exponent group;
/// 4. if the sum never landed inside the window, the pair is infeasible.
///
/// Caller contract: `1 <= min_total <= max_total <= 1_000_000_000`. The
/// upper bound caps any feasible correction at 7, which keeps the unit
/// index inside `UNITS`.
pub fn fit(leg1: Leg, leg2: Leg, min_total: u32, max_total: u32, table: &SeriesTable) -> FitOutcome {
    let r1 = Real::from(leg1.mantissa);
    let r2 = Real::from(leg2.mantissa);

    let shift = -leg1.correction.min(leg2.correction);
    let mut c1 = leg1.correction + shift;
    let mut c2 = leg2.correction + shift;

    let sum = |c1: i32, c2: i32| r1 * pow10(c1) + r2 * pow10(c2);
    let min = Real::from(min_total);
    let max = Real::from(max_total);

    let mut total = sum(c1, c2);
    while total < min {
        c1 += 1;
        c2 += 1;
        total = sum(c1, c2);
    }

    // The difference is invariant under lock-step moves.
    let floor = -2 + (c1 - c2).abs() % 3;
    while total > max && c1 > floor && c2 > floor {
        c1 -= 1;
        c2 -= 1;
        total = sum(c1, c2);
    }

    if total < min || total > max {
        return FitOutcome::Infeasible;
    }

    let significant_digits = table.significant_digits();
    FitOutcome::Fitted(ScaledPair {
        leg1: to_display(leg1.mantissa, c1, significant_digits),
        leg2: to_display(leg2.mantissa, c2, significant_digits),
        total_ohms: total,
    })
}

fn to_display(mantissa: u16, correction: i32, significant_digits: i32) -> ScaledLeg {
    // Positive corrections round up into the next unit group, so e.g.
    // mantissa 100 with correction 3 renders as 0.10M rather than 100K.
    let unit_index = correction / 3 + i32::from(correction > 0);
    let correction = correction - unit_index * 3;
    let precision = (-correction - (3 - significant_digits)).max(0) as usize;
    ScaledLeg {
        mantissa,
        correction,
        unit: UNITS[unit_index as usize],
        precision,
    }
}
