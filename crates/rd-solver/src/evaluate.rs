//! Nominal and worst-case divider ratio error for a resistor pair.

use rd_core::Real;
use rd_series::SeriesTable;
use serde::Serialize;

use crate::scale::Leg;

/// Which voltage the caller holds constant, and therefore which form of the
/// divider ratio is being approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatioMode {
    /// Vout is held; the target ratio is Vcc/Vout and the realized ratio is
    /// `(r1 + r2) / r2`.
    VoutHeld,
    /// Vcc is held; the target ratio is Vout/Vcc and the realized ratio is
    /// `r2 / (r1 + r2)`.
    VccHeld,
}

impl RatioMode {
    fn realized_ratio(self, r1: Real, r2: Real) -> Real {
        match self {
            RatioMode::VoutHeld => (r1 + r2) / r2,
            RatioMode::VccHeld => r2 / (r1 + r2),
        }
    }
}

/// Percentage error of the realized ratio against the target, nominally and
/// under worst-case opposite-sign component drift, with the matching
/// absolute deviations of the computed voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorTriplet {
    pub nominal_pct: Real,
    pub min_pct: Real,
    pub max_pct: Real,
    pub nominal_volts: Real,
    pub min_volts: Real,
    pub max_volts: Real,
}

/// Evaluate one candidate pair against `target_ratio`.
///
/// The worst-case bounds scale leg1 by the series' high multiplier while
/// leg2 takes the low one, and the mirror combination for the other bound.
/// This is the documented drift policy, not a proven extremum over all four
/// tolerance combinations, so the two results are ordered with min/max
/// rather than assigned by construction.
///
/// `reference_voltage` is the entered value of the computed (non-held)
/// voltage; the absolute deviations are `reference_voltage` times the
/// fractional ratio error.
pub fn evaluate(
    leg1: Leg,
    leg2: Leg,
    target_ratio: Real,
    mode: RatioMode,
    table: &SeriesTable,
    reference_voltage: Real,
) -> ErrorTriplet {
    let r1 = leg1.value();
    let r2 = leg2.value();
    let (err_low, err_high) = table.tolerance_bounds();

    let pct = |r1: Real, r2: Real| 100.0 * (mode.realized_ratio(r1, r2) / target_ratio - 1.0);

    let nominal_pct = pct(r1, r2);
    let drift_a = pct(r1 * err_high, r2 * err_low);
    let drift_b = pct(r1 * err_low, r2 * err_high);
    let min_pct = drift_a.min(drift_b);
    let max_pct = drift_a.max(drift_b);

    let volts = |p: Real| reference_voltage * p / 100.0;
    ErrorTriplet {
        nominal_pct,
        min_pct,
        max_pct,
        nominal_volts: volts(nominal_pct),
        min_volts: volts(min_pct),
        max_volts: volts(max_pct),
    }
}

/// Presentation band for an error percentage. Thresholds follow the
/// rendering legend: 0.01, 1, 2, 5 and 10 percent absolute error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Negligible,
    Low,
    Moderate,
    Elevated,
    High,
    Extreme,
}

impl Severity {
    pub fn classify(error_pct: Real) -> Self {
        let e = error_pct.abs();
        if e < 0.01 {
            Severity::Negligible
        } else if e < 1.0 {
            Severity::Low
        } else if e <= 2.0 {
            Severity::Moderate
        } else if e <= 5.0 {
            Severity::Elevated
        } else if e <= 10.0 {
            Severity::High
        } else {
            Severity::Extreme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rd_series::Series;

    #[test]
    fn exact_half_ratio_has_zero_nominal_error() {
        let table = Series::E192.table();
        let triplet = evaluate(
            Leg::new(100, 0),
            Leg::new(100, 0),
            0.5,
            RatioMode::VccHeld,
            &table,
            2.5,
        );
        assert!(triplet.nominal_pct.abs() < 1e-12);
        assert!(triplet.nominal_volts.abs() < 1e-12);
    }

    #[test]
    fn worst_case_straddles_nominal() {
        let table = Series::E24.table();
        for mode in [RatioMode::VoutHeld, RatioMode::VccHeld] {
            let triplet = evaluate(Leg::new(180, 0), Leg::new(330, 0), 1.5, mode, &table, 5.0);
            assert!(triplet.min_pct <= triplet.nominal_pct, "{mode:?}");
            assert!(triplet.nominal_pct <= triplet.max_pct, "{mode:?}");
            assert!(triplet.min_pct < triplet.max_pct, "{mode:?}");
        }
    }

    #[test]
    fn vout_held_nominal_matches_hand_computation() {
        let table = Series::E24.table();
        let triplet = evaluate(
            Leg::new(180, 0),
            Leg::new(330, 0),
            1.5,
            RatioMode::VoutHeld,
            &table,
            5.0,
        );
        // (180 + 330) / 330 = 1.5454..., +3.0303% against 1.5.
        assert!((triplet.nominal_pct - 100.0 * (510.0 / 330.0 / 1.5 - 1.0)).abs() < 1e-9);
        assert!((triplet.nominal_volts - 5.0 * triplet.nominal_pct / 100.0).abs() < 1e-12);
    }

    #[test]
    fn swapping_drift_direction_flips_sign_of_extremes() {
        let table = Series::E96.table();
        let triplet = evaluate(
            Leg::new(200, 0),
            Leg::new(200, 0),
            2.0,
            RatioMode::VoutHeld,
            &table,
            3.3,
        );
        // Equal legs at the exact ratio: drift bounds bracket zero.
        assert!(triplet.min_pct < 0.0);
        assert!(triplet.max_pct > 0.0);
    }

    #[test]
    fn severity_band_boundaries() {
        assert_eq!(Severity::classify(0.009), Severity::Negligible);
        assert_eq!(Severity::classify(0.01), Severity::Low);
        assert_eq!(Severity::classify(0.99), Severity::Low);
        assert_eq!(Severity::classify(1.0), Severity::Moderate);
        assert_eq!(Severity::classify(2.0), Severity::Moderate);
        assert_eq!(Severity::classify(2.1), Severity::Elevated);
        assert_eq!(Severity::classify(5.0), Severity::Elevated);
        assert_eq!(Severity::classify(5.1), Severity::High);
        assert_eq!(Severity::classify(10.0), Severity::High);
        assert_eq!(Severity::classify(10.1), Severity::Extreme);
        assert_eq!(Severity::classify(-3.0), Severity::Elevated);
    }
}
