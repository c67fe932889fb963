//! Decade normalization of arbitrary resistances into the table window.

use rd_core::{Real, pow10};

use crate::error::{SeriesError, SeriesResult};
use crate::series::SeriesTable;

/// A resistance rewritten as `mantissa * 10^correction` with the mantissa
/// inside the table's native decade window `[first, 10 * first)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedValue {
    pub mantissa: Real,
    pub correction: i32,
}

impl NormalizedValue {
    /// The original resistance this normalization came from.
    pub fn value(&self) -> Real {
        self.mantissa * pow10(self.correction)
    }
}

impl SeriesTable {
    /// Rescale `target` into `[first, 10 * first)`, tracking the applied
    /// power of ten. Converges in O(log10(target / 100)) steps.
    pub fn normalize(&self, target: Real) -> SeriesResult<NormalizedValue> {
        if !(target > 0.0) {
            return Err(SeriesError::NonPositiveTarget { value: target });
        }

        let low = Real::from(self.first());
        let high = low * 10.0;

        let mut mantissa = target;
        let mut correction = 0i32;

        while mantissa < low {
            mantissa *= 10.0;
            correction -= 1;
        }
        while mantissa >= high {
            mantissa /= 10.0;
            correction += 1;
        }

        Ok(NormalizedValue {
            mantissa,
            correction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    #[test]
    fn identity_inside_window() {
        let table = Series::E24.table();
        let n = table.normalize(470.0).unwrap();
        assert_eq!(n.mantissa, 470.0);
        assert_eq!(n.correction, 0);
    }

    #[test]
    fn scales_up_small_values() {
        let table = Series::E24.table();
        let n = table.normalize(4.7).unwrap();
        assert!((n.mantissa - 470.0).abs() < 1e-9);
        assert_eq!(n.correction, -2);
    }

    #[test]
    fn scales_down_large_values() {
        let table = Series::E96.table();
        let n = table.normalize(332_000.0).unwrap();
        assert!((n.mantissa - 332.0).abs() < 1e-9);
        assert_eq!(n.correction, 3);
    }

    #[test]
    fn upper_edge_rolls_into_next_decade() {
        // 1000 sits on the closed upper bound, so it becomes 100 * 10^1.
        let table = Series::E12.table();
        let n = table.normalize(1000.0).unwrap();
        assert_eq!(n.mantissa, 100.0);
        assert_eq!(n.correction, 1);
    }

    #[test]
    fn rejects_non_positive_targets() {
        let table = Series::E24.table();
        assert_eq!(
            table.normalize(0.0),
            Err(SeriesError::NonPositiveTarget { value: 0.0 })
        );
        assert!(table.normalize(-22.0).is_err());
        assert!(table.normalize(Real::NAN).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn window_and_roundtrip(target in 1e-6_f64..1e12_f64) {
                let table = Series::E24.table();
                let n = table.normalize(target).unwrap();
                prop_assert!(n.mantissa >= 100.0);
                prop_assert!(n.mantissa < 1000.0);
                let rebuilt = n.value();
                prop_assert!((rebuilt - target).abs() <= 1e-9 * target);
            }
        }
    }
}
