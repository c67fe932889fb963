//! Bracket search: the adjacent standard values around a target resistance.

use rd_core::{Real, Tolerances, nearly_equal, pow10};

use crate::error::SeriesResult;
use crate::series::SeriesTable;

/// The two standard values immediately below and above a target, each with
/// its own decade correction.
///
/// The corrections are equal except in the rollover case: a target past the
/// series' last entry brackets against the first entry of the next decade,
/// so `high = (first, low_correction + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub low: u16,
    pub low_correction: i32,
    pub high: u16,
    pub high_correction: i32,
}

impl Bracket {
    pub fn is_exact(&self) -> bool {
        self.low == self.high && self.low_correction == self.high_correction
    }

    pub fn low_value(&self) -> Real {
        Real::from(self.low) * pow10(self.low_correction)
    }

    pub fn high_value(&self) -> Real {
        Real::from(self.high) * pow10(self.high_correction)
    }
}

impl SeriesTable {
    /// Find the standard values bracketing `target`.
    ///
    /// Normalizes first, then scans the strided table in ascending order.
    /// An entry matching the normalized mantissa collapses the bracket to a
    /// single value. The scan can never fire at the first entry, since the
    /// normalizer's lower window bound is the first entry itself.
    pub fn find(&self, target: Real) -> SeriesResult<Bracket> {
        let normalized = self.normalize(target)?;
        let correction = normalized.correction;
        let tol = Tolerances::default();

        let mut prev = self.first();
        for v in self.values() {
            if nearly_equal(Real::from(v), normalized.mantissa, tol) {
                return Ok(Bracket {
                    low: v,
                    low_correction: correction,
                    high: v,
                    high_correction: correction,
                });
            }
            if Real::from(v) > normalized.mantissa {
                return Ok(Bracket {
                    low: prev,
                    low_correction: correction,
                    high: v,
                    high_correction: correction,
                });
            }
            prev = v;
        }

        // Past the last entry: continue into the next decade.
        Ok(Bracket {
            low: self.last(),
            low_correction: correction,
            high: self.first(),
            high_correction: correction + 1,
        })
    }
}
