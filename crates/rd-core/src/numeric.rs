use crate::CoreError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// One tolerance for everything.
///
/// Mantissa comparisons against table entries use this rather than `==`:
/// a theoretical leg value that lands exactly on a standard value may
/// arrive a few ulps off after the decade normalization loop.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// `10^exp` for the signed decade corrections carried next to mantissas.
///
/// Corrections stay within roughly [-4, 10] for any admissible resistance
/// window, so `powi` is exact enough here.
#[inline]
pub fn pow10(exp: i32) -> Real {
    10f64.powi(exp)
}

pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if !v.is_finite() {
        return Err(CoreError::NonFinite { what, value: v });
    }
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositive { what, value: v })
    }
}
