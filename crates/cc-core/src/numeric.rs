use crate::CcError;

/// Floating point type used throughout system
pub type Real = f64;

/// Slack added to the upper bound of a stepped range so that accumulated
/// floating point drift does not drop the final point.
pub const STEP_BOUND_TOL: Real = 1e-9;

/// Decimal places kept when tabulated values are emitted.
pub const TABLE_DECIMALS: usize = 6;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CcError::NonFinite { what, value: v })
    }
}

/// Accept `v` only if it is strictly positive; NaN is rejected as well.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CcError> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CcError::InvalidArg { what })
    }
}

/// Round to a fixed number of decimal places.
///
/// Rounding works on the exact decimal expansion of `v`, so a
/// value stored just below a half-way point rounds down. Non-finite values
/// are returned unchanged.
pub fn round_decimals(v: Real, decimals: usize) -> Real {
    if !v.is_finite() {
        return v;
    }
    let rounded = format!("{v:.decimals$}").parse::<Real>().unwrap_or(v);
    // -0.0 prints as "-0" in tables
    if rounded == 0.0 { 0.0 } else { rounded }
}
