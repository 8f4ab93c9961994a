//! Saturation vapor pressure from the Antoine equation in natural-log form:
//!
//! ```text
//! ln(P / kPa) = A - B / (T / K + C)
//! ```
//!
//! Nothing guards `T + C = 0`. At that temperature the division yields an
//! infinite log-pressure (or NaN when `B = 0`), and the value is returned as
//! is rather than reported as an error.

use cc_core::units::{Pressure, Temperature, in_kelvin, kpa};
use cc_core::{CcResult, Real, ensure_positive};

use crate::sweeps::{Sample, StepSweep};

/// Coefficients of one substance's saturation curve (T in K, P in kPa).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntoineParameters {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

impl AntoineParameters {
    /// n-hexane-like worked example used throughout the course material.
    pub const HEXANE_LIKE: Self = Self::new(14.0568, 2825.42, -42.7089);

    pub const fn new(a: Real, b: Real, c: Real) -> Self {
        Self { a, b, c }
    }

    pub fn ln_psat_kpa(&self, t_k: Real) -> CcResult<Real> {
        psat_antoine_log(t_k, self)
    }

    pub fn psat_kpa(&self, t_k: Real) -> CcResult<Real> {
        psat_antoine(t_k, self)
    }

    pub fn saturation_pressure(&self, t: Temperature) -> CcResult<Pressure> {
        Ok(kpa(self.psat_kpa(in_kelvin(t))?))
    }
}

/// `ln(P_sat / kPa)` at absolute temperature `t_k`.
pub fn psat_antoine_log(t_k: Real, params: &AntoineParameters) -> CcResult<Real> {
    let t_k = ensure_positive(t_k, "absolute temperature must be positive")?;
    Ok(params.a - params.b / (t_k + params.c))
}

/// Saturation vapor pressure in kPa at absolute temperature `t_k`.
pub fn psat_antoine(t_k: Real, params: &AntoineParameters) -> CcResult<Real> {
    Ok(psat_antoine_log(t_k, params)?.exp())
}

/// `(T in K, P_sat in kPa)` rows from `t_min_k` to `t_max_k` in steps of `dt_k`.
pub fn psat_sweep(
    t_min_k: Real,
    t_max_k: Real,
    dt_k: Real,
    params: &AntoineParameters,
) -> CcResult<Vec<Sample>> {
    StepSweep::new(t_min_k, t_max_k, dt_k)?.tabulate(|t_k| psat_antoine(t_k, params))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Positive B with T + C kept above zero.
        #[test]
        fn monotonic_in_physical_regime(
            a in 5.0_f64..20.0,
            b in 500.0_f64..5000.0,
            c in -60.0_f64..0.0,
            t in 150.0_f64..600.0,
            dt in 0.1_f64..50.0,
        ) {
            let params = AntoineParameters::new(a, b, c);
            let lo = psat_antoine_log(t, &params).unwrap();
            let hi = psat_antoine_log(t + dt, &params).unwrap();
            prop_assert!(hi > lo);
        }
    }
}
