//! Ideal-mixture vapor pressure by Raoult's law:
//!
//! ```text
//! P = sum_i x_i * P_sat,i(T)
//! ```
//!
//! Mole fractions are normalized by their sum before they are combined, so
//! inputs that do not add up to exactly one are accepted.

use cc_core::{CcError, CcResult, Real};

use crate::antoine::{AntoineParameters, psat_antoine};
use crate::sweeps::{Sample, StepSweep};
use crate::temperature::celsius_to_kelvin;

/// One liquid-phase species: its mole fraction and its saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixtureComponent {
    pub mole_fraction: Real,
    pub params: AntoineParameters,
}

impl MixtureComponent {
    pub const fn new(mole_fraction: Real, params: AntoineParameters) -> Self {
        Self {
            mole_fraction,
            params,
        }
    }
}

/// Ideal liquid mixture with normalized mole fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    /// Components with fractions already divided by the raw sum.
    items: Vec<MixtureComponent>,
}

impl Mixture {
    /// Validate and normalize.
    ///
    /// Fails when `components` is empty or the fractions do not have a
    /// positive sum. Individual fractions are not range-checked.
    pub fn new(components: &[MixtureComponent]) -> CcResult<Self> {
        if components.is_empty() {
            return Err(CcError::InvalidArg {
                what: "mixture must have at least one component",
            });
        }

        let total: Real = components.iter().map(|c| c.mole_fraction).sum();
        if total > 0.0 {
            let items = components
                .iter()
                .map(|c| MixtureComponent::new(c.mole_fraction / total, c.params))
                .collect();
            Ok(Self { items })
        } else {
            Err(CcError::InvalidArg {
                what: "sum of mole fractions must be positive",
            })
        }
    }

    /// Normalized mole fractions in input order.
    pub fn mole_fractions(&self) -> impl Iterator<Item = Real> + '_ {
        self.items.iter().map(|c| c.mole_fraction)
    }

    /// Total vapor pressure in kPa at absolute temperature `t_k`.
    pub fn psat_kpa(&self, t_k: Real) -> CcResult<Real> {
        self.items.iter().try_fold(0.0, |acc, c| {
            Ok(acc + c.mole_fraction * psat_antoine(t_k, &c.params)?)
        })
    }
}

/// Total vapor pressure in kPa of an ideal mixture at `t_k`.
pub fn mixture_psat_raoult_kpa(t_k: Real, components: &[MixtureComponent]) -> CcResult<Real> {
    Mixture::new(components)?.psat_kpa(t_k)
}

/// `(T in C, P_mix in kPa)` rows over a Celsius range.
pub fn mixture_psat_sweep_celsius(
    t_min_c: Real,
    t_max_c: Real,
    dt_c: Real,
    components: &[MixtureComponent],
) -> CcResult<Vec<Sample>> {
    let sweep = StepSweep::new(t_min_c, t_max_c, dt_c)?;
    let mixture = Mixture::new(components)?;
    sweep.tabulate(|t_c| mixture.psat_kpa(celsius_to_kelvin(t_c)))
}
