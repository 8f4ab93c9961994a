//! Vertical right-circular cylinder tanks.
//!
//! Cross-section is constant along the axis, so a fill fraction by volume is
//! the same fraction of the total height.

use std::f64::consts::PI;

use cc_core::units::{Length, Volume, cm, in_liters, m};
use cc_core::{CcError, CcResult, Real, ensure_positive};
use uom::si::length::meter;

/// Validated tank geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderTank {
    diameter: Length,
    height: Length,
}

impl CylinderTank {
    /// Diameter in centimeters, height in meters; both must be positive.
    pub fn new(diameter_cm: Real, height_m: Real) -> CcResult<Self> {
        if diameter_cm > 0.0 && height_m > 0.0 {
            Ok(Self {
                diameter: cm(diameter_cm),
                height: m(height_m),
            })
        } else {
            Err(CcError::InvalidArg {
                what: "diameter and height must be positive",
            })
        }
    }

    pub fn height_m(&self) -> Real {
        self.height.get::<meter>()
    }

    pub fn radius(&self) -> Length {
        self.diameter / 2.0
    }

    pub fn volume(&self) -> Volume {
        let r = self.radius();
        r * r * self.height * PI
    }

    pub fn volume_liters(&self) -> Real {
        in_liters(self.volume())
    }

    /// Liquid column height (m) when the tank is `fraction` full.
    pub fn fill_height_m(&self, fraction: Real) -> CcResult<Real> {
        fill_height_for_fraction(self.height_m(), fraction)
    }

    /// Liquid volume (L) when the tank is `fraction` full.
    pub fn fill_volume_liters(&self, fraction: Real) -> CcResult<Real> {
        check_fraction(fraction)?;
        Ok(self.volume_liters() * fraction)
    }
}

/// Total internal volume in liters of a cylinder given its diameter in
/// centimeters and its height in meters.
pub fn cylinder_volume_liters(diameter_cm: Real, height_m: Real) -> CcResult<Real> {
    Ok(CylinderTank::new(diameter_cm, height_m)?.volume_liters())
}

/// Liquid height (m) in a vertical cylinder of `total_height_m` filled to
/// `fraction` (0..=1) of its volume.
pub fn fill_height_for_fraction(total_height_m: Real, fraction: Real) -> CcResult<Real> {
    check_fraction(fraction)?;
    let total_height_m = ensure_positive(total_height_m, "total height must be positive")?;
    Ok(total_height_m * fraction)
}

fn check_fraction(fraction: Real) -> CcResult<()> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(())
    } else {
        Err(CcError::InvalidArg {
            what: "fill fraction must be in [0, 1]",
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn volume_matches_closed_form(d in 0.1_f64..1000.0, h in 0.01_f64..100.0) {
            let expected = PI * (d / 200.0).powi(2) * h * 1000.0;
            let vol = cylinder_volume_liters(d, h).unwrap();
            prop_assert!((vol - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn fill_height_scales_linearly(h in 0.01_f64..100.0, f in 0.0_f64..=1.0) {
            let level = fill_height_for_fraction(h, f).unwrap();
            prop_assert!(level >= 0.0 && level <= h);
            prop_assert_eq!(level, h * f);
        }
    }
}
