//! cc-chem: introductory chemical-engineering calculations.
//!
//! Provides:
//! - Cylinder tank volume and fill height
//! - Celsius/Fahrenheit/Kelvin conversion and the C to F table
//! - Antoine saturation vapor pressure of a pure substance
//! - Raoult's-law vapor pressure of an ideal mixture
//! - Stepped sweeps for tabulating any of the above
//!
//! Every function is a pure computation: inputs are plain `f64` values in the
//! units named by the function (cm, m, C, K, kPa), and invalid inputs come
//! back as [`CcError::InvalidArg`].
//!
//! # Example
//!
//! ```
//! use cc_chem::{AntoineParameters, MixtureComponent, mixture_psat_raoult_kpa, psat_antoine};
//!
//! let hexane = AntoineParameters::HEXANE_LIKE;
//! let pure = psat_antoine(298.15, &hexane).unwrap();
//! let mix = [
//!     MixtureComponent::new(0.5, hexane),
//!     MixtureComponent::new(0.5, hexane),
//! ];
//! let p = mixture_psat_raoult_kpa(298.15, &mix).unwrap();
//! assert!((p - pure).abs() < 1e-9);
//! ```

pub mod antoine;
pub mod raoult;
pub mod sweeps;
pub mod tank;
pub mod temperature;

// Re-exports for ergonomics
pub use antoine::{AntoineParameters, psat_antoine, psat_antoine_log, psat_sweep};
pub use cc_core::{CcError, CcResult};
pub use raoult::{Mixture, MixtureComponent, mixture_psat_raoult_kpa, mixture_psat_sweep_celsius};
pub use sweeps::{Sample, StepPoints, StepSweep};
pub use tank::{CylinderTank, cylinder_volume_liters, fill_height_for_fraction};
pub use temperature::{celsius_to_fahrenheit, celsius_to_kelvin, generate_c_to_f_table};
