//! Temperature scale conversions and the Celsius to Fahrenheit table.

use cc_core::units::constants::{F_AT_ZERO_C, F_PER_C, KELVIN_OFFSET};
use cc_core::{CcResult, Real, TABLE_DECIMALS, round_decimals};

use crate::sweeps::{Sample, StepSweep};

/// `F = 9/5 * C + 32`.
#[inline]
pub fn celsius_to_fahrenheit(c: Real) -> Real {
    F_PER_C * c + F_AT_ZERO_C
}

#[inline]
pub fn celsius_to_kelvin(c: Real) -> Real {
    c + KELVIN_OFFSET
}

/// Tabulate `(Celsius, Fahrenheit)` pairs from `start` to `stop` inclusive.
///
/// Both columns are rounded to six decimals. Returns an empty table when
/// `start > stop`; fails when `step <= 0`.
pub fn generate_c_to_f_table(start: Real, stop: Real, step: Real) -> CcResult<Vec<Sample>> {
    let sweep = StepSweep::new(start, stop, step)?;
    Ok(sweep
        .points()
        .map(|c| {
            (
                round_decimals(c, TABLE_DECIMALS),
                round_decimals(celsius_to_fahrenheit(c), TABLE_DECIMALS),
            )
        })
        .collect())
}
