//! Stepped ranges for tabulating a quantity against an independent variable.
//!
//! Points are produced by repeated addition of the step, and the upper bound
//! is widened by [`STEP_BOUND_TOL`] so that drift in the running sum does not
//! drop the final point (0.1 added thirty times lands just above 3.0).

use cc_core::{CcError, CcResult, Real, STEP_BOUND_TOL, ensure_positive};

/// One `(independent, dependent)` row of a tabulated curve.
pub type Sample = (Real, Real);

/// A range `start, start + step, ...` inclusive of `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSweep {
    start: Real,
    stop: Real,
    step: Real,
}

impl StepSweep {
    /// Create a sweep. `start > stop` is allowed and yields no points.
    pub fn new(start: Real, stop: Real, step: Real) -> CcResult<Self> {
        let step = ensure_positive(step, "step must be positive")?;
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(CcError::InvalidArg {
                what: "sweep start, stop and step must be finite",
            });
        }

        // The running sum must still move at the largest magnitude it reaches.
        if start <= stop {
            let widest = start.abs().max(stop.abs());
            if widest + step == widest {
                return Err(CcError::InvalidArg {
                    what: "step too small to advance across the range",
                });
            }
        }

        Ok(Self { start, stop, step })
    }

    /// Iterate the points. The iterator can be cloned to restart it.
    pub fn points(&self) -> StepPoints {
        StepPoints {
            next: self.start,
            limit: self.stop + STEP_BOUND_TOL,
            step: self.step,
        }
    }

    /// Evaluate `f` at every point, stopping at the first failure.
    pub fn tabulate<F>(&self, mut f: F) -> CcResult<Vec<Sample>>
    where
        F: FnMut(Real) -> CcResult<Real>,
    {
        self.points().map(|x| Ok((x, f(x)?))).collect()
    }
}

impl IntoIterator for &StepSweep {
    type Item = Real;
    type IntoIter = StepPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

/// Iterator over the points of a [`StepSweep`].
#[derive(Debug, Clone)]
pub struct StepPoints {
    next: Real,
    limit: Real,
    step: Real,
}

impl Iterator for StepPoints {
    type Item = Real;

    fn next(&mut self) -> Option<Real> {
        if self.next <= self.limit {
            let x = self.next;
            self.next += self.step;
            Some(x)
        } else {
            None
        }
    }
}

impl std::iter::FusedIterator for StepPoints {}
