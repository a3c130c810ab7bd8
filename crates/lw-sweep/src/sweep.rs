//! Evenly stepped sweeps of the flow parameter Q.

use crate::error::{SweepError, SweepResult};
use lw_core::numeric::Real;
use serde::{Deserialize, Serialize};

/// Slack allowed when deciding whether `end` is reached by a whole number of steps.
const STEP_SLACK: Real = 1e-9;

/// Largest number of points a sweep may hold.
pub const MAX_POINTS: usize = 1_000_000;

/// Q values from `start` to `end` inclusive, `step` apart.
///
/// Points are computed as `start + i * step`, never by repeated addition, so
/// long sweeps do not drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QSweep {
    pub start: Real,
    pub end: Real,
    pub step: Real,
}

impl Default for QSweep {
    /// 0.0, 0.4, ..., 6.0
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 6.0,
            step: 0.4,
        }
    }
}

impl QSweep {
    pub fn new(start: Real, end: Real, step: Real) -> SweepResult<Self> {
        let sweep = Self { start, end, step };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> SweepResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(SweepError::InvalidConfiguration {
                what: format!("bounds must be finite (start={}, end={})", self.start, self.end),
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SweepError::InvalidConfiguration {
                what: format!("step must be positive (step={})", self.step),
            });
        }
        if self.end < self.start {
            return Err(SweepError::InvalidConfiguration {
                what: format!("end {} is below start {}", self.end, self.start),
            });
        }
        let steps = self.whole_steps();
        if !steps.is_finite() || steps >= MAX_POINTS as Real {
            return Err(SweepError::InvalidConfiguration {
                what: format!(
                    "sweep from {} to {} by {} exceeds {MAX_POINTS} points",
                    self.start, self.end, self.step
                ),
            });
        }
        Ok(())
    }

    fn whole_steps(&self) -> Real {
        ((self.end - self.start) / self.step + STEP_SLACK).floor()
    }

    /// Number of points in the sweep, capped at `MAX_POINTS`.
    pub fn num_points(&self) -> usize {
        let steps = self.whole_steps();
        if steps.is_finite() {
            (steps as usize).saturating_add(1).min(MAX_POINTS)
        } else {
            MAX_POINTS
        }
    }

    /// Generate all points in the sweep.
    pub fn points(&self) -> Vec<Real> {
        (0..self.num_points())
            .map(|i| self.start + i as Real * self.step)
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn points_are_increasing_and_bounded(
            start in -10.0_f64..10.0,
            span in 0.0_f64..20.0,
            step in 0.01_f64..5.0,
        ) {
            let sweep = QSweep::new(start, start + span, step).unwrap();
            let points = sweep.points();
            prop_assert_eq!(points.len(), sweep.num_points());
            prop_assert_eq!(points[0], start);
            prop_assert!(points.windows(2).all(|w| w[1] > w[0]));
            prop_assert!(*points.last().unwrap() <= start + span + step * 1e-6);
        }
    }
}
