//! Globally adaptive bisection driver.

use crate::config::QuadConfig;
use crate::error::{QuadError, QuadResult};
use crate::kronrod::{POINTS, RuleEstimate, gk21};
use lw_core::numeric::Real;

/// Converged integral with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integral {
    /// Integral estimate
    pub value: Real,
    /// Estimated absolute error
    pub abs_error: Real,
    /// Number of integrand evaluations
    pub evaluations: usize,
    /// Number of subintervals in the final partition
    pub subintervals: usize,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: Real,
    b: Real,
    estimate: RuleEstimate,
}

impl Segment {
    fn new<F>(f: &F, a: Real, b: Real) -> Self
    where
        F: Fn(Real) -> Real + ?Sized,
    {
        Self {
            a,
            b,
            estimate: gk21(f, a, b),
        }
    }
}

/// Integrate `f` over `[a, b]`.
///
/// Bounds may be given in either order. Fails with `NonFinite` as soon as any
/// subinterval estimate is infinite or NaN, and with `NonConvergence` when
/// `config.max_subintervals` is exhausted.
pub fn integrate<F>(f: &F, a: Real, b: Real, config: &QuadConfig) -> QuadResult<Integral>
where
    F: Fn(Real) -> Real + ?Sized,
{
    config.validate()?;
    if !a.is_finite() || !b.is_finite() {
        return Err(QuadError::InvalidInterval { a, b });
    }

    let mut segments = Vec::with_capacity(config.max_subintervals);
    segments.push(Segment::new(f, a, b));
    let mut evaluations = POINTS;

    loop {
        let value: Real = segments.iter().map(|s| s.estimate.value).sum();
        let abs_error: Real = segments.iter().map(|s| s.estimate.error).sum();

        if !value.is_finite() || !abs_error.is_finite() {
            let bad = segments
                .iter()
                .find(|s| !s.estimate.value.is_finite() || !s.estimate.error.is_finite())
                .unwrap_or(&segments[0]);
            tracing::warn!(a = bad.a, b = bad.b, value, "non-finite integrand");
            return Err(QuadError::NonFinite {
                a: bad.a,
                b: bad.b,
                value,
            });
        }

        if abs_error <= config.target(value) {
            tracing::debug!(
                value,
                abs_error,
                evaluations,
                subintervals = segments.len(),
                "quadrature converged"
            );
            return Ok(Integral {
                value,
                abs_error,
                evaluations,
                subintervals: segments.len(),
            });
        }

        if segments.len() >= config.max_subintervals {
            tracing::warn!(
                value,
                abs_error,
                subintervals = segments.len(),
                "quadrature did not converge"
            );
            return Err(QuadError::NonConvergence {
                value,
                abs_error,
                subintervals: segments.len(),
            });
        }

        // Bisect the worst subinterval.
        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, l), (_, r)| l.estimate.error.total_cmp(&r.estimate.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let Segment { a: lo, b: hi, .. } = segments[worst];
        let mid = 0.5 * (lo + hi);
        segments[worst] = Segment::new(f, lo, mid);
        segments.push(Segment::new(f, mid, hi));
        evaluations += 2 * POINTS;
    }
}
