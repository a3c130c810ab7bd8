//! One force evaluated along a Q sweep.

use crate::error::{SweepError, SweepResult};
use crate::sweep::QSweep;
use lw_core::numeric::Real;
use lw_forces::{BearingParams, ForceConfig, ForceKind, integrate_force};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A single evaluated point of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub q: Real,
    /// May be infinite or NaN when the singularity policy propagates
    #[serde(with = "crate::float_repr")]
    pub value: Real,
    /// Quadrature error estimate; absent for propagated non-finite values
    pub abs_error: Option<Real>,
}

/// Force values for fixed geometry across a Q sweep, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub kind: ForceKind,
    pub phi: Real,
    pub delta: Real,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    /// Q values in sweep order.
    pub fn q_values(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.q).collect()
    }

    /// Force values in sweep order, one per Q.
    pub fn values(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Largest quadrature error estimate along the curve.
    pub fn max_abs_error(&self) -> Option<Real> {
        self.points
            .iter()
            .filter_map(|p| p.abs_error)
            .reduce(Real::max)
    }
}

/// Evaluate `kind` at every Q of `sweep`.
///
/// Points are evaluated in parallel; the first failure in sweep order aborts
/// the curve.
pub fn sweep_curve(
    kind: ForceKind,
    params: &BearingParams,
    sweep: &QSweep,
    config: &ForceConfig,
) -> SweepResult<Curve> {
    sweep.validate()?;
    let qs = sweep.points();

    let evaluations: Vec<_> = qs
        .par_iter()
        .map(|&q| integrate_force(kind, q, params, config))
        .collect();

    let mut points = Vec::with_capacity(evaluations.len());
    for (index, (q, result)) in qs.iter().zip(evaluations).enumerate() {
        match result {
            Ok(eval) => points.push(CurvePoint {
                q: *q,
                value: eval.value,
                abs_error: eval.abs_error(),
            }),
            Err(source) => {
                tracing::warn!(%kind, index, q, error = %source, "sweep point failed");
                return Err(SweepError::PointFailed {
                    index,
                    q: *q,
                    source,
                });
            }
        }
    }

    tracing::debug!(
        %kind,
        phi = params.phi(),
        delta = params.delta(),
        points = points.len(),
        "curve evaluated"
    );

    Ok(Curve {
        kind,
        phi: params.phi(),
        delta: params.delta(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lw_forces::dp;

    #[test]
    fn curve_matches_pointwise_evaluation() {
        let params = BearingParams::new(0.2, 0.44).unwrap();
        let sweep = QSweep::new(0.0, 2.0, 0.5).unwrap();
        let curve = sweep_curve(
            ForceKind::ExternalFriction,
            &params,
            &sweep,
            &ForceConfig::default(),
        )
        .unwrap();

        assert_eq!(curve.q_values(), sweep.points());
        for point in &curve.points {
            assert_eq!(point.value, dp(point.q, 0.2, 0.44).unwrap());
        }
        assert!(curve.max_abs_error().unwrap() < 1e-8);
    }

    #[test]
    fn failure_reports_sweep_index() {
        // delta == 1 meets the flat profile everywhere.
        let params = BearingParams::new(0.0, 1.0).unwrap();
        let err = sweep_curve(
            ForceKind::InternalFriction,
            &params,
            &QSweep::default(),
            &ForceConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SweepError::PointFailed { index: 0, .. }));
    }
}
