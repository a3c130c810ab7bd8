//! Definite integrals of the model densities over one wavelength.

use crate::config::{ForceConfig, SingularityPolicy};
use crate::error::{ForceError, ForceResult};
use lw_core::numeric::Real;
use lw_model::{BearingParams, ForceKind, validate_flow};
use lw_quad::{Integral, QuadError, integrate};

/// One evaluated force with its quadrature diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceEvaluation {
    pub kind: ForceKind,
    pub q: Real,
    pub value: Real,
    /// `None` when a non-finite value was propagated instead of integrated.
    pub integral: Option<Integral>,
}

impl ForceEvaluation {
    pub fn abs_error(&self) -> Option<Real> {
        self.integral.map(|i| i.abs_error)
    }
}

/// External friction force Dp(Q) = ∫₀¹ g dz.
pub fn dp(q: Real, phi: Real, delta: Real) -> ForceResult<Real> {
    evaluate_default(ForceKind::ExternalFriction, q, phi, delta)
}

/// Internal friction force F0(Q) = ∫₀¹ f0 dz.
pub fn f0(q: Real, phi: Real, delta: Real) -> ForceResult<Real> {
    evaluate_default(ForceKind::InternalFriction, q, phi, delta)
}

/// Pressure-loss term Fi(Q) = ∫₀¹ fi dz.
pub fn fi(q: Real, phi: Real, delta: Real) -> ForceResult<Real> {
    evaluate_default(ForceKind::PressureLoss, q, phi, delta)
}

fn evaluate_default(kind: ForceKind, q: Real, phi: Real, delta: Real) -> ForceResult<Real> {
    let params = BearingParams::new(phi, delta)?;
    integrate_force(kind, q, &params, &ForceConfig::default()).map(|e| e.value)
}

/// Integrate the density of `kind` over `z ∈ [0, 1]`.
///
/// With `SingularityPolicy::Reject` the geometry is checked before any
/// quadrature; with `Propagate` a non-finite integrand is returned as the
/// value. Non-convergence is an error under both policies.
pub fn integrate_force(
    kind: ForceKind,
    q: Real,
    params: &BearingParams,
    config: &ForceConfig,
) -> ForceResult<ForceEvaluation> {
    let q = validate_flow(q)?;

    if let SingularityPolicy::Reject { tolerance } = config.singularity {
        check_singularity(params, tolerance)?;
    }

    let density = |z: Real| kind.density(z, q, params);
    match integrate(&density, 0.0, 1.0, &config.quad) {
        Ok(integral) => {
            tracing::debug!(
                %kind,
                q,
                phi = params.phi(),
                delta = params.delta(),
                value = integral.value,
                abs_error = integral.abs_error,
                "force integrated"
            );
            Ok(ForceEvaluation {
                kind,
                q,
                value: integral.value,
                integral: Some(integral),
            })
        }
        Err(QuadError::NonFinite { value, .. })
            if config.singularity == SingularityPolicy::Propagate =>
        {
            tracing::debug!(%kind, q, value, "propagating non-finite force");
            Ok(ForceEvaluation {
                kind,
                q,
                value,
                integral: None,
            })
        }
        Err(e) => Err(e.into()),
    }
}

fn check_singularity(params: &BearingParams, tolerance: Real) -> ForceResult<()> {
    let Some(approach) = params.closest_approach() else {
        return Ok(());
    };
    if approach.margin < tolerance {
        tracing::warn!(
            phi = params.phi(),
            delta = params.delta(),
            z = approach.z,
            margin = approach.margin,
            "delta meets the film profile"
        );
        return Err(ForceError::NearSingular {
            phi: params.phi(),
            delta: params.delta(),
            z: approach.z,
            margin: approach.margin,
            tolerance,
        });
    }
    Ok(())
}
