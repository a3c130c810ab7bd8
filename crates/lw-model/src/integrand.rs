//! Pointwise densities of the wavy-bearing model.
//!
//! All three densities share the same film thickness `h` and pressure
//! gradient `g` at a given position; the `*_at` helpers take them precomputed
//! so `f0` and `fi` evaluate the profile only once per sample.

use crate::params::{BearingParams, Regime};
use crate::profile::h;
use lw_core::numeric::Real;
use std::f64::consts::PI;

/// Which integrated quantity a density belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ForceKind {
    /// Dp: integral of `g`
    ExternalFriction,
    /// F0: integral of `f0`
    InternalFriction,
    /// Fi: integral of `fi`
    PressureLoss,
}

impl ForceKind {
    pub const ALL: [ForceKind; 3] = [
        ForceKind::ExternalFriction,
        ForceKind::InternalFriction,
        ForceKind::PressureLoss,
    ];

    /// Conventional symbol of the integrated quantity.
    pub fn symbol(self) -> &'static str {
        match self {
            ForceKind::ExternalFriction => "Dp",
            ForceKind::InternalFriction => "F0",
            ForceKind::PressureLoss => "Fi",
        }
    }

    /// Density of this quantity at position `z`.
    pub fn density(self, z: Real, q: Real, params: &BearingParams) -> Real {
        let phi = params.phi();
        let regime = params.regime();
        let h = params.h(z);
        let g = gradient_at(h, q, phi, regime);
        match self {
            ForceKind::ExternalFriction => g,
            ForceKind::InternalFriction => internal_at(h, g, regime),
            ForceKind::PressureLoss => loss_at(h, g, regime),
        }
    }
}

impl std::fmt::Display for ForceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Frictional pressure-gradient density `g(z, Q, phi, delta)`.
///
/// Unguarded: when `delta` equals `h(phi, z)` the denominator vanishes and the
/// result is infinite or NaN.
pub fn g(z: Real, q: Real, phi: Real, delta: Real) -> Real {
    gradient_at(h(phi, z), q, phi, Regime::of(delta))
}

/// Internal-friction density `f0(z, Q, phi, delta)`.
pub fn f0(z: Real, q: Real, phi: Real, delta: Real) -> Real {
    let regime = Regime::of(delta);
    let h = h(phi, z);
    internal_at(h, gradient_at(h, q, phi, regime), regime)
}

/// Pressure-loss density `fi(z, Q, phi, delta)`; identically zero when `delta == 0`.
pub fn fi(z: Real, q: Real, phi: Real, delta: Real) -> Real {
    let regime = Regime::of(delta);
    let h = h(phi, z);
    loss_at(h, gradient_at(h, q, phi, regime), regime)
}

fn gradient_at(h: Real, q: Real, phi: Real, regime: Regime) -> Real {
    let top = 8.0 * (q / PI + h.powi(2) - 1.0 - phi / 2.0);
    match regime {
        Regime::Limit => top / h.powi(4),
        Regime::Wavy { delta } => {
            let bot =
                delta.powi(4) - h.powi(4) - (delta.powi(2) - h.powi(2)).powi(2) / (delta / h).ln();
            -top / bot
        }
    }
}

/// `(delta^2 - h^2) / (2 ln(delta / h))`, the log-mean term shared by f0 and fi.
fn log_mean_term(h: Real, delta: Real) -> Real {
    (delta.powi(2) - h.powi(2)) / (2.0 * (delta / h).ln())
}

fn internal_at(h: Real, g: Real, regime: Regime) -> Real {
    match regime {
        Regime::Limit => PI * h.powi(2) * g,
        Regime::Wavy { delta } => PI * g * (h.powi(2) - log_mean_term(h, delta)),
    }
}

fn loss_at(h: Real, g: Real, regime: Regime) -> Real {
    match regime {
        Regime::Limit => 0.0,
        Regime::Wavy { delta } => PI * g * (delta.powi(2) - log_mean_term(h, delta)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_gradient_matches_closed_form() {
        // h = 1 at z = 0, so g0 = 8 (q/pi - phi/2)
        let v = g(0.0, 2.0, 0.2, 0.0);
        assert!((v - 8.0 * (2.0 / PI - 0.1)).abs() < 1e-14);
    }

    #[test]
    fn limit_internal_is_pi_h2_g() {
        let (z, q, phi) = (0.3, 1.2, 0.4);
        let hv = h(phi, z);
        let expected = PI * hv * hv * g(z, q, phi, 0.0);
        assert!((f0(z, q, phi, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn limit_pressure_loss_is_zero() {
        for i in 0..=8 {
            let z = i as Real / 8.0;
            assert_eq!(fi(z, 3.0, 0.3, 0.0), 0.0);
        }
    }

    #[test]
    fn wavy_gradient_flat_profile() {
        // phi = 0 => h = 1, top = 8 q / pi
        let (q, delta) = (1.0, 0.5_f64);
        let bot = delta.powi(4) - 1.0 - (delta.powi(2) - 1.0).powi(2) / delta.ln();
        let expected = -(8.0 * q / PI) / bot;
        assert!((g(0.7, q, 0.0, delta) - expected).abs() < 1e-12);
    }

    #[test]
    fn singular_point_is_not_finite() {
        // h(0.2, 0) == 1, so delta == 1 hits the log singularity
        assert!(!g(0.0, 1.0, 0.2, 1.0).is_finite());
        assert!(!f0(0.0, 1.0, 0.2, 1.0).is_finite());
    }

    #[test]
    fn kind_density_matches_free_functions() {
        let params = BearingParams::new(0.4, 0.32).unwrap();
        let (z, q) = (0.61, 2.8);
        assert_eq!(ForceKind::ExternalFriction.density(z, q, &params), g(z, q, 0.4, 0.32));
        assert_eq!(ForceKind::InternalFriction.density(z, q, &params), f0(z, q, 0.4, 0.32));
        assert_eq!(ForceKind::PressureLoss.density(z, q, &params), fi(z, q, 0.4, 0.32));
    }

    #[test]
    fn symbols() {
        let symbols: Vec<_> = ForceKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(symbols, ["Dp", "F0", "Fi"]);
    }
}
