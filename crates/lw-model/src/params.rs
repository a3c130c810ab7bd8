//! Validated bearing geometry and the delta regime switch.

use crate::error::{ModelError, ModelResult};
use crate::profile::{h, profile_bounds};
use lw_core::numeric::{Real, TWO_PI, in_half_open};

/// Which closed form of the model applies.
///
/// `delta == 0` is the limiting case of the general wavy-bearing expressions
/// and has its own closed forms without any logarithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// delta == 0
    Limit,
    /// delta != 0
    Wavy { delta: Real },
}

impl Regime {
    /// Select the regime for a raw delta. Both `0.0` and `-0.0` map to `Limit`.
    pub fn of(delta: Real) -> Self {
        if delta == 0.0 {
            Regime::Limit
        } else {
            Regime::Wavy { delta }
        }
    }
}

/// Check the flow-rate parameter `q`; any finite value is accepted.
pub fn validate_flow(q: Real) -> ModelResult<Real> {
    if q.is_finite() {
        Ok(q)
    } else {
        Err(ModelError::InvalidParameter {
            name: "q",
            value: q,
            reason: "flow-rate parameter must be finite",
        })
    }
}

/// Point of closest approach between `delta` and the film-thickness profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestApproach {
    /// Position in [0, 1) where `|delta - h(z)|` is smallest
    pub z: Real,
    /// The smallest value of `|delta - h(z)|` over one wavelength
    pub margin: Real,
}

/// Geometric constants of one bearing: waviness amplitude and thickness ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingParams {
    phi: Real,
    delta: Real,
}

impl BearingParams {
    /// Validate and build parameters.
    ///
    /// `phi` must lie in `[0, 1)` so the profile stays strictly positive, and
    /// `delta` must be finite and non-negative so `ln(delta / h)` is real.
    pub fn new(phi: Real, delta: Real) -> ModelResult<Self> {
        if !in_half_open(phi, 0.0, 1.0) {
            return Err(ModelError::InvalidParameter {
                name: "phi",
                value: phi,
                reason: "waviness amplitude must lie in [0, 1)",
            });
        }
        if !delta.is_finite() || delta < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "delta",
                value: delta,
                reason: "thickness ratio must be finite and non-negative",
            });
        }
        Ok(Self { phi, delta })
    }

    pub fn phi(&self) -> Real {
        self.phi
    }

    pub fn delta(&self) -> Real {
        self.delta
    }

    pub fn regime(&self) -> Regime {
        Regime::of(self.delta)
    }

    /// Film thickness at `z` for this geometry.
    pub fn h(&self, z: Real) -> Real {
        h(self.phi, z)
    }

    /// Where `delta` comes closest to the profile over one wavelength.
    ///
    /// Returns `None` in the `Limit` regime, which has no logarithmic term and
    /// therefore no singularity. Since `sin(2*pi*z)` covers `[-1, 1]` on
    /// `[0, 1)`, the margin is zero exactly when `delta` lies in
    /// `[1 - phi, 1 + phi]`.
    pub fn closest_approach(&self) -> Option<ClosestApproach> {
        let delta = match self.regime() {
            Regime::Limit => return None,
            Regime::Wavy { delta } => delta,
        };

        if self.phi == 0.0 {
            return Some(ClosestApproach {
                z: 0.0,
                margin: (delta - 1.0).abs(),
            });
        }

        let (lo, hi) = profile_bounds(self.phi);
        let approach = if delta > hi {
            ClosestApproach {
                z: 0.25,
                margin: delta - hi,
            }
        } else if delta < lo {
            ClosestApproach {
                z: 0.75,
                margin: lo - delta,
            }
        } else {
            // Two crossings per wavelength: asin(s) and pi - asin(s).
            let s = ((delta - 1.0) / self.phi).clamp(-1.0, 1.0);
            let first = s.asin() / TWO_PI;
            let first = if first < 0.0 { first + 1.0 } else { first };
            let second = 0.5 - s.asin() / TWO_PI;
            ClosestApproach {
                z: first.min(second),
                margin: 0.0,
            }
        };
        Some(approach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_switches_on_exact_zero() {
        assert_eq!(Regime::of(0.0), Regime::Limit);
        assert_eq!(Regime::of(-0.0), Regime::Limit);
        assert_eq!(Regime::of(1e-300), Regime::Wavy { delta: 1e-300 });
    }

    #[test]
    fn rejects_out_of_range_phi() {
        assert!(BearingParams::new(1.0, 0.0).is_err());
        assert!(BearingParams::new(-0.1, 0.0).is_err());
        assert!(BearingParams::new(Real::NAN, 0.0).is_err());
        assert!(BearingParams::new(0.0, 0.0).is_ok());
        assert!(BearingParams::new(0.999, 0.0).is_ok());
    }

    #[test]
    fn rejects_negative_or_non_finite_delta() {
        let err = BearingParams::new(0.2, -0.5).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidParameter { name: "delta", .. }
        ));
        assert!(BearingParams::new(0.2, Real::INFINITY).is_err());
        assert!(BearingParams::new(0.2, Real::NAN).is_err());
    }

    #[test]
    fn flow_must_be_finite() {
        assert_eq!(validate_flow(-3.5), Ok(-3.5));
        assert!(validate_flow(Real::INFINITY).is_err());
        assert!(validate_flow(Real::NAN).is_err());
    }

    #[test]
    fn no_approach_in_limit_regime() {
        let params = BearingParams::new(0.4, 0.0).unwrap();
        assert_eq!(params.closest_approach(), None);
    }

    #[test]
    fn approach_below_band_is_at_trough() {
        let params = BearingParams::new(0.2, 0.44).unwrap();
        let approach = params.closest_approach().unwrap();
        assert_eq!(approach.z, 0.75);
        assert!((approach.margin - 0.36).abs() < 1e-12);
    }

    #[test]
    fn approach_above_band_is_at_crest() {
        let params = BearingParams::new(0.2, 1.5).unwrap();
        let approach = params.closest_approach().unwrap();
        assert_eq!(approach.z, 0.25);
        assert!((approach.margin - 0.3).abs() < 1e-12);
    }

    #[test]
    fn approach_inside_band_hits_profile() {
        let params = BearingParams::new(0.2, 0.9).unwrap();
        let approach = params.closest_approach().unwrap();
        assert_eq!(approach.margin, 0.0);
        assert!((0.0..1.0).contains(&approach.z));
        assert!((params.h(approach.z) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn flat_profile_approach_is_distance_to_one() {
        let params = BearingParams::new(0.0, 0.5).unwrap();
        let approach = params.closest_approach().unwrap();
        assert_eq!(approach.margin, 0.5);
    }
}
