//! Quadrature configuration.

use crate::error::{QuadError, QuadResult};
use lw_core::numeric::Real;

/// Tolerances and budget for adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadConfig {
    /// Absolute tolerance on the integral
    pub abs_tol: Real,
    /// Relative tolerance on the integral
    pub rel_tol: Real,
    /// Maximum number of subintervals before giving up
    pub max_subintervals: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_subintervals: 50,
        }
    }
}

impl QuadConfig {
    pub fn validate(&self) -> QuadResult<()> {
        if !(self.abs_tol.is_finite() && self.abs_tol >= 0.0) {
            return Err(QuadError::InvalidConfig {
                what: "abs_tol must be finite and non-negative",
            });
        }
        if !(self.rel_tol.is_finite() && self.rel_tol >= 0.0) {
            return Err(QuadError::InvalidConfig {
                what: "rel_tol must be finite and non-negative",
            });
        }
        if self.abs_tol == 0.0 && self.rel_tol == 0.0 {
            return Err(QuadError::InvalidConfig {
                what: "abs_tol and rel_tol cannot both be zero",
            });
        }
        if self.max_subintervals == 0 {
            return Err(QuadError::InvalidConfig {
                what: "max_subintervals must be at least 1",
            });
        }
        Ok(())
    }

    /// Error target for an integral estimate of `value`.
    pub fn target(&self, value: Real) -> Real {
        self.abs_tol.max(self.rel_tol * value.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(QuadConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_tolerances() {
        let config = QuadConfig {
            abs_tol: 0.0,
            rel_tol: 0.0,
            ..QuadConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_values() {
        let nan_abs = QuadConfig {
            abs_tol: f64::NAN,
            ..QuadConfig::default()
        };
        let negative_rel = QuadConfig {
            rel_tol: -1e-6,
            ..QuadConfig::default()
        };
        let no_budget = QuadConfig {
            max_subintervals: 0,
            ..QuadConfig::default()
        };
        assert!(nan_abs.validate().is_err());
        assert!(negative_rel.validate().is_err());
        assert!(no_budget.validate().is_err());
    }

    #[test]
    fn target_uses_larger_of_abs_and_rel() {
        let config = QuadConfig {
            abs_tol: 1e-8,
            rel_tol: 1e-6,
            max_subintervals: 10,
        };
        assert_eq!(config.target(0.0), 1e-8);
        assert!((config.target(100.0) - 1e-4).abs() < 1e-18);
    }
}
