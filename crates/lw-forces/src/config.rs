//! Configuration for force integration.

use lw_core::numeric::Real;
use lw_quad::QuadConfig;

/// Default closest-approach tolerance for `SingularityPolicy::Reject`.
pub const DEFAULT_SINGULAR_TOLERANCE: Real = 1e-9;

/// How to treat geometries where `delta` meets the film-thickness profile.
///
/// At such points `ln(delta / h)` vanishes and the densities diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum SingularityPolicy {
    /// Fail before integrating when `min_z |delta - h(phi, z)|` is below `tolerance`.
    Reject { tolerance: Real },
    /// Integrate anyway; an infinite or NaN integrand becomes the returned value.
    Propagate,
}

impl Default for SingularityPolicy {
    fn default() -> Self {
        SingularityPolicy::Reject {
            tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }
}

/// Settings shared by every Dp/F0/Fi evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForceConfig {
    pub quad: QuadConfig,
    pub singularity: SingularityPolicy,
}

impl ForceConfig {
    /// Default quadrature with literal IEEE propagation at singular points.
    pub fn propagating() -> Self {
        Self {
            singularity: SingularityPolicy::Propagate,
            ..Self::default()
        }
    }
}
