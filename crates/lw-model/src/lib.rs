//! lw-model: the wavy-bearing lubrication model.
//!
//! Provides the pointwise densities integrated over one wavelength of the
//! bearing surface:
//! - `h`: sinusoidal film-thickness profile
//! - `g`: frictional pressure-gradient density
//! - `f0`, `fi`: internal-friction and pressure-loss densities built on `g`
//!
//! The free functions take raw `f64` arguments and follow the model literally,
//! including its singularity where `delta == h(phi, z)`. `BearingParams`
//! validates the geometry once and is what the integrators consume.
//!
//! # Example
//!
//! ```
//! use lw_model::{BearingParams, ForceKind, g};
//!
//! let params = BearingParams::new(0.2, 0.44).unwrap();
//! let direct = g(0.3, 2.0, 0.2, 0.44);
//! let via_kind = ForceKind::ExternalFriction.density(0.3, 2.0, &params);
//! assert_eq!(direct, via_kind);
//! ```

pub mod error;
pub mod integrand;
pub mod params;
pub mod profile;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use integrand::{ForceKind, f0, fi, g};
pub use params::{BearingParams, ClosestApproach, Regime, validate_flow};
pub use profile::{h, profile_bounds};
