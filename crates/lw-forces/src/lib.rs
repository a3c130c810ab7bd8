//! Integrated friction forces of the wavy bearing.
//!
//! Each quantity is the integral over one wavelength `z ∈ [0, 1]` of a model
//! density, at fixed flow parameter `Q` and geometry `(phi, delta)`:
//!
//! - `dp`: external friction force Dp(Q), integral of `g`
//! - `f0`: internal friction force F0(Q), integral of `f0`
//! - `fi`: pressure-loss term Fi(Q), integral of `fi`; exactly zero when `delta == 0`
//!
//! The short forms use `ForceConfig::default()`. `integrate_force` takes an
//! explicit configuration and returns quadrature diagnostics.
//!
//! # Example
//!
//! ```
//! let value = lw_forces::dp(2.0, 0.2, 0.44).unwrap();
//! assert!((value - 25.962965953347602).abs() < 1e-8);
//! assert_eq!(lw_forces::fi(2.0, 0.2, 0.0).unwrap(), 0.0);
//! ```

pub mod config;
pub mod error;
pub mod integrate;

pub use config::{DEFAULT_SINGULAR_TOLERANCE, ForceConfig, SingularityPolicy};
pub use error::{ForceError, ForceResult};
pub use integrate::{ForceEvaluation, dp, f0, fi, integrate_force};
pub use lw_model::{BearingParams, ForceKind};
