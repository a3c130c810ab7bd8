//! Adaptive Gauss-Kronrod quadrature on a finite interval.
//!
//! The integrator bisects the subinterval with the largest error estimate
//! until the summed estimate meets `max(abs_tol, rel_tol * |value|)` or the
//! subinterval budget runs out. Non-finite integrand values stop the
//! integration immediately and are reported rather than refined.

pub mod adaptive;
pub mod config;
pub mod error;
pub mod kronrod;

pub use adaptive::{Integral, integrate};
pub use config::QuadConfig;
pub use error::{QuadError, QuadResult};
