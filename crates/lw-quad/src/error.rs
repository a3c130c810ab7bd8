//! Error types for quadrature.

use thiserror::Error;

/// Errors that can occur while integrating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadError {
    #[error("Invalid quadrature configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Invalid integration interval [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("Integrand not finite on [{a}, {b}] (integral estimate {value})")]
    NonFinite { a: f64, b: f64, value: f64 },

    #[error(
        "Integration did not converge within {subintervals} subintervals: \
         value = {value}, error estimate = {abs_error}"
    )]
    NonConvergence {
        value: f64,
        abs_error: f64,
        subintervals: usize,
    },
}

pub type QuadResult<T> = Result<T, QuadError>;
