//! Error types for model parameters.

use thiserror::Error;

/// Errors raised when bearing parameters fall outside the model's domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
