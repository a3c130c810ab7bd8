//! Error types for force integration.

use lw_model::ModelError;
use lw_quad::QuadError;
use thiserror::Error;

/// Errors that can occur while evaluating Dp, F0 or Fi.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForceError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error(
        "Near-singular evaluation for phi = {phi}, delta = {delta}: \
         |delta - h| = {margin} at z = {z} (tolerance {tolerance})"
    )]
    NearSingular {
        phi: f64,
        delta: f64,
        z: f64,
        margin: f64,
        tolerance: f64,
    },

    #[error("Quadrature error: {0}")]
    Quadrature(#[from] QuadError),
}

pub type ForceResult<T> = Result<T, ForceError>;
