//! Error types for sweeps and studies.

use lw_forces::ForceError;
use thiserror::Error;

/// Errors that can occur while sweeping Q.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid sweep configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Evaluation failed at point {index} (Q = {q}): {source}")]
    PointFailed {
        index: usize,
        q: f64,
        #[source]
        source: ForceError,
    },
}

pub type SweepResult<T> = Result<T, SweepError>;

/// Errors that can occur while loading, running or saving a study.
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Invalid study: {what}")]
    Validation { what: String },

    #[error("Force error in figure {figure}: {source}")]
    Force {
        figure: usize,
        #[source]
        source: ForceError,
    },

    #[error("Sweep error in figure {figure}: {source}")]
    Sweep {
        figure: usize,
        #[source]
        source: SweepError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StudyResult<T> = Result<T, StudyError>;
