//! lw-sweep: Q sweeps and studies over the wavy-bearing forces.
//!
//! A `Curve` is one force evaluated along a `QSweep` for fixed `(phi, delta)`.
//! A `Study` groups curves into figures, is configured in YAML and produces a
//! JSON-serializable `StudyOutput` for whatever draws the plots.

pub mod curve;
pub mod error;
mod float_repr;
pub mod study;
pub mod sweep;

pub use curve::{Curve, CurvePoint, sweep_curve};
pub use error::{StudyError, StudyResult, SweepError, SweepResult};
pub use study::{Figure, FigureOutput, Series, Study, StudyOutput, run_study};
pub use sweep::{MAX_POINTS, QSweep};
