//! Studies: named groups of curves, configured in YAML.

use crate::curve::{Curve, sweep_curve};
use crate::error::{StudyError, StudyResult};
use crate::sweep::QSweep;
use lw_core::numeric::Real;
use lw_forces::{BearingParams, ForceConfig, ForceKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `(phi, delta)` geometry to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub phi: Real,
    pub delta: Real,
}

/// One force plotted against Q for several geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub kind: ForceKind,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub name: String,
    #[serde(default)]
    pub q: QSweep,
    #[serde(default)]
    pub config: ForceConfig,
    #[serde(default)]
    pub figures: Vec<Figure>,
}

impl Study {
    /// The three published figures: Dp and F0 for delta in {0, 0.44}, and Fi
    /// for delta in {0.32, 0.44}, each at phi in {0.2, 0.4}.
    pub fn paper() -> Self {
        let grid = |deltas: [Real; 2]| -> Vec<Series> {
            [0.2, 0.4]
                .iter()
                .flat_map(|&phi| deltas.iter().map(move |&delta| Series { phi, delta }))
                .collect()
        };
        Self {
            name: "wavy bearing friction".to_string(),
            q: QSweep::default(),
            config: ForceConfig::default(),
            figures: vec![
                Figure {
                    kind: ForceKind::ExternalFriction,
                    series: grid([0.0, 0.44]),
                },
                Figure {
                    kind: ForceKind::InternalFriction,
                    series: grid([0.0, 0.44]),
                },
                Figure {
                    kind: ForceKind::PressureLoss,
                    series: grid([0.32, 0.44]),
                },
            ],
        }
    }

    pub fn from_yaml_str(content: &str) -> StudyResult<Self> {
        let study: Study = serde_yaml::from_str(content)?;
        study.validate()?;
        Ok(study)
    }

    pub fn to_yaml_string(&self) -> StudyResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load(path: &Path) -> StudyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn save(&self, path: &Path) -> StudyResult<()> {
        self.validate()?;
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Check the sweep, the quadrature settings and every series geometry
    /// without evaluating anything.
    pub fn validate(&self) -> StudyResult<()> {
        if self.figures.is_empty() {
            return Err(StudyError::Validation {
                what: "study has no figures".to_string(),
            });
        }
        self.q
            .validate()
            .map_err(|source| StudyError::Validation {
                what: source.to_string(),
            })?;
        self.config
            .quad
            .validate()
            .map_err(|source| StudyError::Validation {
                what: source.to_string(),
            })?;
        for (figure, fig) in self.figures.iter().enumerate() {
            if fig.series.is_empty() {
                return Err(StudyError::Validation {
                    what: format!("figure {figure} ({}) has no series", fig.kind),
                });
            }
            for series in &fig.series {
                BearingParams::new(series.phi, series.delta).map_err(|e| StudyError::Force {
                    figure,
                    source: e.into(),
                })?;
            }
        }
        Ok(())
    }
}

/// Curves of one figure, in series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureOutput {
    pub kind: ForceKind,
    pub curves: Vec<Curve>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyOutput {
    pub name: String,
    pub figures: Vec<FigureOutput>,
}

impl StudyOutput {
    /// Pretty JSON; non-finite force values are written as strings.
    pub fn to_json(&self) -> StudyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> StudyResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save_json(&self, path: &Path) -> StudyResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Evaluate every curve of `study`. Stops at the first failing figure.
pub fn run_study(study: &Study) -> StudyResult<StudyOutput> {
    study.validate()?;
    tracing::info!(study = %study.name, figures = study.figures.len(), "running study");

    let mut figures = Vec::with_capacity(study.figures.len());
    for (index, fig) in study.figures.iter().enumerate() {
        let mut curves = Vec::with_capacity(fig.series.len());
        for series in &fig.series {
            let params = BearingParams::new(series.phi, series.delta).map_err(|e| {
                StudyError::Force {
                    figure: index,
                    source: e.into(),
                }
            })?;
            let curve = sweep_curve(fig.kind, &params, &study.q, &study.config).map_err(
                |source| StudyError::Sweep {
                    figure: index,
                    source,
                },
            )?;
            curves.push(curve);
        }
        tracing::info!(figure = index, kind = %fig.kind, curves = curves.len(), "figure done");
        figures.push(FigureOutput {
            kind: fig.kind,
            curves,
        });
    }

    Ok(StudyOutput {
        name: study.name.clone(),
        figures,
    })
}
