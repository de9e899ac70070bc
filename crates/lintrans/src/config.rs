use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::math::column_vector;
use crate::transform::{l, t, t_h_scaling, Transformation};

/// The transformations available by name on the command line and in config files.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransformationKind {
    /// `T`, coordinate by coordinate (2D -> 3D).
    Explicit,
    /// `L`, the matrix form of `T` (2D -> 3D).
    Matrix,
    /// `T_hScaling`, horizontal dilation by 2 (2D -> 2D).
    #[default]
    HScaling,
}

impl TransformationKind {
    pub const ALL: [TransformationKind; 3] = [
        TransformationKind::Explicit,
        TransformationKind::Matrix,
        TransformationKind::HScaling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformationKind::Explicit => "explicit",
            TransformationKind::Matrix => "matrix",
            TransformationKind::HScaling => "h-scaling",
        }
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "explicit" | "t" => Ok(TransformationKind::Explicit),
            "matrix" | "l" => Ok(TransformationKind::Matrix),
            "h-scaling" | "h_scaling" | "hscaling" | "t_hscaling" => {
                Ok(TransformationKind::HScaling)
            }
            _ => Err(format!("Unknown transformation: {}", s)),
        }
    }
}

impl Transformation for TransformationKind {
    fn apply(&self, input: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
        match self {
            TransformationKind::Explicit => t(input),
            TransformationKind::Matrix => l(input),
            TransformationKind::HScaling => t_h_scaling(input),
        }
    }

    fn name(&self) -> &str {
        match self {
            TransformationKind::Explicit => "T",
            TransformationKind::Matrix => "L",
            TransformationKind::HScaling => "T_hScaling",
        }
    }
}

/// Appearance of the transformation plot.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    /// Both axes span `[-axis_limit, axis_limit]`.
    pub axis_limit: f64,
    pub color_original: String,
    pub color_transformed: String,
    pub width: usize,
    pub height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Linear transformation of the basis vectors".to_string(),
            axis_limit: 5.0,
            color_original: "#129cab".to_string(),
            color_transformed: "#cc8933".to_string(),
            width: 700,
            height: 700,
        }
    }
}

/// Inputs and outputs of the walkthrough run by `lintrans demo`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Vector fed to `T` and `L`.
    pub vector: [f64; 2],
    pub e1: [f64; 2],
    pub e2: [f64; 2],
    /// Transformation applied to the stacked basis vectors and plotted.
    pub transformation: TransformationKind,
    pub plot: PlotConfig,
    pub output_file: Option<String>,
    pub report_file: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vector: [3.0, 5.0],
            e1: [1.0, 0.0],
            e2: [0.0, 1.0],
            transformation: TransformationKind::HScaling,
            plot: PlotConfig::default(),
            output_file: Some("lintrans_transformation.html".to_string()),
            report_file: None,
        }
    }
}

impl DemoConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: DemoConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
        Ok(config)
    }

    pub fn vector(&self) -> Array2<f64> {
        column_vector(&self.vector)
    }

    pub fn basis(&self) -> (Array2<f64>, Array2<f64>) {
        (column_vector(&self.e1), column_vector(&self.e2))
    }
}
