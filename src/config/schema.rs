//! YAML schema for the plot specification.

use serde::{Deserialize, Serialize};

/// How deviation-from-FullSim heatmap cells are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// `1 - r_xy(sample) / r_xy(FullSim)`
    #[default]
    Divide,
    /// `|r_xy(sample) - r_xy(FullSim)|`
    Subtract,
}

/// One regression variable to histogram and compare across samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Short name, used in file stems
    pub name: String,
    /// Branch template containing the `CLASS` placeholder
    pub branch: String,
    /// Axis title
    pub title: String,
    /// Binning list: `[bins, lo, hi]`, or more than three ascending edges
    pub bins: Vec<f64>,
    /// Half-width of the ratio panel's y axis around unity
    #[serde(default = "default_ratio_range")]
    pub ratio_range: f64,
}

fn default_ratio_range() -> f64 {
    0.5
}

/// One variable entering the correlation-factor heatmaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationVariableSpec {
    /// Axis label in the heatmap
    pub name: String,
    /// Branch template containing the `CLASS` placeholder
    pub branch: String,
}

/// Options for the correlation-factor heatmaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationOptions {
    /// Deviation mode for the second heatmap row
    #[serde(default)]
    pub diff: DiffMode,
    /// Decimal digits cell values are rounded to
    #[serde(default = "default_ndigits")]
    pub ndigits: usize,
    /// Cells with |value| above this get white value text
    #[serde(default = "default_white_threshold")]
    pub white_threshold: f64,
    /// Compute only pairs above the diagonal
    #[serde(default = "default_true")]
    pub only_upper_half: bool,
}

fn default_ndigits() -> usize {
    2
}

fn default_white_threshold() -> f64 {
    0.8
}

fn default_true() -> bool {
    true
}

impl Default for CorrelationOptions {
    fn default() -> Self {
        Self {
            diff: DiffMode::default(),
            ndigits: default_ndigits(),
            white_threshold: default_white_threshold(),
            only_upper_half: true,
        }
    }
}

/// Complete plot specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSpec {
    /// Variables for the 1D regression comparisons
    pub variables: Vec<VariableSpec>,

    /// Variables for the correlation-factor heatmaps
    #[serde(default)]
    pub correlation_variables: Vec<CorrelationVariableSpec>,

    /// Loss highlighted as primary when the log does not designate one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_loss: Option<String>,

    /// Normalize 1D distributions to unit integral
    #[serde(default = "default_true")]
    pub normalize: bool,

    /// Correlation heatmap options
    #[serde(default)]
    pub correlation: CorrelationOptions,
}
