//! Plot generation
//!
//! Three plot families, coordinated by [`PlotterManager`]:
//!
//! - [`LearningCurvePlotter`] — per-epoch averaged loss curves
//! - [`Regression1dPlotter`] — per-variable sample comparisons with ratio panels
//! - [`CorrelationPlotter`] — correlation-factor heatmaps
//!
//! The manager creates `<output>/plots/`, runs the families, and records the
//! written files in `plots/manifest.json`.
//!
//! # Example
//!
//! ```no_run
//! use refinar::config::load_spec;
//! use refinar::dataset::JetDataset;
//! use refinar::loss::LossLog;
//! use refinar::plot::PlotterManager;
//!
//! # fn main() -> refinar::Result<()> {
//! let spec = load_spec("plots.yaml")?;
//! let dataset = JetDataset::from_json_file("snapshot.json")?;
//! let loss_log = LossLog::from_json_file("losslog.json")?;
//!
//! let manager = PlotterManager::new(spec, "out".as_ref(), "training-01")?;
//! let report = manager.plot_all(&dataset, Some(&loss_log))?;
//! println!("{} plots generated", report.files.len());
//! # Ok(())
//! # }
//! ```

mod correlation;
mod learning_curves;
mod regression_1d;
mod style;

pub use correlation::CorrelationPlotter;
pub use learning_curves::LearningCurvePlotter;
pub use regression_1d::Regression1dPlotter;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PlotSpec;
use crate::dataset::JetDataset;
use crate::error::{Error, Result};
use crate::loss::LossLog;

/// Sidecar record of one plot-generation invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotManifest {
    /// Identifier of the training run the plots belong to
    pub training_id: String,
    /// When the plots were generated
    pub generated_at: DateTime<Utc>,
    /// File names written into the plot folder
    pub files: Vec<String>,
}

/// Result of a full plot-generation invocation.
#[derive(Debug, Clone)]
pub struct PlotReport {
    /// All written plot files
    pub files: Vec<PathBuf>,
    /// Path of the written manifest
    pub manifest: PathBuf,
}

/// Coordinates the three plot families over one output folder.
pub struct PlotterManager {
    spec: PlotSpec,
    plot_dir: PathBuf,
    training_id: String,
}

impl PlotterManager {
    /// Create the manager and its `<output>/plots/` folder.
    pub fn new(spec: PlotSpec, output_path: &Path, training_id: impl Into<String>) -> Result<Self> {
        let plot_dir = output_path.join("plots");
        fs::create_dir_all(&plot_dir)?;
        Ok(Self {
            spec,
            plot_dir,
            training_id: training_id.into(),
        })
    }

    /// The folder plot files are written into.
    #[must_use]
    pub fn plot_dir(&self) -> &Path {
        &self.plot_dir
    }

    /// Generate every plot family and write the manifest.
    ///
    /// Learning curves are skipped when no loss log is supplied.
    pub fn plot_all(&self, dataset: &JetDataset, loss_log: Option<&LossLog>) -> Result<PlotReport> {
        let mut files = self.plot_regression_1d(dataset)?;
        files.extend(self.plot_correlation_factors(dataset)?);
        if let Some(log) = loss_log {
            files.extend(self.plot_learning_curves(log)?);
        }
        let manifest = self.write_manifest(&files)?;
        Ok(PlotReport { files, manifest })
    }

    /// Generate only the learning curves.
    pub fn plot_learning_curves(&self, log: &LossLog) -> Result<Vec<PathBuf>> {
        LearningCurvePlotter::new(&self.spec, &self.plot_dir).create_plots(log)
    }

    /// Generate only the 1D regression comparisons.
    pub fn plot_regression_1d(&self, dataset: &JetDataset) -> Result<Vec<PathBuf>> {
        Regression1dPlotter::new(&self.spec, &self.plot_dir).create_plots(dataset)
    }

    /// Generate only the correlation-factor heatmaps.
    pub fn plot_correlation_factors(&self, dataset: &JetDataset) -> Result<Vec<PathBuf>> {
        CorrelationPlotter::new(&self.spec, &self.plot_dir).create_plots(dataset)
    }

    /// Write `manifest.json` listing the given files.
    pub fn write_manifest(&self, files: &[PathBuf]) -> Result<PathBuf> {
        let manifest = PlotManifest {
            training_id: self.training_id.clone(),
            generated_at: Utc::now(),
            files: files
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        };
        let path = self.plot_dir.join("manifest.json");
        let content = serde_json::to_string_pretty(&manifest)
            .map_err(|e| Error::Dataset(format!("failed to serialize manifest: {e}")))?;
        fs::write(&path, content)?;
        Ok(path)
    }
}
