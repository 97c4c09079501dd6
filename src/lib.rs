//! Refinar: diagnostic plotting for FastSim refinement training
//!
//! This crate generates the diagnostic plots of a regression task that
//! refines fast-simulation ("FastSim") jets toward detailed-simulation
//! ("FullSim") ground truth:
//!
//! - **Learning curves** — per-epoch averaged train/validation loss for
//!   every tracked loss function
//! - **1D regression comparisons** — per-variable histograms of the
//!   FullSim / FastSim / Refined samples with ratio panels
//! - **Correlation-factor heatmaps** — pairwise Pearson r per sample and
//!   its deviation from FullSim
//!
//! Inputs are pre-computed: a jet dataset snapshot (JSON) and a loss log
//! recorded during training. Outputs are static PNG files plus a JSON
//! manifest.
//!
//! # Example
//!
//! ```
//! use refinar::loss::{epoch_series, LossLog, Split};
//!
//! let mut log = LossLog::new();
//! log.record("mse", Split::Train, 0, 1.0);
//! log.record("mse", Split::Train, 0, 3.0);
//! log.record("mse", Split::Train, 1, 2.0);
//!
//! let series = epoch_series(&log, "mse", Split::Train);
//! assert_eq!(series.epochs, vec![0, 1]);
//! assert_eq!(series.means, vec![2.0, 2.0]);
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod plot;
pub mod samples;

pub use config::{load_spec, PlotSpec};
pub use dataset::{correlation_factor, Binning, Histogram1d, JetDataset, JetRecord, Partition, Selection};
pub use error::{Error, Result};
pub use loss::{all_series, epoch_series, CurveSeries, EpochSeries, LossLog, LossObservation, Split};
pub use plot::{PlotManifest, PlotReport, PlotterManager};
pub use samples::{resolve_branch, SampleClass};
