//! Jet dataset snapshot
//!
//! The regression plots read a JSON snapshot of per-jet branch values
//! produced by the training pipeline. Each jet carries a
//! train/validation/test partition tag (wire values 0/1/2) and a map of
//! branch name to value; branch names follow the `<quantity>_<suffix>`
//! convention with suffixes `FullSim`, `FastSim`, and `Refined`.

mod hist;


pub use hist::{correlation_factor, Binning, Histogram1d};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-jet train/validation/test tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Partition {
    /// Jet was in the refinement network's training set
    Train,
    /// Jet was in the validation set
    Validation,
    /// Jet was held out entirely
    Test,
}

impl TryFrom<u8> for Partition {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Train),
            1 => Ok(Self::Validation),
            2 => Ok(Self::Test),
            other => Err(format!("invalid partition tag {other} (expected 0, 1, or 2)")),
        }
    }
}

impl From<Partition> for u8 {
    fn from(value: Partition) -> Self {
        match value {
            Partition::Train => 0,
            Partition::Validation => 1,
            Partition::Test => 2,
        }
    }
}

/// Which jets a sample draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every jet
    All,
    /// Training and validation jets
    TrainVal,
    /// Held-out test jets
    Test,
}

impl Selection {
    /// Whether a jet with the given partition passes this selection.
    #[must_use]
    pub fn accepts(&self, partition: Partition) -> bool {
        match self {
            Self::All => true,
            Self::TrainVal => matches!(partition, Partition::Train | Partition::Validation),
            Self::Test => partition == Partition::Test,
        }
    }
}

/// One jet: partition tag plus branch values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JetRecord {
    /// Partition tag (wire field `isTrainValTest`, values 0/1/2)
    #[serde(rename = "isTrainValTest")]
    pub partition: Partition,
    /// Branch name → value
    pub values: HashMap<String, f64>,
}

impl JetRecord {
    /// Create a jet from a partition tag and `(branch, value)` pairs.
    pub fn new<I, S>(partition: Partition, values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            partition,
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// In-memory jet dataset, loaded once per plot-generation invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JetDataset {
    jets: Vec<JetRecord>,
}

impl JetDataset {
    /// Wrap a jet collection.
    #[must_use]
    pub fn from_jets(jets: Vec<JetRecord>) -> Self {
        Self { jets }
    }

    /// Load a snapshot from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Dataset(format!(
                "failed to read dataset snapshot {}: {e}",
                path.as_ref().display()
            ))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Dataset(format!("failed to parse dataset snapshot: {e}")))
    }

    /// Write the snapshot to a JSON file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string(self)
            .map_err(|e| Error::Dataset(format!("failed to serialize dataset snapshot: {e}")))?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Number of jets in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jets.len()
    }

    /// True when the snapshot holds no jets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jets.is_empty()
    }

    /// Values of one branch for jets passing the selection.
    ///
    /// Jets missing the branch are skipped.
    #[must_use]
    pub fn column(&self, branch: &str, selection: Selection) -> Vec<f64> {
        self.jets
            .iter()
            .filter(|jet| selection.accepts(jet.partition))
            .filter_map(|jet| jet.values.get(branch).copied())
            .collect()
    }

    /// Paired values of two branches for jets passing the selection.
    ///
    /// A jet contributes only when it carries both branches, so the two
    /// output vectors are always equal in length and index-aligned.
    #[must_use]
    pub fn column_pair(
        &self,
        branch_x: &str,
        branch_y: &str,
        selection: Selection,
    ) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for jet in self.jets.iter().filter(|jet| selection.accepts(jet.partition)) {
            if let (Some(&x), Some(&y)) = (jet.values.get(branch_x), jet.values.get(branch_y)) {
                xs.push(x);
                ys.push(y);
            }
        }
        (xs, ys)
    }

    /// Fill a histogram with one branch under a selection.
    #[must_use]
    pub fn fill_histogram(
        &self,
        branch: &str,
        selection: Selection,
        binning: &Binning,
    ) -> Histogram1d {
        let mut hist = Histogram1d::new(binning);
        for value in self.column(branch, selection) {
            hist.fill(value);
        }
        hist
    }
}
