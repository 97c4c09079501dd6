//! The loss observation log recorded during training.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which partition of the training data an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Training batches
    Train,
    /// Validation batches
    Validation,
}

/// A single per-batch loss value, tagged by epoch.
///
/// Immutable once recorded; owned by the [`LossLog`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossObservation {
    /// Epoch the batch belonged to
    pub epoch: u32,
    /// Scalar loss value
    pub value: f64,
}

/// Train and validation observation streams for one loss function.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SplitObservations {
    #[serde(default)]
    train: Vec<LossObservation>,
    #[serde(default)]
    validation: Vec<LossObservation>,
}

impl SplitObservations {
    fn for_split(&self, split: Split) -> &[LossObservation] {
        match split {
            Split::Train => &self.train,
            Split::Validation => &self.validation,
        }
    }

    fn for_split_mut(&mut self, split: Split) -> &mut Vec<LossObservation> {
        match split {
            Split::Train => &mut self.train,
            Split::Validation => &mut self.validation,
        }
    }
}

/// Per-batch loss observations for every tracked loss function.
///
/// Observations accumulate during training and are read back by the
/// learning-curve plotter. The log never mutates or drops a recorded
/// observation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LossLog {
    /// Designated primary loss, highlighted in plots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary: Option<String>,
    /// Observation streams keyed by loss name
    #[serde(default)]
    losses: BTreeMap<String, SplitObservations>,
}

impl LossLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation.
    pub fn record(&mut self, name: impl Into<String>, split: Split, epoch: u32, value: f64) {
        self.losses
            .entry(name.into())
            .or_default()
            .for_split_mut(split)
            .push(LossObservation { epoch, value });
    }

    /// Designate the primary loss.
    pub fn set_primary(&mut self, name: impl Into<String>) {
        self.primary = Some(name.into());
    }

    /// The primary loss name, if one was designated.
    #[must_use]
    pub fn primary_loss(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// All tracked loss names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.losses.keys().cloned().collect()
    }

    /// Observations for one (loss name, split) pair.
    ///
    /// Unknown names yield an empty slice rather than an error.
    #[must_use]
    pub fn observations(&self, name: &str, split: Split) -> &[LossObservation] {
        self.losses
            .get(name)
            .map_or(&[], |obs| obs.for_split(split))
    }

    /// Mean loss over all observations matching (name, split, epoch).
    ///
    /// Returns `None` when no observation matches the triple; callers
    /// exclude such epochs instead of treating them as an error.
    #[must_use]
    pub fn epoch_average(&self, name: &str, split: Split, epoch: u32) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for obs in self.observations(name, split) {
            if obs.epoch == epoch {
                sum += obs.value;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Load a log from a JSON file written by the training process.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Dataset(format!(
                "failed to read loss log {}: {e}",
                path.as_ref().display()
            ))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Dataset(format!("failed to parse loss log: {e}")))
    }

    /// Write the log to a JSON file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Dataset(format!("failed to serialize loss log: {e}")))?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
