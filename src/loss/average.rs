//! Epoch averaging: collapse raw observation streams into plot-ready series.

use std::collections::BTreeMap;

use super::{LossLog, Split};

/// One averaged series: epoch numbers and their mean loss values.
///
/// The two sequences are always index-aligned and equal in length, and
/// `epochs` is strictly ascending. Epochs without data are excluded from
/// both sequences rather than represented as NaN or zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochSeries {
    /// Epoch numbers, strictly ascending
    pub epochs: Vec<u32>,
    /// Mean loss per epoch, aligned with `epochs`
    pub means: Vec<f64>,
}

impl EpochSeries {
    /// True when the split had no observations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Number of epochs with data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.epochs.len()
    }
}

/// Train and validation series for one loss function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSeries {
    /// Averaged training series
    pub train: EpochSeries,
    /// Averaged validation series
    pub validation: EpochSeries,
}

/// Average one (loss name, split) observation stream per epoch.
///
/// The input stream may be sparse and out of order; the output is ordered by
/// epoch with duplicates collapsed into one mean. An epoch whose average
/// query answers "no data" is excluded from both output sequences. A split
/// with no observations yields two empty sequences, not an error.
///
/// Pure read-only query: calling it twice on the same log yields identical
/// output.
#[must_use]
pub fn epoch_series(log: &LossLog, name: &str, split: Split) -> EpochSeries {
    let mut distinct: Vec<u32> = log
        .observations(name, split)
        .iter()
        .map(|obs| obs.epoch)
        .collect();
    distinct.sort_unstable();
    distinct.dedup();

    let mut epochs = Vec::with_capacity(distinct.len());
    let mut means = Vec::with_capacity(distinct.len());
    for epoch in distinct {
        if let Some(mean) = log.epoch_average(name, split, epoch) {
            epochs.push(epoch);
            means.push(mean);
        }
    }
    EpochSeries { epochs, means }
}

/// Average every requested loss name for both splits.
///
/// Every requested name appears in the output, even when both of its series
/// are empty. Names are processed independently; no per-name condition can
/// abort processing of the remaining names.
#[must_use]
pub fn all_series(log: &LossLog, names: &[String]) -> BTreeMap<String, CurveSeries> {
    names
        .iter()
        .map(|name| {
            let curve = CurveSeries {
                train: epoch_series(log, name, Split::Train),
                validation: epoch_series(log, name, Split::Validation),
            };
            (name.clone(), curve)
        })
        .collect()
}
