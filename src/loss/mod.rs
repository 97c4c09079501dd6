//! Loss observation log and per-epoch averaging
//!
//! - [`LossLog`] — per-batch loss observations keyed by loss name and split,
//!   recorded during training and handed to the plotting layer
//! - [`epoch_series`] / [`all_series`] — collapse the raw observation stream
//!   into one averaged value per epoch per split
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

mod average;
mod log;

#[cfg(test)]
mod tests;

pub use average::{all_series, epoch_series, CurveSeries, EpochSeries};
pub use log::{LossLog, LossObservation, Split};
