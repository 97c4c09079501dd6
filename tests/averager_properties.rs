//! Property-based tests for epoch averaging

use proptest::prelude::*;

use refinar::loss::{all_series, epoch_series, LossLog, Split};

fn observation_strategy() -> impl Strategy<Value = Vec<(u32, f64)>> {
    prop::collection::vec((0u32..50, -1e3f64..1e3), 0..200)
}

fn split_strategy() -> impl Strategy<Value = Split> {
    prop_oneof![Just(Split::Train), Just(Split::Validation)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_series_sequences_aligned(
        observations in observation_strategy(),
        split in split_strategy()
    ) {
        let mut log = LossLog::new();
        for (epoch, value) in &observations {
            log.record("loss", split, *epoch, *value);
        }

        let series = epoch_series(&log, "loss", split);
        prop_assert_eq!(series.epochs.len(), series.means.len());
    }

    #[test]
    fn prop_epochs_strictly_ascending(
        observations in observation_strategy(),
        split in split_strategy()
    ) {
        let mut log = LossLog::new();
        for (epoch, value) in &observations {
            log.record("loss", split, *epoch, *value);
        }

        let series = epoch_series(&log, "loss", split);
        prop_assert!(series.epochs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_series_covers_exactly_observed_epochs(
        observations in observation_strategy(),
        split in split_strategy()
    ) {
        let mut log = LossLog::new();
        let mut expected: Vec<u32> = observations.iter().map(|(e, _)| *e).collect();
        expected.sort_unstable();
        expected.dedup();

        for (epoch, value) in &observations {
            log.record("loss", split, *epoch, *value);
        }

        let series = epoch_series(&log, "loss", split);
        prop_assert_eq!(series.epochs, expected);
    }

    #[test]
    fn prop_other_split_stays_empty(observations in observation_strategy()) {
        let mut log = LossLog::new();
        for (epoch, value) in &observations {
            log.record("loss", Split::Train, *epoch, *value);
        }

        let series = epoch_series(&log, "loss", Split::Validation);
        prop_assert!(series.epochs.is_empty());
        prop_assert!(series.means.is_empty());
    }

    #[test]
    fn prop_idempotent(
        observations in observation_strategy(),
        split in split_strategy()
    ) {
        let mut log = LossLog::new();
        for (epoch, value) in &observations {
            log.record("loss", split, *epoch, *value);
        }

        prop_assert_eq!(
            epoch_series(&log, "loss", split),
            epoch_series(&log, "loss", split)
        );
    }

    #[test]
    fn prop_mean_within_observed_bounds(
        observations in prop::collection::vec((0u32..10, -1e3f64..1e3), 1..100)
    ) {
        let mut log = LossLog::new();
        for (epoch, value) in &observations {
            log.record("loss", Split::Train, *epoch, *value);
        }

        let series = epoch_series(&log, "loss", Split::Train);
        for (i, epoch) in series.epochs.iter().enumerate() {
            let values: Vec<f64> = observations
                .iter()
                .filter(|(e, _)| e == epoch)
                .map(|(_, v)| *v)
                .collect();
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            // mean of a non-empty set stays within its bounds
            prop_assert!(series.means[i] >= lo - 1e-9 && series.means[i] <= hi + 1e-9);
        }
    }

    #[test]
    fn prop_all_series_one_entry_per_name(
        observations in observation_strategy(),
        extra_names in prop::collection::vec("[a-z]{1,8}", 0..5)
    ) {
        let mut log = LossLog::new();
        for (epoch, value) in &observations {
            log.record("tracked", Split::Train, *epoch, *value);
        }

        let mut names: Vec<String> = extra_names;
        names.push("tracked".to_string());
        names.sort();
        names.dedup();

        let series = all_series(&log, &names);
        prop_assert_eq!(series.len(), names.len());
        for name in &names {
            prop_assert!(series.contains_key(name));
        }
    }
}
