//! Loss log and epoch averaging tests

use super::*;

fn sample_log() -> LossLog {
    let mut log = LossLog::new();
    log.record("mse", Split::Train, 0, 1.0);
    log.record("mse", Split::Train, 0, 3.0);
    log.record("mse", Split::Train, 1, 2.0);
    log
}

#[test]
fn test_epoch_average_mean_of_batches() {
    let log = sample_log();
    assert_eq!(log.epoch_average("mse", Split::Train, 0), Some(2.0));
    assert_eq!(log.epoch_average("mse", Split::Train, 1), Some(2.0));
}

#[test]
fn test_epoch_average_missing_is_none() {
    let log = sample_log();
    assert_eq!(log.epoch_average("mse", Split::Train, 7), None);
    assert_eq!(log.epoch_average("mse", Split::Validation, 0), None);
    assert_eq!(log.epoch_average("unknown", Split::Train, 0), None);
}

#[test]
fn test_epoch_series_spec_example() {
    let log = sample_log();
    let series = epoch_series(&log, "mse", Split::Train);
    assert_eq!(series.epochs, vec![0, 1]);
    assert_eq!(series.means, vec![2.0, 2.0]);
}

#[test]
fn test_epoch_series_validation_only() {
    let mut log = LossLog::new();
    log.record("huber", Split::Validation, 5, 0.4);

    let train = epoch_series(&log, "huber", Split::Train);
    assert!(train.is_empty());
    assert!(train.means.is_empty());

    let val = epoch_series(&log, "huber", Split::Validation);
    assert_eq!(val.epochs, vec![5]);
    assert_eq!(val.means, vec![0.4]);
}

#[test]
fn test_epoch_series_out_of_order_input() {
    let mut log = LossLog::new();
    log.record("mse", Split::Train, 9, 0.9);
    log.record("mse", Split::Train, 2, 0.2);
    log.record("mse", Split::Train, 9, 0.9);
    log.record("mse", Split::Train, 0, 0.0);

    let series = epoch_series(&log, "mse", Split::Train);
    assert_eq!(series.epochs, vec![0, 2, 9]);
    assert_eq!(series.means, vec![0.0, 0.2, 0.9]);
}

#[test]
fn test_epoch_series_strictly_ascending_no_duplicates() {
    let mut log = LossLog::new();
    for epoch in [4u32, 1, 4, 1, 3, 3, 3] {
        log.record("mse", Split::Train, epoch, f64::from(epoch));
    }
    let series = epoch_series(&log, "mse", Split::Train);
    assert!(series.epochs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(series.epochs.len(), series.means.len());
}

#[test]
fn test_epoch_series_idempotent() {
    let log = sample_log();
    let first = epoch_series(&log, "mse", Split::Train);
    let second = epoch_series(&log, "mse", Split::Train);
    assert_eq!(first, second);
}

#[test]
fn test_all_series_full_coverage() {
    let mut log = LossLog::new();
    log.record("mse", Split::Train, 0, 1.0);

    let names = vec!["mse".to_string(), "mmd".to_string()];
    let series = all_series(&log, &names);

    assert_eq!(series.len(), 2);
    assert!(!series["mse"].train.is_empty());
    assert!(series["mmd"].train.is_empty());
    assert!(series["mmd"].validation.is_empty());
}

#[test]
fn test_names_sorted() {
    let mut log = LossLog::new();
    log.record("mmd", Split::Train, 0, 1.0);
    log.record("huber", Split::Train, 0, 1.0);
    log.record("mse", Split::Train, 0, 1.0);
    assert_eq!(log.names(), vec!["huber", "mmd", "mse"]);
}

#[test]
fn test_primary_loss() {
    let mut log = sample_log();
    assert_eq!(log.primary_loss(), None);
    log.set_primary("mse");
    assert_eq!(log.primary_loss(), Some("mse"));
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("losslog.json");

    let mut log = sample_log();
    log.record("mse", Split::Validation, 0, 1.5);
    log.set_primary("mse");
    log.to_json_file(&path).unwrap();

    let loaded = LossLog::from_json_file(&path).unwrap();
    assert_eq!(loaded.primary_loss(), Some("mse"));
    assert_eq!(loaded.observations("mse", Split::Train).len(), 3);
    assert_eq!(
        loaded.epoch_average("mse", Split::Validation, 0),
        Some(1.5)
    );
}

#[test]
fn test_from_json_file_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(LossLog::from_json_file(&path).is_err());
}
