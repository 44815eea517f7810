// Age boundary behaviour of the cache sweep

use mac_maint::core::cleaner::{self, cutoff};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

const DAY: u64 = 24 * 60 * 60;

fn now() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_750_000_000)
}

fn file_aged(dir: &Path, name: &str, age: Duration) {
    let path = dir.join(name);
    fs::write(&path, b"cache").unwrap();
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(now() - age)
        .unwrap();
}

#[test]
fn test_younger_entries_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    for age in [0, 1, 15, 29] {
        file_aged(temp_dir.path(), &format!("age{}", age), Duration::from_secs(age * DAY));
    }

    let report = cleaner::sweep_at(temp_dir.path(), 30, now());

    assert_eq!(report.scanned_entries, 4);
    assert!(report.removed_entries.is_empty());
    assert!(report.failures.is_empty());
    for age in [0, 1, 15, 29] {
        assert!(temp_dir.path().join(format!("age{}", age)).exists());
    }
}

#[test]
fn test_older_entries_are_removed() {
    let temp_dir = TempDir::new().unwrap();
    for age in [31, 45, 365] {
        file_aged(temp_dir.path(), &format!("age{}", age), Duration::from_secs(age * DAY));
    }
    file_aged(temp_dir.path(), "fresh", Duration::from_secs(DAY));

    let mut report = cleaner::sweep_at(temp_dir.path(), 30, now());
    report.removed_entries.sort();

    assert_eq!(report.scanned_entries, 4);
    assert_eq!(report.removed_entries, vec!["age31", "age365", "age45"]);
    for age in [31, 45, 365] {
        assert!(!temp_dir.path().join(format!("age{}", age)).exists());
    }
    assert!(temp_dir.path().join("fresh").exists());
}

#[test]
fn test_entry_exactly_at_cutoff_is_retained() {
    let temp_dir = TempDir::new().unwrap();
    file_aged(temp_dir.path(), "boundary", Duration::from_secs(30 * DAY));

    assert_eq!(
        fs::metadata(temp_dir.path().join("boundary"))
            .unwrap()
            .modified()
            .unwrap(),
        cutoff(now(), 30)
    );

    let report = cleaner::sweep_at(temp_dir.path(), 30, now());

    assert!(report.removed_entries.is_empty());
    assert!(temp_dir.path().join("boundary").exists());
}

#[test]
fn test_report_records_size_before_sweep() {
    let temp_dir = TempDir::new().unwrap();
    file_aged(temp_dir.path(), "old", Duration::from_secs(60 * DAY));
    file_aged(temp_dir.path(), "new", Duration::from_secs(DAY));

    let report = cleaner::sweep_at(temp_dir.path(), 30, now());

    assert_eq!(report.total_bytes_before_sweep, 10);
    assert_eq!(report.removed_entries, vec!["old"]);
    assert_eq!(cleaner::directory_size(temp_dir.path()), Some(5));
}
