// Confirmation gate and sizing of multi-directory sweeps

use mac_maint::core::cleaner;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const DAY: u64 = 24 * 60 * 60;

fn stale_file(path: &Path, contents: &[u8]) {
    fs::write(path, contents).unwrap();
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::now() - Duration::from_secs(120 * DAY))
        .unwrap();
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| {
            (
                entry.file_name().to_string_lossy().to_string(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_declined_confirmation_changes_nothing() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    stale_file(&first.path().join("a.cache"), b"aaaa");
    stale_file(&second.path().join("b.cache"), b"bb");

    let before = (snapshot(first.path()), snapshot(second.path()));

    let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let reports = cleaner::sweep_with_confirmation(&paths, 30, |_| false);

    assert!(reports.is_empty());
    assert_eq!(before, (snapshot(first.path()), snapshot(second.path())));
}

#[test]
fn test_accepted_confirmation_sweeps_each_path_in_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    stale_file(&first.path().join("a.cache"), b"aaaa");
    fs::write(first.path().join("recent.cache"), b"keep").unwrap();
    stale_file(&second.path().join("b.cache"), b"bb");

    let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let mut previewed = None;
    let reports = cleaner::sweep_with_confirmation(&paths, 30, |preview| {
        previewed = Some(preview.clone());
        true
    });

    let preview = previewed.expect("confirm must be called");
    assert_eq!(preview.total_bytes, 10);
    assert_eq!(preview.sizes[0], (paths[0].clone(), Some(8)));
    assert_eq!(preview.sizes[1], (paths[1].clone(), Some(2)));

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].path, paths[0]);
    assert_eq!(reports[0].removed_entries, vec!["a.cache"]);
    assert_eq!(reports[1].removed_entries, vec!["b.cache"]);
    assert!(first.path().join("recent.cache").exists());
}

#[test]
fn test_missing_paths_are_previewed_as_absent() {
    let existing = TempDir::new().unwrap();
    fs::write(existing.path().join("x"), vec![0u8; 100]).unwrap();
    let missing: PathBuf = existing.path().join("does-not-exist");

    let preview = cleaner::preview(&[existing.path().to_path_buf(), missing.clone()]);

    assert_eq!(preview.total_bytes, 100);
    assert_eq!(preview.sizes[1], (missing.clone(), None));

    let reports = cleaner::sweep_with_confirmation(&[missing], 30, |_| true);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].scanned_entries, 0);
}

#[test]
fn test_directory_size_is_shallow() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a"), vec![0u8; 100]).unwrap();
    fs::write(temp_dir.path().join("b"), vec![0u8; 250]).unwrap();
    fs::write(temp_dir.path().join("c"), b"").unwrap();
    assert_eq!(cleaner::directory_size(temp_dir.path()), Some(350));

    let nested = TempDir::new().unwrap();
    let sub = nested.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("big"), vec![0u8; 10_000]).unwrap();
    let dir_entry_size = fs::metadata(&sub).unwrap().len();
    assert_eq!(cleaner::directory_size(nested.path()), Some(dir_entry_size));
}
