// Restore semantics for iCloud Drive's Recently Deleted mirror

use mac_maint::core::icloud::{self, RestoreOutcome, SortOption};
use std::cell::Cell;
use std::fs;
use tempfile::TempDir;

struct Drive {
    _root: TempDir,
    trash: std::path::PathBuf,
    drive: std::path::PathBuf,
}

fn drive() -> Drive {
    let root = TempDir::new().unwrap();
    let drive = root.path().join("com~apple~CloudDocs");
    let trash = drive.join(".Trash");
    fs::create_dir_all(&trash).unwrap();
    Drive {
        _root: root,
        trash,
        drive,
    }
}

#[test]
fn test_restore_moves_file_back() {
    let d = drive();
    fs::write(d.trash.join("thesis.docx"), b"draft").unwrap();

    let outcome = icloud::restore_file(&d.trash, &d.drive, "thesis.docx", || {
        panic!("no overwrite prompt expected")
    })
    .unwrap();

    assert_eq!(outcome, RestoreOutcome::Restored);
    assert!(!d.trash.join("thesis.docx").exists());
    assert_eq!(fs::read(d.drive.join("thesis.docx")).unwrap(), b"draft");
}

#[test]
fn test_declined_overwrite_leaves_both_files() {
    let d = drive();
    fs::write(d.trash.join("notes.txt"), b"deleted version").unwrap();
    fs::write(d.drive.join("notes.txt"), b"current version").unwrap();

    let asked = Cell::new(false);
    let outcome = icloud::restore_file(&d.trash, &d.drive, "notes.txt", || {
        asked.set(true);
        false
    })
    .unwrap();

    assert!(asked.get());
    assert_eq!(outcome, RestoreOutcome::Cancelled);
    assert_eq!(fs::read(d.trash.join("notes.txt")).unwrap(), b"deleted version");
    assert_eq!(fs::read(d.drive.join("notes.txt")).unwrap(), b"current version");
}

#[test]
fn test_bulk_restore_without_matches_does_not_prompt() {
    let d = drive();
    fs::write(d.trash.join("photo.jpg"), b"img").unwrap();

    let tally = icloud::restore_all(&d.trash, &d.drive, Some("invoice"), |_| {
        panic!("no confirmation expected when nothing matches")
    })
    .unwrap();

    assert_eq!(tally.matched, 0);
    assert!(tally.restored.is_empty());
    assert!(tally.failed.is_empty());
    assert!(!tally.cancelled);
    assert!(d.trash.join("photo.jpg").exists());
}

#[test]
fn test_bulk_restore_skips_existing_destinations() {
    let d = drive();
    fs::write(d.trash.join("Report-2023.pdf"), b"old").unwrap();
    fs::write(d.trash.join("report-2024.pdf"), b"new").unwrap();
    fs::write(d.trash.join("holiday.png"), b"img").unwrap();
    fs::write(d.drive.join("Report-2023.pdf"), b"already here").unwrap();

    let mut prompted_with = None;
    let tally = icloud::restore_all(&d.trash, &d.drive, Some("REPORT"), |count| {
        prompted_with = Some(count);
        true
    })
    .unwrap();

    assert_eq!(prompted_with, Some(2));
    assert_eq!(tally.matched, 2);
    assert_eq!(tally.restored, vec!["report-2024.pdf"]);
    assert_eq!(tally.failed.len(), 1);
    assert_eq!(tally.failed[0].0, "Report-2023.pdf");

    assert_eq!(fs::read(d.drive.join("Report-2023.pdf")).unwrap(), b"already here");
    assert!(d.trash.join("Report-2023.pdf").exists());
    assert!(d.trash.join("holiday.png").exists());
}

#[test]
fn test_bulk_restore_declined() {
    let d = drive();
    fs::write(d.trash.join("a.txt"), b"a").unwrap();

    let tally = icloud::restore_all(&d.trash, &d.drive, None, |_| false).unwrap();

    assert!(tally.cancelled);
    assert_eq!(tally.matched, 1);
    assert!(d.trash.join("a.txt").exists());
    assert!(!d.drive.join("a.txt").exists());
}

#[test]
fn test_list_sorted_by_name() {
    let d = drive();
    for name in ["zeta.txt", "Alpha.txt", "beta.txt"] {
        fs::write(d.trash.join(name), b"x").unwrap();
    }

    let entries = icloud::list_deleted(&d.trash, SortOption::Name, None).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha.txt", "beta.txt", "zeta.txt"]);
}

#[test]
fn test_list_missing_trash_is_an_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nope");
    assert!(icloud::list_deleted(&missing, SortOption::DateDeleted, None).is_err());
}
