//! Age-based cache cleaner
//!
//! Scans the direct children of cache directories and deletes the ones whose
//! modification time is older than a cutoff. Scans are shallow: only the
//! first level of each directory is listed, subdirectories are sized by
//! their own metadata and removed as a whole.
//!
//! # Examples
//!
//! ```no_run
//! use mac_maint::core::cleaner;
//!
//! let paths = vec![std::path::PathBuf::from("/Users/me/Library/Caches")];
//! let reports = cleaner::sweep_with_confirmation(&paths, 30, |preview| {
//!     println!("{} bytes in caches", preview.total_bytes);
//!     true
//! });
//! for report in reports {
//!     println!("removed {} entries", report.removed_entries.len());
//! }
//! ```

use crate::error::Result;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Reason recorded for entries whose metadata cannot be read
pub const UNREADABLE: &str = "unreadable";

/// An entry that could not be examined or removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of sweeping one directory
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub path: PathBuf,
    pub scanned_entries: usize,
    pub removed_entries: Vec<String>,
    pub total_bytes_before_sweep: u64,
    pub failures: Vec<SweepFailure>,
}

/// Sizes shown to the user before anything is deleted
#[derive(Debug, Clone, Default)]
pub struct SweepPreview {
    /// Each requested path with its shallow size, None if it does not exist
    pub sizes: Vec<(PathBuf, Option<u64>)>,
    pub total_bytes: u64,
}

/// Sum of the sizes of the direct children of `path`
///
/// Returns None if the path does not exist or cannot be listed. Children
/// whose metadata cannot be read count as 0 bytes.
pub fn directory_size(path: &Path) -> Option<u64> {
    let entries = fs::read_dir(path).ok()?;

    Some(
        entries
            .map(|entry| {
                entry
                    .and_then(|entry| entry.metadata())
                    .map(|metadata| metadata.len())
                    .unwrap_or(0)
            })
            .sum(),
    )
}

/// Instant before which entries are considered stale
///
/// Ages reaching past what `SystemTime` can represent clamp to the epoch.
pub fn cutoff(now: SystemTime, max_age_days: u32) -> SystemTime {
    let age = Duration::from_secs(u64::from(max_age_days) * SECONDS_PER_DAY);
    now.checked_sub(age).unwrap_or(UNIX_EPOCH)
}

/// Delete the direct children of `path` modified more than `max_age_days` ago
pub fn sweep(path: &Path, max_age_days: u32) -> SweepReport {
    sweep_at(path, max_age_days, SystemTime::now())
}

/// Same as [`sweep`] with an explicit notion of "now"
///
/// An entry modified exactly at the cutoff is kept. A failure on one entry
/// is recorded and the remaining entries are still processed.
pub fn sweep_at(path: &Path, max_age_days: u32, now: SystemTime) -> SweepReport {
    let mut report = SweepReport {
        path: path.to_path_buf(),
        ..Default::default()
    };

    let Ok(entries) = fs::read_dir(path) else {
        log::debug!("Skipping sweep of {}: cannot be listed", path.display());
        return report;
    };

    report.total_bytes_before_sweep = directory_size(path).unwrap_or(0);

    let entries = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Failed to read entry in {}: {}", path.display(), e);
                None
            }
        })
        .map(|entry| {
            (
                entry.file_name().to_string_lossy().to_string(),
                entry.path(),
                entry.metadata(),
            )
        });
    sweep_entries(&mut report, entries, cutoff(now, max_age_days), remove_entry);

    log::info!(
        "Swept {}: {} scanned, {} removed, {} failed",
        path.display(),
        report.scanned_entries,
        report.removed_entries.len(),
        report.failures.len()
    );

    report
}

/// What a sweep does with one directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryAction {
    Keep,
    Remove { is_dir: bool },
    Unreadable,
}

fn classify(metadata: io::Result<Metadata>, cutoff: SystemTime) -> EntryAction {
    let Ok(metadata) = metadata else {
        return EntryAction::Unreadable;
    };
    match metadata.modified() {
        Ok(modified) if modified < cutoff => EntryAction::Remove {
            is_dir: metadata.is_dir(),
        },
        Ok(_) => EntryAction::Keep,
        Err(_) => EntryAction::Unreadable,
    }
}

fn remove_entry(path: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

fn sweep_entries<I, R>(
    report: &mut SweepReport,
    entries: I,
    cutoff: SystemTime,
    mut remove: R,
) where
    I: IntoIterator<Item = (String, PathBuf, io::Result<Metadata>)>,
    R: FnMut(&Path, bool) -> io::Result<()>,
{
    for (name, entry_path, metadata) in entries {
        report.scanned_entries += 1;

        let is_dir = match classify(metadata, cutoff) {
            EntryAction::Keep => continue,
            EntryAction::Unreadable => {
                report.failures.push(SweepFailure {
                    name,
                    reason: UNREADABLE.to_string(),
                });
                continue;
            }
            EntryAction::Remove { is_dir } => is_dir,
        };

        match remove(&entry_path, is_dir) {
            Ok(()) => {
                log::debug!("Removed {}", entry_path.display());
                report.removed_entries.push(name);
            }
            Err(e) => {
                log::warn!("Failed to remove {}: {}", entry_path.display(), e);
                report.failures.push(SweepFailure {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Shallow sizes of all `paths`, in order
pub fn preview<P: AsRef<Path>>(paths: &[P]) -> SweepPreview {
    let sizes: Vec<(PathBuf, Option<u64>)> = paths
        .iter()
        .map(|path| (path.as_ref().to_path_buf(), directory_size(path.as_ref())))
        .collect();
    let total_bytes = sizes.iter().filter_map(|(_, size)| *size).sum();

    SweepPreview { sizes, total_bytes }
}

/// Sweep every path, but only after `confirm` approved the preview
///
/// Returns one report per path in input order, or an empty list with
/// nothing touched when `confirm` returns false.
pub fn sweep_with_confirmation<P, F>(
    paths: &[P],
    max_age_days: u32,
    confirm: F,
) -> Vec<SweepReport>
where
    P: AsRef<Path>,
    F: FnOnce(&SweepPreview) -> bool,
{
    let preview = preview(paths);
    log::info!(
        "Sweep requested for {} path(s), {} bytes, max age {} days",
        paths.len(),
        preview.total_bytes,
        max_age_days
    );

    if !confirm(&preview) {
        log::info!("Sweep cancelled by user");
        return Vec::new();
    }

    paths
        .iter()
        .map(|path| sweep(path.as_ref(), max_age_days))
        .collect()
}

/// Remove a whole directory tree, e.g. Xcode DerivedData
pub fn remove_directory(path: &Path) -> Result<()> {
    fs::remove_dir_all(path)?;
    log::info!("Removed directory {}", path.display());
    Ok(())
}
