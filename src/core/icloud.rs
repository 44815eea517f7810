// iCloud Drive "Recently Deleted" listing and restore

use crate::error::{MaintError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;

/// Ordering of the recently deleted listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Most recently modified first
    #[default]
    DateDeleted,
    /// Case-insensitive, ascending
    Name,
    /// Largest first
    Size,
}

impl FromStr for SortOption {
    type Err = MaintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "date" | "deleted" => Ok(SortOption::DateDeleted),
            "name" => Ok(SortOption::Name),
            "size" => Ok(SortOption::Size),
            other => Err(MaintError::other(format!(
                "Unknown sort option '{}' (expected date, name or size)",
                other
            ))),
        }
    }
}

/// One item sitting in the trash mirror
#[derive(Debug, Clone)]
pub struct TrashEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

/// Result of restoring a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored,
    /// The destination existed and was replaced after confirmation
    Overwritten,
    NotFound,
    /// The destination existed and overwriting was declined; nothing moved
    Cancelled,
}

/// Result of a bulk restore
#[derive(Debug, Clone, Default)]
pub struct RestoreTally {
    pub matched: usize,
    pub restored: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub cancelled: bool,
}

fn matches_filter(name: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(filter) => name.to_lowercase().contains(&filter.to_lowercase()),
        None => true,
    }
}

/// Entries of the trash mirror, filtered by a case-insensitive substring and
/// sorted as requested
pub fn list_deleted(
    trash: &Path,
    sort: SortOption,
    filter: Option<&str>,
) -> Result<Vec<TrashEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(trash)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !matches_filter(&name, filter) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("Skipping unreadable trash entry {}: {}", name, e);
                continue;
            }
        };

        entries.push(TrashEntry {
            name,
            path: entry.path(),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or_else(|_| SystemTime::now()),
        });
    }

    sort_entries(&mut entries, sort);
    log::info!("Listed {} recently deleted iCloud item(s)", entries.len());

    Ok(entries)
}

pub fn sort_entries(entries: &mut [TrashEntry], sort: SortOption) {
    match sort {
        SortOption::DateDeleted => entries.sort_by(|a, b| b.modified.cmp(&a.modified)),
        SortOption::Name => entries.sort_by_key(|entry| entry.name.to_lowercase()),
        SortOption::Size => entries.sort_by(|a, b| b.size.cmp(&a.size)),
    }
}

/// Reject anything that is not a plain file name inside the trash
fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(MaintError::other(format!("Invalid file name: '{}'", name))),
    }
}

fn remove_existing(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Move `name` from the trash mirror back into `destination`
///
/// If an item with the same name already exists at the destination,
/// `confirm_overwrite` decides whether it is replaced.
pub fn restore_file<F>(
    trash: &Path,
    destination: &Path,
    name: &str,
    confirm_overwrite: F,
) -> Result<RestoreOutcome>
where
    F: FnOnce() -> bool,
{
    restore_file_with(trash, destination, name, confirm_overwrite, |from, to| {
        fs::rename(from, to)
    })
}

fn restore_file_with<F, M>(
    trash: &Path,
    destination: &Path,
    name: &str,
    confirm_overwrite: F,
    move_item: M,
) -> Result<RestoreOutcome>
where
    F: FnOnce() -> bool,
    M: FnOnce(&Path, &Path) -> io::Result<()>,
{
    validate_name(name)?;

    let source = trash.join(name);
    let target = destination.join(name);

    if fs::symlink_metadata(&source).is_err() {
        return Ok(RestoreOutcome::NotFound);
    }

    if fs::symlink_metadata(&target).is_err() {
        move_item(&source, &target)?;
        log::info!("Restored iCloud file: {}", name);
        return Ok(RestoreOutcome::Restored);
    }

    if !confirm_overwrite() {
        log::info!("Restore of {} cancelled, destination exists", name);
        return Ok(RestoreOutcome::Cancelled);
    }

    // The current item stays recoverable until the restored one is in place
    let backup = backup_path(destination, name);
    fs::rename(&target, &backup)?;

    if let Err(e) = move_item(&source, &target) {
        if let Err(undo) = fs::rename(&backup, &target) {
            log::error!(
                "Could not put {} back after failed restore, left at {}: {}",
                name,
                backup.display(),
                undo
            );
        }
        return Err(e.into());
    }

    if let Err(e) = remove_existing(&backup) {
        log::warn!("Failed to remove replaced item {}: {}", backup.display(), e);
    }
    log::info!("Restored iCloud file over existing item: {}", name);

    Ok(RestoreOutcome::Overwritten)
}

/// Unused sibling name for the item being replaced
fn backup_path(destination: &Path, name: &str) -> PathBuf {
    let mut candidate = destination.join(format!(".{}.replaced", name));
    let mut counter = 1;
    while fs::symlink_metadata(&candidate).is_ok() {
        candidate = destination.join(format!(".{}.replaced-{}", name, counter));
        counter += 1;
    }
    candidate
}

/// Restore every trash entry matching `filter`
///
/// No prompt is shown when nothing matches. Entries whose destination already
/// exists are skipped and counted as failed, as are entries that fail to
/// move; the rest of the batch continues.
pub fn restore_all<F>(
    trash: &Path,
    destination: &Path,
    filter: Option<&str>,
    confirm: F,
) -> Result<RestoreTally>
where
    F: FnOnce(usize) -> bool,
{
    let mut names: Vec<String> = fs::read_dir(trash)?
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| matches_filter(name, filter))
        .collect();
    names.sort();

    let mut tally = RestoreTally {
        matched: names.len(),
        ..Default::default()
    };

    if names.is_empty() {
        return Ok(tally);
    }

    if !confirm(names.len()) {
        tally.cancelled = true;
        return Ok(tally);
    }

    for name in names {
        let target = destination.join(&name);
        if fs::symlink_metadata(&target).is_ok() {
            tally.failed.push((name, "already exists".to_string()));
            continue;
        }

        match fs::rename(trash.join(&name), &target) {
            Ok(()) => tally.restored.push(name),
            Err(e) => tally.failed.push((name, e.to_string())),
        }
    }

    log::info!(
        "Restored {} iCloud files (failed: {})",
        tally.restored.len(),
        tally.failed.len()
    );

    Ok(tally)
}
