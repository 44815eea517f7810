use crate::core::icloud::{self, RestoreOutcome, SortOption};
use crate::platform::{cache_dirs, command, home_dir};
use crate::ui::{
    ask_yes_no, dimmed, error, format_size, format_time, info, success, truncate_name, warn,
};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::Path;

const OPEN: &str = "/usr/bin/open";

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => {
            let sort = sub_matches
                .get_one::<String>("sort")
                .map(|s| s.parse::<SortOption>())
                .transpose()?
                .unwrap_or_default();
            let filter = sub_matches.get_one::<String>("filter").map(String::as_str);
            list(sort, filter)
        }
        Some(("restore", sub_matches)) => {
            let name = sub_matches
                .get_one::<String>("name")
                .context("File name argument is required")?;
            restore(name, sub_matches.get_flag("yes"))
        }
        Some(("restore-all", sub_matches)) => {
            let filter = sub_matches.get_one::<String>("filter").map(String::as_str);
            restore_all(filter, sub_matches.get_flag("yes"))
        }
        Some(("open", _)) => open_in_finder(),
        _ => {
            println!("Use 'mac-maint icloud --help' for more information.");
            Ok(())
        }
    }
}

fn print_trash_not_found() {
    error("iCloud Drive Recently Deleted folder not found locally.");
    println!();
    println!("{}", "💡 This could mean:".white().bold());
    println!("   1. iCloud Drive isn't enabled on this Mac");
    println!("   2. Your deleted files are on iCloud servers but not synced locally");
    println!("   3. The Recently Deleted folder is empty");
    println!();
    println!("{}", "🌐 To recover files from iCloud.com:".white().bold());
    println!("   Sign in at https://icloud.com, open iCloud Drive and use 'Recently Deleted'");
    println!();
}

pub fn list(sort: SortOption, filter: Option<&str>) -> Result<()> {
    let home = home_dir()?;
    println!();
    println!("{}", "🗑️  iCloud Drive - Recently Deleted Files".cyan().bold());
    println!();

    let Some(trash) = cache_dirs::find_icloud_trash(&home) else {
        print_trash_not_found();
        return Ok(());
    };

    let entries = icloud::list_deleted(&trash, sort, filter)
        .with_context(|| format!("Error reading Recently Deleted folder {}", trash.display()))?;

    if entries.is_empty() {
        match filter {
            Some(filter) => info(&format!("No files found matching '{}'", filter)),
            None => success("No deleted files found (Recently Deleted is empty)"),
        }
        println!();
        return Ok(());
    }

    println!("Found {} deleted file(s)", entries.len());
    println!();
    println!("{:<50} {:>12} {:>20}", "File Name", "Size", "Deleted");
    println!("{}", "-".repeat(85));
    for entry in &entries {
        println!(
            "{:<50} {:>12} {:>20}",
            truncate_name(&entry.name, 48),
            format_size(entry.size),
            format_time(entry.modified)
        );
    }

    println!();
    dimmed("💡 Use --filter to search, --sort name|size|date to reorder,");
    dimmed("   and 'mac-maint icloud restore <name>' to bring a file back.");
    println!();

    Ok(())
}

pub fn restore(name: &str, assume_yes: bool) -> Result<()> {
    restore_in(&home_dir()?, name, assume_yes)
}

fn restore_in(home: &Path, name: &str, assume_yes: bool) -> Result<()> {
    let destination = cache_dirs::icloud_drive_dir(home);

    println!();
    println!("{}", format!("♻️  Restoring iCloud file: {}", name).cyan().bold());
    println!();

    let Some(trash) = cache_dirs::find_icloud_trash(home) else {
        print_trash_not_found();
        return Ok(());
    };

    let outcome = icloud::restore_file(&trash, &destination, name, || {
        warn("A file with this name already exists in iCloud Drive.");
        assume_yes || ask_yes_no("Overwrite existing file?")
    })
    .with_context(|| format!("Error restoring file {}", name))?;

    match outcome {
        RestoreOutcome::Restored | RestoreOutcome::Overwritten => {
            success(&format!("File restored to iCloud Drive: {}", name))
        }
        RestoreOutcome::NotFound => error(&format!("File not found in Recently Deleted: {}", name)),
        RestoreOutcome::Cancelled => error("Restore cancelled."),
    }
    println!();

    Ok(())
}

pub fn restore_all(filter: Option<&str>, assume_yes: bool) -> Result<()> {
    restore_all_in(&home_dir()?, filter, assume_yes)
}

fn restore_all_in(home: &Path, filter: Option<&str>, assume_yes: bool) -> Result<()> {
    let destination = cache_dirs::icloud_drive_dir(home);

    println!();
    println!("{}", "♻️  Restoring iCloud files...".cyan().bold());
    println!();

    let Some(trash) = cache_dirs::find_icloud_trash(home) else {
        print_trash_not_found();
        return Ok(());
    };

    let tally = icloud::restore_all(&trash, &destination, filter, |count| {
        println!("Found {} file(s) to restore", count);
        if let Some(filter) = filter {
            println!("Filter: '{}'", filter);
        }
        println!();
        assume_yes || ask_yes_no(&format!("Restore all {} file(s)?", count))
    })
    .context("Error during bulk restore")?;

    if tally.matched == 0 {
        match filter {
            Some(filter) => info(&format!("No files found matching '{}'", filter)),
            None => info("No files to restore."),
        }
        println!();
        return Ok(());
    }

    if tally.cancelled {
        error("Restore cancelled.");
        println!();
        return Ok(());
    }

    for name in &tally.restored {
        println!("{} Restored: {}", "✅".green(), name);
    }
    for (name, reason) in &tally.failed {
        println!("{} Skipped: {} - {}", "⚠️ ".yellow(), name, reason);
    }

    println!();
    println!("{}", "📊 Summary:".white().bold());
    println!("   ✅ Successfully restored: {}", tally.restored.len());
    println!("   ❌ Failed/Skipped: {}", tally.failed.len());
    println!();

    Ok(())
}

pub fn open_in_finder() -> Result<()> {
    let home = home_dir()?;
    let Some(trash) = cache_dirs::find_icloud_trash(&home) else {
        print_trash_not_found();
        return Ok(());
    };

    open_path(&trash)?;
    success("Opened iCloud Recently Deleted folder in Finder");
    println!();
    Ok(())
}

fn open_path(path: &Path) -> Result<()> {
    let path_str = path.to_string_lossy();
    let output = command::run(OPEN, &[path_str.as_ref()])
        .with_context(|| format!("Error opening {}", path.display()))?;
    if !output.success() {
        anyhow::bail!("open exited with {}", output.status);
    }
    Ok(())
}
