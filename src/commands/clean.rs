use crate::core::cleaner::{self, SweepPreview, SweepReport};
use crate::core::Config;
use crate::platform::{cache_dirs, home_dir, CacheGroup, CacheTarget};
use crate::ui::{ask_yes_no, bold, dimmed, error, format_size, info, success, warn};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

/// Options shared by the cleanup commands
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    pub max_age_days: u32,
    pub assume_yes: bool,
}

impl CleanOptions {
    pub fn from_matches(matches: &ArgMatches, config: &Config) -> Self {
        Self {
            max_age_days: matches
                .get_one::<u32>("days")
                .copied()
                .unwrap_or(config.cleanup.max_cache_age_days),
            assume_yes: matches.get_flag("yes") || !config.cleanup.confirm_before_delete,
        }
    }

    pub fn interactive(config: &Config) -> Self {
        Self {
            max_age_days: config.cleanup.max_cache_age_days,
            assume_yes: !config.cleanup.confirm_before_delete,
        }
    }
}

pub fn execute(matches: &ArgMatches, config: &Config, group: CacheGroup) -> Result<()> {
    clean_group(group, CleanOptions::from_matches(matches, config))
}

pub fn execute_xcode(matches: &ArgMatches, config: &Config) -> Result<()> {
    clear_xcode_cache(matches.get_flag("yes") || !config.cleanup.confirm_before_delete)
}

/// Age-gated sweep of every directory in `group`
pub fn clean_group(group: CacheGroup, options: CleanOptions) -> Result<()> {
    let home = home_dir()?;
    let targets = group.targets(&home);

    println!();
    println!("{}", format!("🧹 Cleaning {}...", group.title()).cyan().bold());
    println!();

    if targets.iter().all(|target| !target.path.exists()) {
        info("No matching directories found on this Mac.");
        println!();
        return Ok(());
    }

    let paths: Vec<PathBuf> = targets.iter().map(|target| target.path.clone()).collect();
    let reports = cleaner::sweep_with_confirmation(&paths, options.max_age_days, |preview| {
        print_preview(&targets, preview);
        println!();
        options.assume_yes
            || ask_yes_no(&format!(
                "⚠️  This will delete entries older than {} days. Continue?",
                options.max_age_days
            ))
    });

    if reports.is_empty() {
        error("Operation cancelled.");
        println!();
        return Ok(());
    }

    print_reports(&targets, &reports);
    Ok(())
}

fn print_preview(targets: &[CacheTarget], preview: &SweepPreview) {
    for (target, (path, size)) in targets.iter().zip(&preview.sizes) {
        match size {
            Some(size) => {
                println!("📂 {}: {}", target.label.white().bold(), path.display());
                println!("   Size: {}", format_size(*size).yellow());
            }
            None => dimmed(&format!("   {}: not present", target.label)),
        }
    }
    println!();
    println!("Total: {}", format_size(preview.total_bytes).yellow().bold());
}

fn print_reports(targets: &[CacheTarget], reports: &[SweepReport]) {
    let mut removed = 0;
    let mut failed = 0;

    for (target, report) in targets.iter().zip(reports) {
        if report.scanned_entries == 0 {
            continue;
        }
        bold(&format!("{} ({} entries scanned)", target.label, report.scanned_entries));
        for name in &report.removed_entries {
            println!("  {} Removed: {}", "✅".green(), name);
        }
        for failure in &report.failures {
            println!(
                "  {} Skipped: {} ({})",
                "⚠️ ".yellow(),
                failure.name,
                failure.reason.dimmed()
            );
        }
        removed += report.removed_entries.len();
        failed += report.failures.len();
    }

    println!();
    success(&format!("Cleanup complete: {} entries removed", removed));
    if failed > 0 {
        warn(&format!("{} entries could not be removed (in use or protected)", failed));
    }
    println!();
}

/// Remove Xcode DerivedData entirely
pub fn clear_xcode_cache(assume_yes: bool) -> Result<()> {
    let home = home_dir()?;
    let derived_data = cache_dirs::xcode_derived_data(&home);

    println!();
    println!("{}", "🧹 Clearing Xcode cache...".cyan().bold());
    println!();

    let Some(size) = cleaner::directory_size(&derived_data) else {
        info("Xcode DerivedData not found, nothing to clear.");
        println!();
        return Ok(());
    };
    println!("📊 Current DerivedData size: {}", format_size(size).yellow());

    if !assume_yes && !ask_yes_no("⚠️  This will delete Xcode DerivedData. Continue?") {
        error("Operation cancelled.");
        println!();
        return Ok(());
    }

    cleaner::remove_directory(&derived_data)
        .with_context(|| format!("Failed to clear {}", derived_data.display()))?;
    success(&format!("Successfully cleared {}", derived_data.display()));
    println!();

    Ok(())
}
