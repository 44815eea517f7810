use crate::core::process::running_process_names;
use crate::core::sync;
use crate::platform::home_dir;
use crate::ui::{banner, success};
use anyhow::{Context, Result};
use colored::Colorize;

pub fn pause_icloud() -> Result<()> {
    println!();
    println!("{}", "⏸️  Pausing iCloud synchronization...".cyan().bold());
    println!();

    let home = home_dir()?;
    sync::set_icloud_sync(&home, false).context("Failed to pause iCloud sync")?;
    success("iCloud sync paused (may require restart)");
    println!();
    Ok(())
}

pub fn resume_icloud() -> Result<()> {
    println!();
    println!("{}", "▶️  Resuming iCloud synchronization...".cyan().bold());
    println!();

    let home = home_dir()?;
    sync::set_icloud_sync(&home, true).context("Failed to resume iCloud sync")?;
    success("iCloud sync resumed");
    println!();
    Ok(())
}

pub fn show_sync_status() -> Result<()> {
    banner("File Sync Status");

    let running = running_process_names();
    for status in sync::service_statuses(&running) {
        let state = if status.running {
            "running".green().bold()
        } else {
            "not running".dimmed()
        };
        println!("  {:<16} {:<16} {}", status.label, status.process.dimmed(), state);
    }
    println!();

    Ok(())
}
