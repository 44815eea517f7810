use crate::core::process::{self, FILE_PROVIDER_DAEMONS};
use crate::ui::{ask_yes_no, error, success};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::thread;
use std::time::Duration;

/// Time given to launchd to respawn a killed daemon
const RESPAWN_WAIT: Duration = Duration::from_secs(2);

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("Process name argument is required")?;
    restart(name, matches.get_flag("yes"))
}

pub fn execute_optimize(matches: &ArgMatches) -> Result<()> {
    optimize_file_provider(matches.get_flag("yes"))
}

pub fn restart(name: &str, assume_yes: bool) -> Result<()> {
    println!();
    println!("{}", format!("🔄 Attempting to restart {}...", name).cyan().bold());
    println!();

    if !assume_yes && !ask_yes_no(&format!("⚠️  This will force-quit {}. Continue?", name)) {
        error("Operation cancelled.");
        println!();
        return Ok(());
    }

    kill_and_wait(name)?;
    println!();
    Ok(())
}

fn kill_and_wait(name: &str) -> Result<()> {
    if process::restart_process(name)? {
        success(&format!("Successfully killed {}", name));
        thread::sleep(RESPAWN_WAIT);
        success(&format!("{} should restart automatically", name));
    } else {
        error(&format!("Failed to kill {}. It may not be running.", name));
    }
    Ok(())
}

/// Restart the daemons behind iCloud Drive's file provider
pub fn optimize_file_provider(assume_yes: bool) -> Result<()> {
    println!();
    println!("{}", "⚙️  Optimizing File Provider...".cyan().bold());
    println!();

    let prompt = format!(
        "⚠️  This will restart {}. Continue?",
        FILE_PROVIDER_DAEMONS.join(" and ")
    );
    if !assume_yes && !ask_yes_no(&prompt) {
        error("Operation cancelled.");
        println!();
        return Ok(());
    }

    for daemon in FILE_PROVIDER_DAEMONS {
        kill_and_wait(daemon)?;
    }
    println!();
    Ok(())
}
