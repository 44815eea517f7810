use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use mac_maint::commands;
use mac_maint::core::config::Config;
use mac_maint::platform::CacheGroup;

fn yes_arg() -> Arg {
    Arg::new("yes")
        .short('y')
        .long("yes")
        .help("Do not ask for confirmation")
        .action(ArgAction::SetTrue)
}

fn days_arg() -> Arg {
    Arg::new("days")
        .short('d')
        .long("days")
        .value_name("DAYS")
        .help("Delete entries older than this many days (default: max_cache_age_days from config)")
        .value_parser(clap::value_parser!(u32))
}

fn filter_arg() -> Arg {
    Arg::new("filter")
        .short('f')
        .long("filter")
        .value_name("TEXT")
        .help("Only include files whose name contains TEXT (case-insensitive)")
}

fn cleanup_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(days_arg()).arg(yes_arg())
}

fn build_cli() -> Command {
    Command::new("mac-maint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("🔧 MacBook Maintenance Tool")
        .after_help(
            "LOGS:\n    ~/.mac-maintenance/logs/maintenance.log\n\nCONFIG:\n    ~/.mac-maintenance/config.json",
        )
        // System monitoring
        .subcommand(
            Command::new("status")
                .about("Show system status (CPU, RAM, disk, battery, uptime)")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the snapshot as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("top-processes")
                .about("List top CPU-consuming processes")
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("N")
                        .help("Number of processes to show")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                ),
        )
        .subcommand(
            Command::new("sync-status")
                .about("Show file sync status (iCloud, Google Drive, Dropbox)"),
        )
        // Process management
        .subcommand(
            Command::new("restart-process")
                .about("Restart a specific process")
                .arg(
                    Arg::new("name")
                        .help("Name of the process to restart")
                        .required(true)
                        .index(1),
                )
                .arg(yes_arg()),
        )
        .subcommand(
            Command::new("optimize-fileprovider")
                .about("Restart fileproviderd and cloudd")
                .arg(yes_arg()),
        )
        // Cleanup
        .subcommand(
            Command::new("clear-xcode-cache")
                .about("Clear Xcode derived data")
                .arg(yes_arg()),
        )
        .subcommand(cleanup_command("cleanup-caches", "Clean application caches"))
        .subcommand(cleanup_command(
            "clean-browser-cache",
            "Clean browser caches (Chrome, Safari, Firefox, Brave)",
        ))
        .subcommand(cleanup_command(
            "clean-dev-cache",
            "Clean development caches (npm, yarn, brew, pip)",
        ))
        .subcommand(cleanup_command("clean-logs", "Clean user logs"))
        // Sync management
        .subcommand(Command::new("pause-icloud").about("Pause iCloud synchronization"))
        .subcommand(Command::new("resume-icloud").about("Resume iCloud synchronization"))
        .subcommand(
            Command::new("icloud")
                .about("Browse and restore iCloud Drive's Recently Deleted files")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("list")
                        .about("List recently deleted files")
                        .arg(
                            Arg::new("sort")
                                .short('s')
                                .long("sort")
                                .value_name("ORDER")
                                .help("Sort order")
                                .value_parser(["date", "name", "size"])
                                .default_value("date"),
                        )
                        .arg(filter_arg()),
                )
                .subcommand(
                    Command::new("restore")
                        .about("Restore one file to iCloud Drive")
                        .arg(
                            Arg::new("name")
                                .help("Name of the file in Recently Deleted")
                                .required(true)
                                .index(1),
                        )
                        .arg(yes_arg()),
                )
                .subcommand(
                    Command::new("restore-all")
                        .about("Restore every (matching) file to iCloud Drive")
                        .arg(filter_arg())
                        .arg(yes_arg()),
                )
                .subcommand(
                    Command::new("open").about("Open the Recently Deleted folder in Finder"),
                ),
        )
        // Other
        .subcommand(Command::new("menu").about("Interactive maintenance menu"))
        .subcommand(Command::new("config").about("Show current configuration"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
}

/// Subcommands whose behaviour depends on the config file
fn needs_config(subcommand: &str) -> bool {
    matches!(
        subcommand,
        "status"
            | "clear-xcode-cache"
            | "cleanup-caches"
            | "clean-browser-cache"
            | "clean-dev-cache"
            | "clean-logs"
            | "menu"
            | "config"
    )
}

fn main() -> Result<()> {
    mac_maint::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    let config = match matches.subcommand_name() {
        Some(name) if needs_config(name) => {
            Config::load().context("Failed to load configuration")?
        }
        _ => Config::default(),
    };

    match matches.subcommand() {
        Some(("status", sub_matches)) => commands::status::execute(sub_matches, &config)?,
        Some(("top-processes", sub_matches)) => commands::status::execute_top(sub_matches)?,
        Some(("sync-status", _)) => commands::sync::show_sync_status()?,
        Some(("restart-process", sub_matches)) => commands::process::execute(sub_matches)?,
        Some(("optimize-fileprovider", sub_matches)) => {
            commands::process::execute_optimize(sub_matches)?
        }
        Some(("clear-xcode-cache", sub_matches)) => {
            commands::clean::execute_xcode(sub_matches, &config)?
        }
        Some(("cleanup-caches", sub_matches)) => {
            commands::clean::execute(sub_matches, &config, CacheGroup::Application)?
        }
        Some(("clean-browser-cache", sub_matches)) => {
            commands::clean::execute(sub_matches, &config, CacheGroup::Browser)?
        }
        Some(("clean-dev-cache", sub_matches)) => {
            commands::clean::execute(sub_matches, &config, CacheGroup::Development)?
        }
        Some(("clean-logs", sub_matches)) => {
            commands::clean::execute(sub_matches, &config, CacheGroup::Logs)?
        }
        Some(("pause-icloud", _)) => commands::sync::pause_icloud()?,
        Some(("resume-icloud", _)) => commands::sync::resume_icloud()?,
        Some(("icloud", sub_matches)) => commands::icloud::execute(sub_matches)?,
        Some(("menu", _)) => commands::menu::execute(&config)?,
        Some(("config", _)) => commands::config::show(&config)?,
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)?
        }
        _ => {
            cli.print_help()?;
            println!();
        }
    }

    Ok(())
}
