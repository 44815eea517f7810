use crate::commands::{clean, process, status, sync};
use crate::core::Config;
use crate::platform::CacheGroup;
use crate::ui::{banner, error, success};
use anyhow::Result;
use dialoguer::{Input, Select};

const MENU_ITEMS: [&str; 8] = [
    "Show System Status",
    "View Top Processes",
    "Restart Problematic Process",
    "Clear Xcode Cache",
    "Cleanup Caches",
    "Pause iCloud",
    "Resume iCloud",
    "Exit",
];

/// Interactive loop over the main maintenance actions
pub fn execute(config: &Config) -> Result<()> {
    loop {
        banner("MacBook Maintenance Menu");

        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        let result = match choice {
            Some(0) => status::show_status(config, false),
            Some(1) => {
                status::show_top_processes(status::TOP_PROCESSES_LIMIT);
                Ok(())
            }
            Some(2) => {
                let name: String = Input::new()
                    .with_prompt("Enter process name")
                    .interact_text()?;
                process::restart(name.trim(), false)
            }
            Some(3) => clean::clear_xcode_cache(!config.cleanup.confirm_before_delete),
            Some(4) => clean::clean_group(
                CacheGroup::Application,
                clean::CleanOptions::interactive(config),
            ),
            Some(5) => sync::pause_icloud(),
            Some(6) => sync::resume_icloud(),
            _ => {
                success("Goodbye!");
                println!();
                return Ok(());
            }
        };

        // A failed action is reported and the menu keeps running
        if let Err(e) = result {
            log::error!("Menu action failed: {:#}", e);
            error(&format!("{:#}", e));
        }
    }
}
