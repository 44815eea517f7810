// Restarting stuck daemons and looking up running processes

use crate::error::{MaintError, Result};
use crate::platform::command;
use std::collections::HashSet;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

const KILLALL: &str = "/usr/bin/killall";

/// Daemons restarted together by `optimize-fileprovider`
pub const FILE_PROVIDER_DAEMONS: [&str; 2] = ["fileproviderd", "cloudd"];

/// Terminate every process named `name`; launchd respawns system daemons
///
/// Returns false if `killall` found nothing to kill.
pub fn restart_process(name: &str) -> Result<bool> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MaintError::other("Process name must not be empty"));
    }

    let output = command::run(KILLALL, &[name])?;
    if output.success() {
        log::info!("Killed {} for restart", name);
    } else {
        log::warn!("killall {} exited with {}", name, output.status);
    }

    Ok(output.success())
}

/// Names of all processes currently running
pub fn running_process_names() -> HashSet<String> {
    let system = System::new_with_specifics(
        RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing()),
    );

    system
        .processes()
        .values()
        .map(|process| process.name().to_string_lossy().to_string())
        .collect()
}
