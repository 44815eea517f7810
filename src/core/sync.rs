// iCloud sync control and file sync service status

use crate::error::{MaintError, Result};
use crate::platform::{cache_dirs, command};
use std::collections::HashSet;
use std::path::Path;

const LAUNCHCTL: &str = "/bin/launchctl";

/// Sync-related services and the process name each runs as
pub const SYNC_SERVICES: [(&str, &str); 5] = [
    ("iCloud Drive", "bird"),
    ("CloudKit", "cloudd"),
    ("File Provider", "fileproviderd"),
    ("Google Drive", "Google Drive"),
    ("Dropbox", "Dropbox"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub label: String,
    pub process: String,
    pub running: bool,
}

/// Match the known sync services against a set of running process names
pub fn service_statuses(running: &HashSet<String>) -> Vec<ServiceStatus> {
    SYNC_SERVICES
        .iter()
        .map(|(label, process)| ServiceStatus {
            label: label.to_string(),
            process: process.to_string(),
            running: running.contains(*process),
        })
        .collect()
}

/// Load or unload the iCloud (bird) launch agent
pub fn set_icloud_sync(home: &Path, enabled: bool) -> Result<()> {
    let agent = cache_dirs::bird_launch_agent(home);
    let agent = agent
        .to_str()
        .ok_or_else(|| MaintError::other("Launch agent path is not valid UTF-8"))?;
    let action = if enabled { "load" } else { "unload" };

    let output = command::run(LAUNCHCTL, &[action, "-w", agent])?;
    if !output.success() {
        return Err(MaintError::command(format!(
            "launchctl {} exited with {}",
            action, output.status
        )));
    }

    log::info!("iCloud sync {}", if enabled { "resumed" } else { "paused" });
    Ok(())
}
