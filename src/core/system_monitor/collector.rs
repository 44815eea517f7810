// Metric collection: run the host utility, hand its output to the parser,
// fall back to a neutral value when either step fails.

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::platform::{home_dir, stdout_of};

use super::metrics::*;
use super::parsers;

const TOP: &str = "/usr/bin/top";
const VM_STAT: &str = "/usr/bin/vm_stat";
const DF: &str = "/bin/df";
const PMSET: &str = "/usr/bin/pmset";
const UPTIME: &str = "/usr/bin/uptime";

/// Number of processes shown by `status`
pub const STATUS_TOP_PROCESSES: usize = 3;

pub const UNKNOWN_UPTIME: &str = "Unknown";

/// Aggregate user CPU percentage, 0.0 when unavailable
pub fn collect_cpu_usage() -> f64 {
    stdout_of(TOP, &["-l", "1", "-n", "0"])
        .and_then(|output| parsers::parse_cpu_usage(&output))
        .unwrap_or_else(|| {
            log::debug!("CPU usage unavailable, reporting 0");
            0.0
        })
}

/// (used, total) physical memory in bytes, (0, 0) when the VM statistics
/// query fails
pub fn collect_memory_usage() -> MemoryUsage {
    let used_bytes = stdout_of(VM_STAT, &[]).and_then(|output| parsers::parse_vm_stat(&output));
    let Some(used_bytes) = used_bytes else {
        log::debug!("vm_stat unavailable, reporting no memory data");
        return MemoryUsage::default();
    };

    let system = System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
    );

    MemoryUsage {
        used_bytes,
        total_bytes: system.total_memory(),
    }
}

/// Usage of the volume holding the home directory
pub fn collect_disk_usage() -> Option<DiskUsage> {
    let home = home_dir().ok()?;
    let home = home.to_str()?;
    stdout_of(DF, &["-k", home]).and_then(|output| parsers::parse_disk_usage(&output))
}

/// None on machines without a battery
pub fn collect_battery_status() -> Option<BatteryStatus> {
    stdout_of(PMSET, &["-g", "batt"]).and_then(|output| parsers::parse_battery(&output))
}

/// Up to `limit` processes as ordered by `top`, highest CPU first
pub fn collect_top_processes(limit: usize) -> Vec<ProcessSample> {
    if limit == 0 {
        return Vec::new();
    }

    // command last so the name is the final column
    let stats = "pid,user,cpu,time,threads,ports,mem,purg,pgrp,ppid,state,uid,command";
    stdout_of(TOP, &["-l", "1", "-o", "cpu", "-stats", stats])
        .map(|output| parsers::parse_top_processes(&output, limit))
        .unwrap_or_default()
}

pub fn collect_uptime() -> String {
    stdout_of(UPTIME, &[])
        .and_then(|output| parsers::parse_uptime(&output))
        .unwrap_or_else(|| UNKNOWN_UPTIME.to_string())
}

/// Collect every metric sequentially into one snapshot
pub fn collect_snapshot(process_limit: usize) -> ResourceSnapshot {
    ResourceSnapshot {
        timestamp: chrono::Utc::now().timestamp(),
        cpu_usage_percent: collect_cpu_usage(),
        memory: collect_memory_usage(),
        disk: collect_disk_usage(),
        battery: collect_battery_status(),
        uptime: collect_uptime(),
        top_processes: collect_top_processes(process_limit),
    }
}
