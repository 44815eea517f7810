//! Parsers for the text output of macOS introspection utilities
//!
//! Each function handles exactly one tool's format and returns `None` (or an
//! empty list) when the output does not look the way it is expected to.
//! Format drift across macOS releases is patched here, never in the
//! collector.

use super::metrics::{BatteryStatus, DiskUsage, ProcessSample};
use once_cell::sync::Lazy;
use regex::Regex;

static UPTIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"up ([^,]+)").expect("valid regex"));
static PAGE_SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"page size of (\d+) bytes").expect("valid regex"));

/// Minimum column count of a `top` process row
const TOP_MIN_FIELDS: usize = 12;

/// Aggregate user CPU percentage from `top -l 1`
///
/// Looks for the `CPU usage:` line and returns the token right before the
/// one containing `user`, e.g. `CPU usage: 5.26% user, 10.52% sys, 84.21% idle`.
pub fn parse_cpu_usage(output: &str) -> Option<f64> {
    for line in output.lines().filter(|line| line.contains("CPU usage:")) {
        let components: Vec<&str> = line.split_whitespace().collect();
        for (index, component) in components.iter().enumerate() {
            if index > 0 && component.contains("user") {
                if let Ok(percentage) = components[index - 1].replace('%', "").parse::<f64>() {
                    return Some(percentage);
                }
            }
        }
    }
    None
}

/// Used memory in bytes from `vm_stat`: (active + inactive + wired) pages
/// times the page size announced in the header line
pub fn parse_vm_stat(output: &str) -> Option<u64> {
    let page_size: u64 = PAGE_SIZE_RE
        .captures(output)
        .and_then(|caps| caps[1].parse().ok())?;

    let mut active = None;
    let mut inactive = None;
    let mut wired = None;

    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let Ok(pages) = value.trim().trim_end_matches('.').parse::<u64>() else {
            continue;
        };
        match key.trim() {
            "Pages active" => active = Some(pages),
            "Pages inactive" => inactive = Some(pages),
            "Pages wired down" => wired = Some(pages),
            _ => {}
        }
    }

    let pages = active? + inactive? + wired?;
    Some(pages.saturating_mul(page_size))
}

/// Disk usage from `df -k <path>`
///
/// The second line carries total blocks at index 1 and available blocks at
/// index 3, both in 1024-byte units. Used space is total minus available.
pub fn parse_disk_usage(output: &str) -> Option<DiskUsage> {
    let line = output.lines().filter(|line| !line.is_empty()).nth(1)?;
    let components: Vec<&str> = line.split_whitespace().collect();
    if components.len() < 4 {
        return None;
    }

    let total: u64 = components[1].parse().ok()?;
    let available: u64 = components[3].parse().ok()?;
    let used = total.saturating_sub(available);

    Some(DiskUsage {
        used_bytes: used.saturating_mul(1024),
        total_bytes: total.saturating_mul(1024),
    })
}

/// Battery charge from `pmset -g batt`
///
/// `-InternalBattery-0 (id=1234)	85%; discharging; 3:45 remaining`
///
/// "discharging" contains "charging", so both substrings are checked on the
/// raw line. Keep it that way; locale-specific output relies on it.
pub fn parse_battery(output: &str) -> Option<BatteryStatus> {
    for line in output.lines().filter(|line| line.contains('%')) {
        let Some(component) = line.split(char::is_whitespace).find(|c| c.contains('%')) else {
            continue;
        };
        let percentage = component.split('%').next().unwrap_or_default().trim();
        if let Ok(percent) = percentage.parse::<u8>() {
            if percent > 100 {
                continue;
            }
            let is_charging = line.contains("charging") && !line.contains("discharging");
            return Some(BatteryStatus {
                percent,
                is_charging,
            });
        }
    }
    None
}

/// Process rows from `top -l 1 -o cpu`, in the order the tool printed them
///
/// Lines up to the `PID` header are ignored. Rows need at least 12 columns:
/// PID first, CPU percent third, process name last. Rows that fail to parse
/// are skipped. Collection stops after `limit` samples.
pub fn parse_top_processes(output: &str, limit: usize) -> Vec<ProcessSample> {
    let mut processes = Vec::new();
    if limit == 0 {
        return processes;
    }

    let mut found_header = false;
    for line in output.lines().filter(|line| !line.is_empty()) {
        if line.contains("PID") {
            found_header = true;
            continue;
        }
        if !found_header {
            continue;
        }

        let components: Vec<&str> = line.split_whitespace().collect();
        if components.len() < TOP_MIN_FIELDS {
            continue;
        }

        let pid = components[0].parse::<i32>();
        let cpu_percent = components[2].parse::<f64>();
        let (Ok(pid), Ok(cpu_percent)) = (pid, cpu_percent) else {
            continue;
        };

        let name = components.last().copied().unwrap_or("Unknown").to_string();
        processes.push(ProcessSample {
            name,
            cpu_percent,
            pid,
        });

        if processes.len() >= limit {
            break;
        }
    }

    processes
}

/// Human readable uptime from `uptime`, e.g. `5 days` out of
/// `10:30  up 5 days, 12:34, 3 users, load averages: 1.23 1.45 1.67`
pub fn parse_uptime(output: &str) -> Option<String> {
    let caps = UPTIME_RE.captures(output)?;
    let uptime = caps[1].trim();
    if uptime.is_empty() {
        None
    } else {
        Some(uptime.to_string())
    }
}
