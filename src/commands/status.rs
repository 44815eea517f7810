use crate::core::process::running_process_names;
use crate::core::system_monitor::{self, collector::STATUS_TOP_PROCESSES, ResourceSnapshot};
use crate::core::Config;
use crate::ui::{banner, dimmed, format_percent, format_size, truncate_name, warn};
use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

/// Default length of the `top-processes` table
pub const TOP_PROCESSES_LIMIT: usize = 10;

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    show_status(config, matches.get_flag("json"))
}

pub fn execute_top(matches: &ArgMatches) -> Result<()> {
    let limit = matches
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(TOP_PROCESSES_LIMIT);
    show_top_processes(limit);
    Ok(())
}

pub fn show_status(config: &Config, json: bool) -> Result<()> {
    let snapshot = system_monitor::collect_snapshot(STATUS_TOP_PROCESSES);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot, config);
    }

    log::info!("System status checked");
    Ok(())
}

fn exceeds(percent: f64, threshold: u32) -> bool {
    percent > f64::from(threshold)
}

fn print_snapshot(snapshot: &ResourceSnapshot, config: &Config) {
    let thresholds = &config.monitoring;
    let mut alerts = Vec::new();

    banner("MacBook Maintenance Status");

    let cpu = snapshot.cpu_usage_percent;
    println!("💻 CPU Usage: {}", format_percent(cpu).bold());
    if exceeds(cpu, thresholds.cpu_alert_threshold) {
        alerts.push(format!("CPU usage above {}%", thresholds.cpu_alert_threshold));
    }

    let memory = snapshot.memory;
    match memory.percent() {
        Some(percent) => {
            println!(
                "🧠 RAM Usage: {} / {} ({})",
                format_size(memory.used_bytes),
                format_size(memory.total_bytes),
                format_percent(percent).bold()
            );
            if exceeds(percent, thresholds.ram_alert_threshold) {
                alerts.push(format!("RAM usage above {}%", thresholds.ram_alert_threshold));
            }
        }
        None => println!("🧠 RAM Usage: {}", "unavailable".dimmed()),
    }

    if let Some(disk) = snapshot.disk {
        if let Some(percent) = disk.percent() {
            println!(
                "💾 Disk Usage: {} / {} ({})",
                format_size(disk.used_bytes),
                format_size(disk.total_bytes),
                format_percent(percent).bold()
            );
            if exceeds(percent, thresholds.disk_alert_threshold) {
                alerts.push(format!("Disk usage above {}%", thresholds.disk_alert_threshold));
            }
        }
    }

    if let Some(battery) = snapshot.battery {
        let icon = if battery.is_charging { "🔌" } else { "🔋" };
        let charging = if battery.is_charging { " (Charging)" } else { "" };
        println!("{} Battery: {}%{}", icon, battery.percent, charging);
    }

    println!("⏱️  Uptime: {}", snapshot.uptime);

    println!();
    println!("{}", format!("⚠️  Top {} CPU Hogs:", STATUS_TOP_PROCESSES).white().bold());
    if snapshot.top_processes.is_empty() {
        dimmed("  No process information available");
    }
    for (index, process) in snapshot.top_processes.iter().enumerate() {
        println!(
            "  {}. {} - {}",
            index + 1,
            process.name,
            format_percent(process.cpu_percent)
        );
    }

    if !config.processes_to_monitor.is_empty() {
        let running = running_process_names();
        println!();
        println!("{}", "👀 Monitored Processes:".white().bold());
        for name in &config.processes_to_monitor {
            if running.contains(name) {
                println!("  {} {}", "●".green(), name);
            } else {
                println!("  {} {} {}", "○".dimmed(), name, "(not running)".dimmed());
            }
        }
    }

    if !alerts.is_empty() {
        println!();
        for alert in &alerts {
            warn(alert);
        }
        log::warn!("Status alerts: {}", alerts.join(", "));
    }

    println!();
}

pub fn show_top_processes(limit: usize) {
    banner("Top CPU Processes");

    let processes = system_monitor::collect_top_processes(limit);
    println!("{:<30} {:>8} {:>8}", "Process Name", "CPU %", "PID");
    println!("{}", "-".repeat(50));

    if processes.is_empty() {
        dimmed("No process information available");
    }
    for process in processes {
        println!(
            "{:<30} {:>7.1}% {:>8}",
            truncate_name(&process.name, 30),
            process.cpu_percent,
            process.pid
        );
    }
    println!();
}
