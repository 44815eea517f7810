use crate::core::Config;
use anyhow::Result;
use colored::Colorize;

/// Print the active configuration and where it lives
pub fn show(config: &Config) -> Result<()> {
    println!();
    println!("{}", "⚙️  Current Configuration".cyan().bold());
    println!();

    println!("{}", "Cleanup Settings:".white().bold());
    println!("  Auto Backup: {}", config.cleanup.auto_backup);
    println!("  Confirm Before Delete: {}", config.cleanup.confirm_before_delete);
    println!("  Max Cache Age: {} days", config.cleanup.max_cache_age_days);
    println!();

    println!("{}", "Monitoring Thresholds:".white().bold());
    println!("  CPU Alert: {}%", config.monitoring.cpu_alert_threshold);
    println!("  RAM Alert: {}%", config.monitoring.ram_alert_threshold);
    println!("  Disk Alert: {}%", config.monitoring.disk_alert_threshold);
    println!();

    println!("{}", "Monitored Processes:".white().bold());
    for process in &config.processes_to_monitor {
        println!("  • {}", process);
    }
    println!();

    let path = Config::default_path()?;
    println!("📁 Config file: {}", path.display().to_string().cyan());
    println!();

    Ok(())
}
