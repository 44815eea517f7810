use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Format file size in human-readable format (B, KB, MB, GB)
pub fn format_size(size: u64) -> String {
    if size < 1024 {
        format!("{}B", size)
    } else if size < 1024 * 1024 {
        format!("{:.1}KB", size as f64 / 1024.0)
    } else if size < 1024 * 1024 * 1024 {
        format!("{:.1}MB", size as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1}GB", size as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Format timestamp in human-readable format (YYYY-MM-DD HH:MM)
pub fn format_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// One decimal place, e.g. `42.5%`
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Shorten `name` to at most `max` characters, ending in `...` when cut
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut short: String = name.chars().take(keep).collect();
    short.push_str("...");
    short
}
