use serde::{Deserialize, Serialize};

/// Point-in-time system status, recomputed on every call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub timestamp: i64, // Unix timestamp
    pub cpu_usage_percent: f64,
    pub memory: MemoryUsage,
    pub disk: Option<DiskUsage>,
    pub battery: Option<BatteryStatus>,
    pub uptime: String,
    pub top_processes: Vec<ProcessSample>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl MemoryUsage {
    /// Used share of physical memory, None when the total is unknown
    pub fn percent(&self) -> Option<f64> {
        usage_percent(self.used_bytes, self.total_bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl DiskUsage {
    pub fn percent(&self) -> Option<f64> {
        usage_percent(self.used_bytes, self.total_bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryStatus {
    pub percent: u8,
    pub is_charging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSample {
    pub name: String,
    pub cpu_percent: f64,
    pub pid: i32,
}

fn usage_percent(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(used as f64 / total as f64 * 100.0)
    }
}
