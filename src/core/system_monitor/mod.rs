// System status collection: CPU, memory, disk, battery, uptime, processes

pub mod collector;
pub mod metrics;
pub mod parsers;

pub use collector::{
    collect_battery_status, collect_cpu_usage, collect_disk_usage, collect_memory_usage,
    collect_snapshot, collect_top_processes, collect_uptime,
};
pub use metrics::{BatteryStatus, DiskUsage, MemoryUsage, ProcessSample, ResourceSnapshot};
