// Building a status snapshot from captured tool output

use mac_maint::core::system_monitor::parsers;
use mac_maint::core::system_monitor::{MemoryUsage, ResourceSnapshot};

const TOP_OUTPUT: &str = "\
Processes: 498 total, 2 running, 496 sleeping, 2210 threads
2025/06/15 09:12:44
Load Avg: 2.31, 2.05, 1.98
CPU usage: 12.50% user, 7.25% sys, 80.25% idle
SharedLibs: 512M resident, 96M data, 48M linkedit.
MemRegions: 200000 total, 6000M resident, 300M private, 2000M shared.
PhysMem: 15G used (2500M wired, 900M compressor), 1200M unused.

PID    USER    %CPU TIME     #TH  #PORTS MEM    PURG CMPRS PGRP PPID STATE    COMMAND
412    _windowserver 38.2 55:10.11 21   3012   900M   0B   120M  412  1    sleeping WindowServer
0      root    21.7 90:01.44 512  0      64M    0B   0B    0    0    running  kernel_task
1893   user    9.9  03:11.02 34   410    700M   12M  0B    1893 1    sleeping Safari
77     root    4.1  01:00.00 8    120    20M    0B   0B    77   1    sleeping fileproviderd
";

const DF_OUTPUT: &str = "\
Filesystem     1024-blocks      Used Available Capacity  iused     ifree %iused  Mounted on
/dev/disk3s1s1   488245288 320000000 168245288    66%   404167 1682452880    0%   /
";

const PMSET_OUTPUT: &str = "Now drawing from 'Battery Power'
 -InternalBattery-0 (id=7)\t64%; discharging; 4:02 remaining present: true
";

const UPTIME_OUTPUT: &str = "9:12  up 3 days,  1:02, 2 users, load averages: 2.31 2.05 1.98";

#[test]
fn test_snapshot_from_captured_output() {
    let snapshot = ResourceSnapshot {
        timestamp: 1_750_000_000,
        cpu_usage_percent: parsers::parse_cpu_usage(TOP_OUTPUT).unwrap_or(0.0),
        memory: MemoryUsage {
            used_bytes: 8 * 1024 * 1024 * 1024,
            total_bytes: 16 * 1024 * 1024 * 1024,
        },
        disk: parsers::parse_disk_usage(DF_OUTPUT),
        battery: parsers::parse_battery(PMSET_OUTPUT),
        uptime: parsers::parse_uptime(UPTIME_OUTPUT).unwrap_or_else(|| "Unknown".to_string()),
        top_processes: parsers::parse_top_processes(TOP_OUTPUT, 3),
    };

    assert_eq!(snapshot.cpu_usage_percent, 12.5);
    assert_eq!(snapshot.memory.percent(), Some(50.0));

    let disk = snapshot.disk.unwrap();
    assert_eq!(disk.total_bytes, 488245288 * 1024);
    assert_eq!(disk.used_bytes, (488245288 - 168245288) * 1024);

    let battery = snapshot.battery.unwrap();
    assert_eq!(battery.percent, 64);
    assert!(!battery.is_charging);

    assert_eq!(snapshot.uptime, "3 days");

    let names: Vec<_> = snapshot.top_processes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["WindowServer", "kernel_task", "Safari"]);
    assert_eq!(snapshot.top_processes[1].pid, 0);
    assert_eq!(snapshot.top_processes[2].cpu_percent, 9.9);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let snapshot = ResourceSnapshot {
        timestamp: 42,
        cpu_usage_percent: 3.5,
        uptime: "2:15".to_string(),
        top_processes: parsers::parse_top_processes(TOP_OUTPUT, 1),
        ..Default::default()
    };

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["timestamp"], 42);
    assert_eq!(json["cpu_usage_percent"], 3.5);
    assert!(json["disk"].is_null());
    assert!(json["battery"].is_null());
    assert_eq!(json["top_processes"][0]["name"], "WindowServer");
    assert_eq!(json["top_processes"][0]["pid"], 412);
}

#[test]
fn test_unavailable_tools_leave_fields_empty() {
    assert_eq!(parsers::parse_cpu_usage(""), None);
    assert!(parsers::parse_disk_usage("df: /nowhere: No such file or directory\n").is_none());
    assert!(parsers::parse_battery("Now drawing from 'AC Power'\n").is_none());
    assert!(parsers::parse_top_processes("", 10).is_empty());
    assert_eq!(parsers::parse_uptime(""), None);
}
