// Loading and saving ~/.mac-maintenance/config.json

use mac_maint::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = Config::load_or_default(&path);

    assert_eq!(config, Config::default());
    assert!(!path.exists());
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.cleanup.max_cache_age_days = 14;
    config.monitoring.disk_alert_threshold = 95;
    config.processes_to_monitor = vec!["Dropbox".to_string()];
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_or_default(&path), config);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"monitoring": {"cpu_alert_threshold": 50}}"#).unwrap();

    let config = Config::load_or_default(&path);

    assert_eq!(config.monitoring.cpu_alert_threshold, 50);
    assert_eq!(config.monitoring.ram_alert_threshold, 85);
    assert_eq!(config.cleanup.max_cache_age_days, 30);
    assert_eq!(config.processes_to_monitor.len(), 5);
}

#[test]
fn test_unusable_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    fs::write(&path, "").unwrap();
    assert_eq!(Config::load_or_default(&path), Config::default());

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(Config::load_or_default(&path), Config::default());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_saved_file_is_pretty_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    Config::default().save_to(&path).unwrap();

    let data = fs::read_to_string(&path).unwrap();
    assert!(data.contains("\n  \"cleanup\""));
    assert!(data.contains("\"max_cache_age_days\": 30"));
}
