use crate::error::Result;
use crate::platform::cache_dirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cleanup: CleanupSettings,
    pub monitoring: MonitoringSettings,
    pub processes_to_monitor: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupSettings {
    pub auto_backup: bool,
    pub confirm_before_delete: bool,
    /// Entries modified longer ago than this are swept
    pub max_cache_age_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringSettings {
    pub cpu_alert_threshold: u32,
    pub ram_alert_threshold: u32,
    pub disk_alert_threshold: u32,
}

impl Default for CleanupSettings {
    fn default() -> Self {
        Self {
            auto_backup: true,
            confirm_before_delete: true,
            max_cache_age_days: 30,
        }
    }
}

impl Default for MonitoringSettings {
    fn default() -> Self {
        Self {
            cpu_alert_threshold: 80,
            ram_alert_threshold: 85,
            disk_alert_threshold: 90,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleanup: CleanupSettings::default(),
            monitoring: MonitoringSettings::default(),
            processes_to_monitor: ["fileproviderd", "coredns", "mdworker", "bird", "cloudd"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// `~/.mac-maintenance/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let home = cache_dirs::home_dir()?;
        Ok(cache_dirs::maintenance_dir(&home).join("config.json"))
    }

    /// Read the config at `path`, falling back to defaults if the file is
    /// missing, empty or not valid JSON. Never writes.
    pub fn load_or_default(path: &Path) -> Config {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(_) => return Config::default(),
        };

        if data.trim().is_empty() {
            return Config::default();
        }

        serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Failed to load config {:?}: {}", path, e);
            Config::default()
        })
    }

    /// Load from the default location, writing the defaults out on first use
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        let exists = path.exists();
        let config = Self::load_or_default(&path);

        if !exists {
            if let Err(e) = config.save_to(&path) {
                log::warn!("Could not write default config to {:?}: {}", path, e);
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        log::info!("Config saved to {:?}", path);

        Ok(())
    }
}
