// Well-known macOS cache, log and iCloud locations
use crate::error::{MaintError, Result};
use std::path::{Path, PathBuf};

/// A named directory whose direct children are cleanup candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTarget {
    pub label: String,
    pub path: PathBuf,
}

impl CacheTarget {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(label: S, path: P) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Groups of cache directories cleaned together by one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheGroup {
    Application,
    Browser,
    Development,
    Logs,
}

impl CacheGroup {
    pub fn title(&self) -> &'static str {
        match self {
            CacheGroup::Application => "application caches",
            CacheGroup::Browser => "browser caches",
            CacheGroup::Development => "development caches",
            CacheGroup::Logs => "logs",
        }
    }

    /// Default targets of this group rooted at `home`
    pub fn targets(&self, home: &Path) -> Vec<CacheTarget> {
        let caches = home.join("Library/Caches");

        match self {
            CacheGroup::Application => vec![
                CacheTarget::new("User cache", home.join(".cache")),
                CacheTarget::new("Library caches", caches),
            ],
            CacheGroup::Browser => vec![
                CacheTarget::new("Chrome", caches.join("Google/Chrome")),
                CacheTarget::new("Safari", caches.join("com.apple.Safari")),
                CacheTarget::new("Firefox", caches.join("Firefox")),
                CacheTarget::new("Brave", caches.join("BraveSoftware/Brave-Browser")),
            ],
            CacheGroup::Development => vec![
                CacheTarget::new("npm", home.join(".npm/_cacache")),
                CacheTarget::new("Yarn", caches.join("Yarn")),
                CacheTarget::new("Homebrew", caches.join("Homebrew")),
                CacheTarget::new("pip", caches.join("pip")),
            ],
            CacheGroup::Logs => vec![CacheTarget::new("User logs", home.join("Library/Logs"))],
        }
    }
}

/// The current user's home directory
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| MaintError::config("Could not determine home directory"))
}

/// Directory holding the tool's config and logs
pub fn maintenance_dir(home: &Path) -> PathBuf {
    home.join(".mac-maintenance")
}

pub fn log_file_path(home: &Path) -> PathBuf {
    maintenance_dir(home).join("logs").join("maintenance.log")
}

pub fn xcode_derived_data(home: &Path) -> PathBuf {
    home.join("Library/Developer/Xcode/DerivedData")
}

/// Root of iCloud Drive, where restored files are moved back to
pub fn icloud_drive_dir(home: &Path) -> PathBuf {
    home.join("Library/Mobile Documents/com~apple~CloudDocs")
}

/// Primary "Recently Deleted" mirror of iCloud Drive
pub fn icloud_trash_dir(home: &Path) -> PathBuf {
    icloud_drive_dir(home).join(".Trash")
}

/// First existing "Recently Deleted" mirror, checking the legacy location too
pub fn find_icloud_trash(home: &Path) -> Option<PathBuf> {
    [
        icloud_trash_dir(home),
        home.join("Library/Mobile Documents/.Trash"),
    ]
    .into_iter()
    .find(|path| path.exists())
}

pub fn bird_launch_agent(home: &Path) -> PathBuf {
    home.join("Library/LaunchAgents/com.apple.bird.plist")
}
