// Core business logic module

pub mod cleaner;
pub mod config;
pub mod icloud;
pub mod process;
pub mod sync;
pub mod system_monitor;

// Re-export commonly used items
pub use cleaner::{SweepFailure, SweepPreview, SweepReport};
pub use config::Config;
pub use icloud::{RestoreOutcome, RestoreTally, SortOption, TrashEntry};
pub use system_monitor::ResourceSnapshot;
