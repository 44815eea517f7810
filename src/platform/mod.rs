// Platform-specific code module

pub mod cache_dirs;
pub mod command;

// Re-exports for cleaner imports
pub use cache_dirs::{home_dir, CacheGroup, CacheTarget};
pub use command::{run, stdout_of, CommandOutput};
