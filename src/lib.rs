// mac-maint library - public API

// Re-export error types
pub mod error;
pub use error::{MaintError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;

use std::fs::{self, OpenOptions};

/// Initialize logging
///
/// Records go to `~/.mac-maintenance/logs/maintenance.log`, or to stderr when
/// that file cannot be opened. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .parse_default_env();

    let log_file = platform::home_dir().ok().and_then(|home| {
        let path = platform::cache_dirs::log_file_path(&home);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    if let Some(file) = log_file {
        builder
            .write_style(env_logger::WriteStyle::Never)
            .target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second initialization (e.g. from tests) is harmless
    let _ = builder.try_init();
}
