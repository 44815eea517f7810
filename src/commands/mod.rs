// Command handlers module
pub mod clean;
pub mod completions;
pub mod config;
pub mod icloud;
pub mod menu;
pub mod process;
pub mod status;
pub mod sync;
