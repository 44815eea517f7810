// UI and formatting module

pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_percent, format_size, format_time, truncate_name};
pub use prompts::{
    ask_yes_no, banner, bold, dimmed, error, info, read_confirmation, success, warn,
};
