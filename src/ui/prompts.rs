// UI prompts and user interaction module

use colored::Colorize;
use std::io::{self, Write};

/// Ask user for confirmation with retry logic for IO errors
///
/// # Returns
/// * `Ok(true)` - User confirmed (y/yes)
/// * `Ok(false)` - User declined (n/no or any other input)
/// * `Err` - IO error after max attempts
pub fn read_confirmation(prompt: &str, max_attempts: u32) -> anyhow::Result<bool> {
    for attempt in 1..=max_attempts {
        print!("{}", prompt.white().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => return Ok(is_affirmative(&input)),
            Err(e) if attempt < max_attempts => {
                println!(
                    "{}",
                    format!(
                        "Error reading input (attempt {}/{}): {}",
                        attempt, max_attempts, e
                    )
                    .yellow()
                );
                println!("{}", "Retrying...".dimmed());
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to read confirmation after {} attempts: {}",
                    max_attempts,
                    e
                ));
            }
        }
    }
    Ok(false)
}

/// Prompt that treats unreadable input as "no"
///
/// Suitable as a confirmation callback for destructive core operations.
pub fn ask_yes_no(prompt: &str) -> bool {
    match read_confirmation(&format!("{} (y/n): ", prompt), 3) {
        Ok(answer) => answer,
        Err(e) => {
            error(&format!("{}", e));
            false
        }
    }
}

/// `y` or `yes`, case-insensitive, surrounding whitespace ignored
pub fn is_affirmative(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}

/// Boxed section title
pub fn banner(title: &str) {
    let width = 40;
    println!();
    println!("{}", format!("╔{}╗", "═".repeat(width)).cyan());
    println!("{}", format!("║{:^width$}║", title, width = width).cyan().bold());
    println!("{}", format!("╚{}╝", "═".repeat(width)).cyan());
    println!();
}

/// Display a warning message
pub fn warn(message: &str) {
    println!("{}", format!("⚠️  {}", message).yellow().bold());
}

/// Display an info message
pub fn info(message: &str) {
    println!("{}", message.cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", format!("✅ {}", message).green().bold());
}

/// Display an error message
pub fn error(message: &str) {
    println!("{}", format!("❌ {}", message).red().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}

/// Display a bold white message
pub fn bold(message: &str) {
    println!("{}", message.white().bold());
}
