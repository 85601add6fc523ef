// Shared helpers for the interactive tracker CLI
pub mod menu;
pub mod input;
pub mod formatting;

pub use menu::Menu;
pub use input::Input;
pub use formatting::{format_table, format_record};

use crate::utils::errors::TrackerError;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug)]
pub enum CliError {
    ValidationError(String),
    NotFound(String),
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<TrackerError> for CliError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::NotFound(what) => CliError::NotFound(what),
            TrackerError::Validation(msg) => CliError::ValidationError(msg),
        }
    }
}

/// Confirm a destructive operation
pub fn confirm(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new().with_prompt(message).default(false).interact()?)
}

/// Print a success message
pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✓ {}", message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("⚠ {}", message).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_errors_convert() {
        let err: CliError = TrackerError::not_found("Expense").into();
        assert_eq!(err.to_string(), "Not found: Expense");

        let err: CliError = TrackerError::validation("amount must be greater than zero").into();
        assert_eq!(err.to_string(), "Validation error: amount must be greater than zero");
    }
}
