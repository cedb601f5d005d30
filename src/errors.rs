use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for EasyKanban
#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Username is not correctly formatted. Please ensure that your username contains {} and is no more than {max_len} characters in length.", separator_label(.separator))]
    InvalidUsernameFormat { username: String, separator: char, max_len: usize },

    #[error("Username already exists. Please choose another one.")]
    DuplicateUsername(String),

    #[error("Password is not correctly formatted. Please ensure that the password contains at least {min_len} characters, a capital letter, a number, and a special character.")]
    InvalidPasswordFormat { min_len: usize },

    #[error("Username not found. Please register first.")]
    UnknownUser(String),

    #[error("Invalid password. Please try again.")]
    InvalidCredential,

    #[error("Please enter a task description of less than {max_len} characters")]
    DescriptionTooLong { length: usize, max_len: usize },

    #[error("Task duration must be a non-negative number of hours, got {0}")]
    InvalidDuration(f64),

    #[error("Task '{0}' not found.")]
    TaskNotFound(String),

    #[error("You must log in before managing tasks")]
    NotAuthenticated,

    #[error("Failed to read input: {0}")]
    InputError(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn separator_label(separator: &char) -> String {
    match separator {
        '_' => "an underscore".to_string(),
        other => format!("a '{}'", other),
    }
}

/// Result type specific to EasyKanban operations
pub type KanbanResult<T> = Result<T, KanbanError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,
    Error,
    Warning,
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl KanbanError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KanbanError::InputError(_) => ErrorSeverity::Fatal,
            KanbanError::Config(_) => ErrorSeverity::Error,
            KanbanError::TaskNotFound(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

impl RecoverableError for KanbanError {
    fn is_recoverable(&self) -> bool {
        !matches!(self, KanbanError::InputError(_))
    }

    fn recovery_strategy(&self) -> Option<String> {
        let hint = match self {
            KanbanError::InvalidUsernameFormat { .. }
            | KanbanError::DuplicateUsername(_)
            | KanbanError::InvalidPasswordFormat { .. } => "Restart registration with new details",
            KanbanError::UnknownUser(_) => "Register the username before logging in",
            KanbanError::InvalidCredential => "Re-enter the password",
            KanbanError::DescriptionTooLong { .. } => "Shorten the description and add the task again",
            KanbanError::InvalidDuration(_) => "Enter the duration as a positive number of hours",
            KanbanError::TaskNotFound(_) => "List all tasks to check the exact name",
            KanbanError::NotAuthenticated => "Log in with a registered account",
            KanbanError::Render(_) => "Retry with --output-format text",
            KanbanError::Config(_) => "Fix the configuration file or remove --config",
            KanbanError::InputError(_) => return None,
        };
        Some(hint.to_string())
    }
}
