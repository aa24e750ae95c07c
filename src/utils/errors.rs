//! Error handling for TourBuddy
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for TourBuddy application
#[derive(Error, Debug)]
pub enum TourBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session not found: {user_id}")]
    SessionNotFound { user_id: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for TourBuddy operations
pub type Result<T> = std::result::Result<T, TourBuddyError>;

impl TourBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TourBuddyError::Telegram(_) => true,
            TourBuddyError::Transport(_) => true,
            TourBuddyError::Config(_) => false,
            TourBuddyError::SessionNotFound { .. } => true,
            TourBuddyError::UnknownCommand(_) => true,
            TourBuddyError::Persistence(_) => true,
            TourBuddyError::Serialization(_) => false,
            TourBuddyError::Io(_) => true,
            TourBuddyError::UrlParse(_) => false,
            TourBuddyError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourBuddyError::Config(_) => ErrorSeverity::Critical,
            TourBuddyError::UrlParse(_) => ErrorSeverity::Critical,
            TourBuddyError::SessionNotFound { .. } => ErrorSeverity::Warning,
            TourBuddyError::UnknownCommand(_) => ErrorSeverity::Warning,
            TourBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
