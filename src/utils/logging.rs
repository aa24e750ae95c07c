//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the TourBuddy application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, "tourbuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a state machine transition
pub fn log_transition(user_id: &str, from: &str, to: &str) {
    debug!(
        user_id = user_id,
        from = from,
        to = to,
        "Session transition"
    );
}

/// Log supervisor actions
pub fn log_supervisor_action(sweep: &str, user_id: &str, action: &str) {
    info!(
        sweep = sweep,
        user_id = user_id,
        action = action,
        "Supervisor action performed"
    );
}

/// Log operator actions
pub fn log_operator_action(command: &str, user_id: &str, details: Option<&str>) {
    warn!(
        command = command,
        user_id = user_id,
        details = details,
        "Operator action performed"
    );
}

/// Log transport errors with context
pub fn log_transport_error(operation: &str, error: &str, context: Option<&str>) {
    error!(
        operation = operation,
        error = error,
        context = context,
        "Transport error occurred"
    );
}
