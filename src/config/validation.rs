//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{TourBuddyError, Result};
use super::Settings;

/// Upper bound for supervisor intervals and thresholds (ten years)
pub const MAX_SUPERVISOR_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_supervisor_config(&settings.supervisor)?;
    validate_control_config(&settings.control)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(TourBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    if let Some(ref api_url) = config.api_url {
        url::Url::parse(api_url).map_err(|e| TourBuddyError::Config(
            format!("Invalid bot API URL {}: {}", api_url, e)
        ))?;
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.trim().is_empty() {
        return Err(TourBuddyError::Config(
            "Session store path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate supervisor configuration
fn validate_supervisor_config(config: &super::SupervisorConfig) -> Result<()> {
    if config.purge_interval_secs == 0 || config.reminder_interval_secs == 0 {
        return Err(TourBuddyError::Config(
            "Supervisor intervals must be greater than 0".to_string()
        ));
    }

    if config.session_ttl_secs == 0 || config.reminder_after_secs == 0 {
        return Err(TourBuddyError::Config(
            "Supervisor thresholds must be greater than 0".to_string()
        ));
    }

    let values = [
        ("purge_interval_secs", config.purge_interval_secs),
        ("reminder_interval_secs", config.reminder_interval_secs),
        ("session_ttl_secs", config.session_ttl_secs),
        ("reminder_after_secs", config.reminder_after_secs),
    ];
    if let Some((name, value)) = values.iter().find(|(_, value)| *value > MAX_SUPERVISOR_SECS) {
        return Err(TourBuddyError::Config(format!(
            "supervisor.{} is {}, the maximum is {}",
            name, value, MAX_SUPERVISOR_SECS
        )));
    }

    Ok(())
}

/// Validate operator console configuration
fn validate_control_config(config: &super::ControlConfig) -> Result<()> {
    regex::Regex::new(&config.user_id_pattern).map_err(|e| TourBuddyError::Config(
        format!("Invalid user id pattern: {}", e)
    ))?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TourBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TourBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
