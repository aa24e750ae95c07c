//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub timing: TimingConfig,
    pub supervisor: SupervisorConfig,
    pub control: ControlConfig,
    pub behavior: BehaviorConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Overrides the Bot API endpoint (local Bot API servers, tests)
    pub api_url: Option<String>,
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub path: String,
}

/// Pacing delays, all in milliseconds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingConfig {
    pub human_like_delay_ms: u64,
    pub deletion_delay_ms: u64,
    pub prompt_delay_ms: u64,
    pub farewell_delay_ms: u64,
    pub main_menu_return_delay_ms: u64,
    pub reprompt_delay_ms: u64,
    pub operator_menu_delay_ms: u64,
}

/// Inactivity supervisor configuration, all in seconds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupervisorConfig {
    pub purge_interval_secs: u64,
    pub session_ttl_secs: u64,
    pub reminder_interval_secs: u64,
    pub reminder_after_secs: u64,
}

/// Operator console configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlConfig {
    pub console_enabled: bool,
    pub user_id_pattern: String,
}

/// Conversation behavior switches
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorConfig {
    /// Let the `menu` keyword also end a human handoff
    pub menu_keyword_exits_handoff: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
}

impl TimingConfig {
    pub fn human_like_delay(&self) -> Duration {
        Duration::from_millis(self.human_like_delay_ms)
    }

    pub fn deletion_delay(&self) -> Duration {
        Duration::from_millis(self.deletion_delay_ms)
    }

    pub fn prompt_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_delay_ms)
    }

    pub fn farewell_delay(&self) -> Duration {
        Duration::from_millis(self.farewell_delay_ms)
    }

    pub fn main_menu_return_delay(&self) -> Duration {
        Duration::from_millis(self.main_menu_return_delay_ms)
    }

    pub fn reprompt_delay(&self) -> Duration {
        Duration::from_millis(self.reprompt_delay_ms)
    }

    pub fn operator_menu_delay(&self) -> Duration {
        Duration::from_millis(self.operator_menu_delay_ms)
    }
}

impl SupervisorConfig {
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }

    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs)
    }

    /// Inactivity after which a session is purged
    pub fn session_ttl(&self) -> chrono::Duration {
        threshold(self.session_ttl_secs)
    }

    /// Silence after a prompt before a reminder (and then termination) is issued
    pub fn reminder_after(&self) -> chrono::Duration {
        threshold(self.reminder_after_secs)
    }
}

/// Out-of-range values saturate, so an oversized threshold never expires anything
fn threshold(secs: u64) -> chrono::Duration {
    i64::try_from(secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .unwrap_or_else(chrono::Duration::max_value)
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("TOURBUDDY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TourBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                api_url: None,
            },
            storage: StorageConfig {
                path: "userState.json".to_string(),
            },
            timing: TimingConfig {
                human_like_delay_ms: 1500,
                deletion_delay_ms: 5000,
                prompt_delay_ms: 1500,
                farewell_delay_ms: 2000,
                main_menu_return_delay_ms: 700,
                reprompt_delay_ms: 1000,
                operator_menu_delay_ms: 500,
            },
            supervisor: SupervisorConfig {
                purge_interval_secs: 60 * 60,
                session_ttl_secs: 48 * 60 * 60,
                reminder_interval_secs: 60,
                reminder_after_secs: 60 * 60,
            },
            control: ControlConfig {
                console_enabled: true,
                user_id_pattern: r"^-?\d+$".to_string(),
            },
            behavior: BehaviorConfig {
                menu_keyword_exits_handoff: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs".to_string(),
            },
        }
    }
}
