//! Session record model
//!
//! One record per contact, persisted with the field names and encodings of the
//! durable store document (camelCase keys, epoch-millisecond timestamps).

use std::fmt;
use chrono::{DateTime, Utc, Duration};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::helpers::is_older_than;

/// Event menu context a session is in; `None` is the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    #[default]
    None,
    Barretos,
    Jaguariuna,
    FederalFantasy,
    Reveillon,
}

impl Stage {
    pub fn is_event(self) -> bool {
        self != Stage::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::None => "none",
            Stage::Barretos => "barretos",
            Stage::Jaguariuna => "jaguariuna",
            Stage::FederalFantasy => "federalFantasy",
            Stage::Reveillon => "reveillon",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque transport handle of a sent message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHandle(pub String);

impl MessageHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conversation state of a single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, deserialize_with = "deserialize_stage")]
    pub stage: Stage,
    #[serde(default)]
    pub human_handoff: bool,
    #[serde(default)]
    pub greeted: bool,
    #[serde(default)]
    pub last_menu_message_id: Option<MessageHandle>,
    #[serde(default)]
    pub awaiting_menu_prompt: bool,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prompt_issued_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reminder_sent: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_interaction_at: DateTime<Utc>,
}

/// Older state files store the main menu stage as `null`
fn deserialize_stage<'de, D>(deserializer: D) -> Result<Stage, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Stage>::deserialize(deserializer)?.unwrap_or_default())
}

impl Session {
    /// Create a fresh main-menu session
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            stage: Stage::None,
            human_handoff: false,
            greeted: false,
            last_menu_message_id: None,
            awaiting_menu_prompt: false,
            prompt_issued_at: None,
            reminder_sent: false,
            last_interaction_at: now,
        }
    }

    /// Leave the prompt cycle
    pub fn clear_prompt(&mut self) {
        self.awaiting_menu_prompt = false;
        self.prompt_issued_at = None;
        self.reminder_sent = false;
    }

    /// Start a new prompt cycle
    pub fn arm_prompt(&mut self, now: DateTime<Utc>) {
        self.awaiting_menu_prompt = true;
        self.prompt_issued_at = Some(now);
        self.reminder_sent = false;
    }

    /// Suspend automation until an operator clears the handoff
    pub fn enter_handoff(&mut self) {
        self.human_handoff = true;
        self.clear_prompt();
    }

    /// Whether the prompt has gone unanswered for longer than `threshold`
    pub fn prompt_is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        self.awaiting_menu_prompt
            && self
                .prompt_issued_at
                .map_or(false, |issued| is_older_than(issued, now, threshold))
    }

    /// Whether the contact has been silent for longer than `threshold`
    pub fn is_inactive(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        is_older_than(self.last_interaction_at, now, threshold)
    }

    /// Abstract state machine position, for logging
    pub fn state_label(&self) -> String {
        if self.human_handoff {
            "humanHandoff".to_string()
        } else if !self.stage.is_event() {
            "mainMenu".to_string()
        } else if self.awaiting_menu_prompt {
            format!("awaitingPrompt({})", self.stage)
        } else {
            format!("eventMenu({})", self.stage)
        }
    }
}
