//! Operator control plane
//!
//! Manual overrides typed by an operator on the console: hand a contact back
//! to automation, take it over, or act on the contact's behalf in the main
//! menu. Commands accept their English names or the Portuguese aliases the
//! agency's operators use, with an optional leading `!`.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::config::{ControlConfig, TimingConfig};
use crate::content::{self, Reply};
use crate::models::Stage;
use crate::services::menu::MenuLifecycleManager;
use crate::services::transport::Transport;
use crate::state::scenarios::{main_menu_action, MainMenuAction};
use crate::state::storage::SessionStore;
use crate::utils::errors::{Result, TourBuddyError};
use crate::utils::logging::log_operator_action;

/// Highest main menu option `act` accepts
const MAX_ACT_OPTION: u8 = 7;

/// Parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    /// Resume automation and send the main menu
    Activate { user_id: String },
    /// Resume automation silently; the next message is treated as first contact
    Reactivate { user_id: String },
    /// Hand the contact to an operator
    Deactivate { user_id: String },
    /// Choose a main menu option for the contact
    Act { user_id: String, option: u8 },
}

impl ControlCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let raw_name = parts
            .next()
            .ok_or_else(|| TourBuddyError::InvalidInput("empty command".to_string()))?;
        let name = raw_name.strip_prefix('!').unwrap_or(raw_name).to_lowercase();

        if !matches!(
            name.as_str(),
            "activate" | "ativarbot" | "reactivate" | "reativar" | "deactivate" | "desativarbot" | "act" | "acao"
        ) {
            return Err(TourBuddyError::UnknownCommand(raw_name.to_string()));
        }

        let user_id = parts
            .next()
            .ok_or_else(|| TourBuddyError::InvalidInput(format!("{} requires a contact id", name)))?
            .to_string();

        let command = match name.as_str() {
            "activate" | "ativarbot" => ControlCommand::Activate { user_id },
            "reactivate" | "reativar" => ControlCommand::Reactivate { user_id },
            "deactivate" | "desativarbot" => ControlCommand::Deactivate { user_id },
            _ => {
                let option = parts
                    .next()
                    .and_then(|raw| raw.parse::<u8>().ok())
                    .filter(|option| *option <= MAX_ACT_OPTION)
                    .ok_or_else(|| {
                        TourBuddyError::InvalidInput(format!(
                            "act requires a main menu option between 0 and {}",
                            MAX_ACT_OPTION
                        ))
                    })?;
                ControlCommand::Act { user_id, option }
            }
        };

        if let Some(extra) = parts.next() {
            return Err(TourBuddyError::InvalidInput(format!("unexpected argument '{}'", extra)));
        }
        Ok(command)
    }

    pub fn user_id(&self) -> &str {
        match self {
            ControlCommand::Activate { user_id }
            | ControlCommand::Reactivate { user_id }
            | ControlCommand::Deactivate { user_id }
            | ControlCommand::Act { user_id, .. } => user_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ControlCommand::Activate { .. } => "activate",
            ControlCommand::Reactivate { .. } => "reactivate",
            ControlCommand::Deactivate { .. } => "deactivate",
            ControlCommand::Act { .. } => "act",
        }
    }
}

/// Applies operator commands to the session store
pub struct ControlPlane {
    store: Arc<SessionStore>,
    transport: Arc<dyn Transport>,
    menus: MenuLifecycleManager,
    user_id_pattern: Regex,
    menu_delay: Duration,
}

impl ControlPlane {
    pub fn new(
        store: Arc<SessionStore>,
        transport: Arc<dyn Transport>,
        menus: MenuLifecycleManager,
        control: &ControlConfig,
        timing: &TimingConfig,
    ) -> Result<Self> {
        let user_id_pattern = Regex::new(&control.user_id_pattern)
            .map_err(|e| TourBuddyError::Config(format!("invalid control.user_id_pattern: {}", e)))?;

        Ok(Self {
            store,
            transport,
            menus,
            user_id_pattern,
            menu_delay: timing.operator_menu_delay(),
        })
    }

    /// Parse and apply one command line, returning a summary for the console
    pub async fn execute(&self, line: &str) -> Result<String> {
        let command = ControlCommand::parse(line)?;
        let user_id = command.user_id();

        if !self.user_id_pattern.is_match(user_id) {
            return Err(TourBuddyError::InvalidInput(format!(
                "'{}' is not a valid contact id",
                user_id
            )));
        }
        if !self.store.contains(user_id) {
            return Err(TourBuddyError::SessionNotFound {
                user_id: user_id.to_string(),
            });
        }

        let summary = match &command {
            ControlCommand::Activate { user_id } => self.activate(user_id).await?,
            ControlCommand::Reactivate { user_id } => self.reactivate(user_id),
            ControlCommand::Deactivate { user_id } => self.deactivate(user_id).await?,
            ControlCommand::Act { user_id, option } => self.act(user_id, *option).await?,
        };

        self.store.persist().await;
        log_operator_action(command.name(), user_id, Some(&summary));
        Ok(summary)
    }

    async fn activate(&self, user_id: &str) -> Result<String> {
        self.store.update(user_id, |s| {
            s.human_handoff = false;
            s.stage = Stage::None;
            s.greeted = true;
            s.clear_prompt();
        });
        self.menus.send_menu(user_id, Stage::None).await?;
        Ok(format!("automation resumed for {}, main menu sent", user_id))
    }

    fn reactivate(&self, user_id: &str) -> String {
        self.store.update(user_id, |s| {
            s.human_handoff = false;
            s.stage = Stage::None;
            s.greeted = false;
            s.clear_prompt();
        });
        format!("automation resumed silently for {}", user_id)
    }

    async fn deactivate(&self, user_id: &str) -> Result<String> {
        self.store.update(user_id, |s| {
            s.enter_handoff();
            s.stage = Stage::None;
        });
        self.transport.send(user_id, Reply::OperatorTakeover.text()).await?;
        Ok(format!("{} handed to an operator", user_id))
    }

    async fn act(&self, user_id: &str, option: u8) -> Result<String> {
        let stage = match main_menu_action(option) {
            Some(MainMenuAction::OpenEvent(stage)) => stage,
            Some(MainMenuAction::Handoff(reason)) => {
                self.store.update(user_id, |s| {
                    s.enter_handoff();
                    s.stage = Stage::None;
                });
                self.transport.send(user_id, content::handoff_text(reason)).await?;
                return Ok(format!("option {} applied for {}, handed to an operator", option, user_id));
            }
            // Option 0 returns to the main menu
            None => Stage::None,
        };

        self.store.update(user_id, |s| {
            s.human_handoff = false;
            s.stage = stage;
            s.greeted = true;
            s.clear_prompt();
        });

        self.transport.send(user_id, Reply::AutomationResumed.text()).await?;
        tokio::time::sleep(self.menu_delay).await;
        self.menus.send_menu(user_id, stage).await?;
        Ok(format!("option {} applied for {}, {} menu sent", option, user_id, stage))
    }
}

/// Read commands from stdin until it closes
pub async fn run_console(control: Arc<ControlPlane>) {
    info!("Operator console ready: activate|reactivate|deactivate <id>, act <id> <0-7>");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed to read operator console");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match control.execute(&line).await {
            Ok(summary) => println!("✅ {}", summary),
            Err(e) => {
                warn!(command = %line.trim(), error = %e, "Operator command rejected");
                println!("⚠️ {}", e);
            }
        }
    }

    info!("Operator console closed");
}
