//! Message handlers module
//!
//! Routes inbound contact messages through the session state machine:
//! main menu, event menus, the post-content prompt and human handoff.

use std::sync::Arc;
use std::time::Duration;

use teloxide::types::Message;
use tracing::{debug, error, info};

use crate::config::{BehaviorConfig, TimingConfig};
use crate::content::{self, Reply};
use crate::middleware::InFlightRegistry;
use crate::models::Stage;
use crate::services::menu::MenuLifecycleManager;
use crate::services::telegram::inbound_from_message;
use crate::services::transport::{InboundMessage, Transport};
use crate::state::input::UserInput;
use crate::state::scenarios::{
    event_action, main_menu_action, prompt_action, EventAction, MainMenuAction, PromptAction,
};
use crate::state::storage::SessionStore;
use crate::utils::errors::Result;
use crate::utils::helpers::{now_millis, truncate_text};
use crate::utils::logging::{log_transition, log_user_action};

/// What happened to an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// Group or broadcast message, own message, or contact in human handoff
    Ignored,
    /// Another message of the same contact was still being handled
    Dropped,
    Processed,
    /// Handling stopped on a transport error
    Failed,
}

/// Per-contact conversation state machine
pub struct SessionDispatcher {
    store: Arc<SessionStore>,
    transport: Arc<dyn Transport>,
    menus: MenuLifecycleManager,
    in_flight: InFlightRegistry,
    timing: TimingConfig,
    behavior: BehaviorConfig,
}

impl SessionDispatcher {
    pub fn new(
        store: Arc<SessionStore>,
        transport: Arc<dyn Transport>,
        menus: MenuLifecycleManager,
        in_flight: InFlightRegistry,
        timing: TimingConfig,
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            store,
            transport,
            menus,
            in_flight,
            timing,
            behavior,
        }
    }

    /// Handle one inbound message
    ///
    /// Never fails: errors are logged here and only abort this message. The
    /// store is persisted on every path that reached the state machine.
    pub async fn handle(&self, message: InboundMessage) -> HandleOutcome {
        if !message.is_direct() || message.from_me {
            debug!(user_id = %message.user_id, kind = ?message.kind, "Ignoring non-direct message");
            return HandleOutcome::Ignored;
        }

        let Some(_guard) = self.in_flight.try_acquire(&message.user_id) else {
            info!(user_id = %message.user_id, "Dropping message, previous one still in flight");
            return HandleOutcome::Dropped;
        };

        let outcome = match self.process(&message.user_id, &message.text).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    user_id = %message.user_id,
                    error = %e,
                    severity = ?e.severity(),
                    recoverable = e.is_recoverable(),
                    "Failed to handle message"
                );
                HandleOutcome::Failed
            }
        };

        self.store.persist().await;
        outcome
    }

    async fn process(&self, user_id: &str, text: &str) -> Result<HandleOutcome> {
        let (session, created) = self.store.touch(user_id, now_millis());
        let input = UserInput::parse(text);

        log_user_action(user_id, "message", Some(&truncate_text(text, 60)));
        if created {
            debug!(user_id = %user_id, "Session created");
        }

        if session.human_handoff {
            let exits = input == UserInput::MenuKeyword && self.behavior.menu_keyword_exits_handoff;
            if !exits {
                debug!(user_id = %user_id, "Contact is with an operator, ignoring");
                return Ok(HandleOutcome::Ignored);
            }
            self.store.update(user_id, |s| s.human_handoff = false);
        }

        if input == UserInput::MenuKeyword {
            self.resend_menu(user_id, session.stage).await?;
        } else if !session.stage.is_event() {
            if session.greeted {
                self.main_menu(user_id, &input).await?;
            } else {
                self.greet(user_id).await?;
            }
        } else if session.awaiting_menu_prompt {
            self.awaiting_prompt(user_id, session.stage, &input).await?;
        } else {
            self.event_menu(user_id, session.stage, &input).await?;
        }

        if let Some(after) = self.store.get(user_id) {
            log_transition(user_id, &session.state_label(), &after.state_label());
        }
        Ok(HandleOutcome::Processed)
    }

    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    async fn send(&self, user_id: &str, reply: Reply) -> Result<()> {
        self.transport.send(user_id, reply.text()).await?;
        Ok(())
    }

    /// `menu` keyword: show the menu of the current context again
    async fn resend_menu(&self, user_id: &str, stage: Stage) -> Result<()> {
        self.pause(self.timing.human_like_delay()).await;
        self.menus.send_menu(user_id, stage).await?;
        self.store.update(user_id, |s| {
            s.clear_prompt();
            s.greeted = true;
        });
        Ok(())
    }

    /// First message of a new contact
    async fn greet(&self, user_id: &str) -> Result<()> {
        self.pause(self.timing.human_like_delay()).await;
        self.menus.send_menu(user_id, Stage::None).await?;
        self.store.update(user_id, |s| s.greeted = true);
        Ok(())
    }

    async fn main_menu(&self, user_id: &str, input: &UserInput) -> Result<()> {
        self.pause(self.timing.human_like_delay()).await;

        match input.option().and_then(main_menu_action) {
            Some(MainMenuAction::OpenEvent(stage)) => {
                self.store.update(user_id, |s| {
                    s.stage = stage;
                    s.clear_prompt();
                });
                self.menus.send_menu(user_id, stage).await?;
            }
            Some(MainMenuAction::Handoff(reason)) => {
                self.menus.delete_live_menu(user_id);
                self.store.update(user_id, |s| s.enter_handoff());
                self.transport.send(user_id, content::handoff_text(reason)).await?;
                log_user_action(user_id, "handoff", Some(&format!("{:?}", reason)));
            }
            None => self.send(user_id, Reply::InvalidOption).await?,
        }
        Ok(())
    }

    async fn event_menu(&self, user_id: &str, stage: Stage, input: &UserInput) -> Result<()> {
        let action = input.option().and_then(|option| event_action(stage, option));

        match action {
            Some(EventAction::Info(topic)) => match content::info_text(stage, topic) {
                Some(text) => self.send_content(user_id, &text).await,
                None => self.send(user_id, Reply::InvalidOption).await,
            },
            Some(EventAction::ReserveSlot) => self.hand_off(user_id, Reply::ReservationRequested).await,
            Some(EventAction::TalkToAgent) => self.hand_off(user_id, Reply::AgentHandoff).await,
            Some(EventAction::BackToMainMenu) => self.back_to_main_menu(user_id).await,
            Some(EventAction::EndSession) => self.end_session(user_id).await,
            None => self.send(user_id, Reply::InvalidOption).await,
        }
    }

    async fn awaiting_prompt(&self, user_id: &str, stage: Stage, input: &UserInput) -> Result<()> {
        self.store.update(user_id, |s| s.clear_prompt());

        match input.option().and_then(prompt_action) {
            Some(PromptAction::ShowEventMenu) => {
                self.menus.send_menu(user_id, stage).await?;
            }
            Some(PromptAction::TalkToAgent) => self.hand_off(user_id, Reply::AgentHandoff).await?,
            Some(PromptAction::EndSession) => self.end_session(user_id).await?,
            None => {
                self.send(user_id, Reply::InvalidOption).await?;
                self.pause(self.timing.reprompt_delay()).await;
                self.send(user_id, Reply::MenuPrompt).await?;
                self.store.update(user_id, |s| s.arm_prompt(now_millis()));
            }
        }
        Ok(())
    }

    /// Informational content, then the prompt, then retire the event menu
    async fn send_content(&self, user_id: &str, text: &str) -> Result<()> {
        self.pause(self.timing.human_like_delay()).await;
        self.transport.send(user_id, text).await?;

        self.pause(self.timing.prompt_delay()).await;
        self.send(user_id, Reply::MenuPrompt).await?;

        self.menus.delete_live_menu(user_id);
        self.store.update(user_id, |s| s.arm_prompt(now_millis()));
        Ok(())
    }

    async fn hand_off(&self, user_id: &str, reply: Reply) -> Result<()> {
        self.send(user_id, Reply::MenuCleanupNotice).await?;
        self.pause(self.timing.farewell_delay()).await;
        self.send(user_id, reply).await?;

        self.menus.delete_live_menu(user_id);
        self.store.update(user_id, |s| s.enter_handoff());
        log_user_action(user_id, "handoff", Some(&format!("{:?}", reply)));
        Ok(())
    }

    async fn back_to_main_menu(&self, user_id: &str) -> Result<()> {
        self.send(user_id, Reply::MenuCleanupNotice).await?;
        self.pause(self.timing.farewell_delay()).await;
        self.send(user_id, Reply::ReturningToMainMenu).await?;

        self.menus.delete_live_menu(user_id);
        self.store.update(user_id, |s| {
            s.stage = Stage::None;
            s.clear_prompt();
        });

        self.pause(self.timing.main_menu_return_delay()).await;
        self.menus.send_menu(user_id, Stage::None).await?;
        Ok(())
    }

    async fn end_session(&self, user_id: &str) -> Result<()> {
        self.send(user_id, Reply::MenuCleanupNotice).await?;
        self.pause(self.timing.farewell_delay()).await;
        self.send(user_id, Reply::Farewell).await?;

        self.menus.delete_live_menu(user_id);
        self.store.remove(user_id);
        log_user_action(user_id, "session_ended", None);
        Ok(())
    }
}

/// Telegram endpoint: hand the message to the dispatcher on its own task
///
/// Returning right away lets teloxide deliver the next update of the same chat
/// while this one is still being handled, so the in-flight rule can drop it.
pub async fn handle_message(
    msg: Message,
    dispatcher: Arc<SessionDispatcher>,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let inbound = inbound_from_message(&msg);
    tokio::spawn(async move {
        dispatcher.handle(inbound).await;
    });
    Ok(())
}
