//! Menu lifecycle management
//!
//! Every contact has at most one live menu message. Sending a new one, or
//! leaving a menu context, takes the previous handle off the session and
//! deletes that message after a delay so the chat does not fill up with stale
//! menus.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::content;
use crate::models::{MessageHandle, Stage};
use crate::services::transport::Transport;
use crate::state::storage::SessionStore;
use crate::utils::errors::Result;
use crate::utils::logging::log_transport_error;

/// Result of a deferred deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    NothingToDelete,
    Deleted,
    Failed,
}

/// Handle to a scheduled menu deletion
///
/// The deletion runs whether or not the handle is kept; `wait` only observes it.
#[derive(Debug)]
pub struct DeferredDeletion {
    task: Option<JoinHandle<DeletionOutcome>>,
}

impl DeferredDeletion {
    /// Nothing was live, nothing is scheduled
    pub fn nothing() -> Self {
        Self { task: None }
    }

    /// Delete `handle` after `delay`
    pub fn schedule(
        transport: Arc<dyn Transport>,
        user_id: &str,
        handle: MessageHandle,
        delay: Duration,
    ) -> Self {
        let user_id = user_id.to_string();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match transport.delete_message(&handle).await {
                Ok(()) => {
                    debug!(user_id = %user_id, handle = %handle, "Menu message deleted");
                    DeletionOutcome::Deleted
                }
                Err(e) => {
                    let context = format!("user {} handle {}", user_id, handle);
                    log_transport_error("delete_message", &e.to_string(), Some(&context));
                    DeletionOutcome::Failed
                }
            }
        });

        Self { task: Some(task) }
    }

    pub fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }

    /// Wait for the deletion to finish
    pub async fn wait(self) -> DeletionOutcome {
        match self.task {
            None => DeletionOutcome::NothingToDelete,
            Some(task) => task.await.unwrap_or_else(|e| {
                warn!(error = %e, "Menu deletion task did not complete");
                DeletionOutcome::Failed
            }),
        }
    }
}

/// Sends menus and retires the previous live menu of a contact
#[derive(Clone)]
pub struct MenuLifecycleManager {
    store: Arc<SessionStore>,
    transport: Arc<dyn Transport>,
    deletion_delay: Duration,
}

impl MenuLifecycleManager {
    pub fn new(store: Arc<SessionStore>, transport: Arc<dyn Transport>, deletion_delay: Duration) -> Self {
        Self {
            store,
            transport,
            deletion_delay,
        }
    }

    /// Send the menu of `stage` and schedule deletion of the previous live menu
    ///
    /// Event menus become the live menu. The main menu is the resting state of
    /// a conversation and is never recorded, so sending it clears the record.
    /// On send failure the record is left untouched.
    pub async fn send_menu(&self, user_id: &str, stage: Stage) -> Result<DeferredDeletion> {
        let handle = self.transport.send(user_id, content::menu_text(stage)).await?;
        let recorded = stage.is_event().then_some(handle);

        let previous = self
            .store
            .update(user_id, |session| {
                std::mem::replace(&mut session.last_menu_message_id, recorded)
            })
            .flatten();

        debug!(user_id = %user_id, stage = %stage, replaced = previous.is_some(), "Menu sent");
        Ok(self.schedule(user_id, previous))
    }

    /// Take the live menu off the session and delete it after the delay
    pub fn delete_live_menu(&self, user_id: &str) -> DeferredDeletion {
        let previous = self
            .store
            .update(user_id, |session| session.last_menu_message_id.take())
            .flatten();

        self.schedule(user_id, previous)
    }

    fn schedule(&self, user_id: &str, handle: Option<MessageHandle>) -> DeferredDeletion {
        match handle {
            Some(handle) => DeferredDeletion::schedule(
                self.transport.clone(),
                user_id,
                handle,
                self.deletion_delay,
            ),
            None => DeferredDeletion::nothing(),
        }
    }

    pub fn deletion_delay(&self) -> Duration {
        self.deletion_delay
    }
}
