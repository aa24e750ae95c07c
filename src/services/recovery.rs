//! Startup recovery
//!
//! Conversations that received messages while the process was down are
//! resumed by replaying only the newest message of each one through the
//! dispatcher, as if it had just arrived.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::handlers::messages::{HandleOutcome, SessionDispatcher};
use crate::services::transport::Transport;
use crate::utils::errors::Result;
use crate::utils::logging::log_transport_error;

pub struct RecoveryScanner {
    transport: Arc<dyn Transport>,
    dispatcher: Arc<SessionDispatcher>,
    pause: Duration,
}

impl RecoveryScanner {
    /// `pause` is waited after each resumed conversation
    pub fn new(transport: Arc<dyn Transport>, dispatcher: Arc<SessionDispatcher>, pause: Duration) -> Self {
        Self {
            transport,
            dispatcher,
            pause,
        }
    }

    /// Replay the newest unread message of every direct conversation
    ///
    /// Returns the number of conversations handed to the dispatcher.
    pub async fn run(&self) -> Result<usize> {
        let unread = self.transport.list_unread().await?;
        info!(conversations = unread.len(), "Scanning unread conversations");

        let mut resumed = 0;
        for conversation in unread {
            if conversation.is_group || conversation.unread_count == 0 {
                continue;
            }

            let message = match self.transport.fetch_last_message(&conversation.user_id).await {
                Ok(Some(message)) => message,
                Ok(None) => continue,
                Err(e) => {
                    log_transport_error("fetch_last_message", &e.to_string(), Some(&conversation.user_id));
                    continue;
                }
            };

            if message.from_me {
                debug!(user_id = %conversation.user_id, "Last message is our own, skipping");
                continue;
            }

            let outcome = self.dispatcher.handle(message).await;
            if outcome == HandleOutcome::Failed {
                warn!(user_id = %conversation.user_id, "Recovered message failed to process");
            }
            resumed += 1;

            tokio::time::sleep(self.pause).await;
        }

        info!(resumed = resumed, "Recovery finished");
        Ok(resumed)
    }
}
