//! Messaging transport contract
//!
//! The core only needs to send text, delete a previously sent message and look
//! at conversations that accumulated unread messages while the bot was down.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::MessageHandle;
use crate::utils::errors::Result;

/// Kind of conversation a message arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Direct,
    Group,
    Broadcast,
}

/// Inbound message as seen by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub user_id: String,
    pub text: String,
    pub kind: ConversationKind,
    /// Sent by the bot account itself
    pub from_me: bool,
}

impl InboundMessage {
    /// Direct message from a contact
    pub fn direct(user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
            kind: ConversationKind::Direct,
            from_me: false,
        }
    }

    pub fn is_direct(&self) -> bool {
        self.kind == ConversationKind::Direct
    }
}

/// Conversation with messages the bot has not processed yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadConversation {
    pub user_id: String,
    pub unread_count: u32,
    pub is_group: bool,
}

/// Outbound side of the messaging channel
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send plain text to a contact
    async fn send(&self, user_id: &str, text: &str) -> Result<MessageHandle>;

    /// Delete a previously sent message
    async fn delete_message(&self, handle: &MessageHandle) -> Result<()>;

    /// Conversations with unread inbound messages
    async fn list_unread(&self) -> Result<Vec<UnreadConversation>>;

    /// Most recent message of a conversation
    async fn fetch_last_message(&self, user_id: &str) -> Result<Option<InboundMessage>>;
}
