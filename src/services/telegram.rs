//! Telegram transport
//!
//! Implements [`Transport`] over the Bot API with `teloxide`. A contact is
//! identified by its chat id and a message handle is `"<chat_id>:<message_id>"`.
//! Texts are sent as HTML, rendered from the templates' `*bold*` markup.
//!
//! Telegram has no per-chat unread counter for bots. Messages received while
//! the bot was offline stay buffered as pending updates until a `getUpdates`
//! call confirms them, so "unread" conversations are the chats that appear in
//! that buffer.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use teloxide::payloads::{GetUpdatesSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{Chat, MessageId, ParseMode, Update, UpdateKind};
use tracing::{debug, info};

use crate::config::BotConfig;
use crate::models::MessageHandle;
use crate::services::transport::{ConversationKind, InboundMessage, Transport, UnreadConversation};
use crate::utils::errors::{Result, TourBuddyError};

/// Build a bot client from configuration
pub fn build_bot(config: &BotConfig) -> Result<Bot> {
    let bot = Bot::new(&config.token);
    match &config.api_url {
        Some(api_url) => Ok(bot.set_api_url(url::Url::parse(api_url)?)),
        None => Ok(bot),
    }
}

/// Format the handle of a sent message
pub fn format_handle(chat_id: ChatId, message_id: MessageId) -> MessageHandle {
    MessageHandle::new(format!("{}:{}", chat_id.0, message_id.0))
}

/// Split a handle back into chat and message ids
pub fn parse_handle(handle: &MessageHandle) -> Result<(ChatId, MessageId)> {
    let invalid = || TourBuddyError::InvalidInput(format!("malformed message handle '{}'", handle));

    let (chat, message) = handle.as_str().split_once(':').ok_or_else(invalid)?;
    let chat_id = chat.parse::<i64>().map_err(|_| invalid())?;
    let message_id = message.parse::<i32>().map_err(|_| invalid())?;
    Ok((ChatId(chat_id), MessageId(message_id)))
}

/// Parse a contact id into a chat id
pub fn parse_chat_id(user_id: &str) -> Result<ChatId> {
    user_id
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| TourBuddyError::InvalidInput(format!("'{}' is not a Telegram chat id", user_id)))
}

/// Render template markup as Telegram HTML
///
/// `*text*` spans become bold; a line with an unmatched `*` is left as is.
/// Everything else, rules of underscores included, is sent literally.
pub fn render_html(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    escaped.split('\n').map(bold_spans).collect::<Vec<_>>().join("\n")
}

fn bold_spans(line: &str) -> String {
    if line.matches('*').count() % 2 != 0 {
        return line.to_string();
    }

    let mut rendered = String::with_capacity(line.len() + 16);
    for (index, part) in line.split('*').enumerate() {
        if index % 2 == 0 {
            rendered.push_str(part);
        } else if part.is_empty() {
            rendered.push_str("**");
        } else {
            rendered.push_str("<b>");
            rendered.push_str(part);
            rendered.push_str("</b>");
        }
    }
    rendered
}

/// Most updates the Bot API returns per `getUpdates` call
const UPDATES_PAGE_SIZE: u8 = 100;

/// Offset that confirms every update up to `last`
fn next_offset(last: u32) -> Result<i32> {
    i32::try_from(last)
        .map(|id| id.saturating_add(1))
        .map_err(|_| TourBuddyError::Transport(format!("update id {} out of range", last)))
}

fn conversation_kind(chat: &Chat) -> ConversationKind {
    if chat.is_private() {
        ConversationKind::Direct
    } else if chat.is_channel() {
        ConversationKind::Broadcast
    } else {
        ConversationKind::Group
    }
}

/// Convert a Telegram message into the dispatcher's view of it
///
/// Messages without text (stickers, photos) are read as empty text, which the
/// dispatcher answers like any other unrecognised input.
pub fn inbound_from_message(message: &Message) -> InboundMessage {
    InboundMessage {
        user_id: message.chat.id.0.to_string(),
        text: message.text().unwrap_or_default().to_string(),
        kind: conversation_kind(&message.chat),
        from_me: message.from.as_ref().map_or(false, |user| user.is_bot),
    }
}

/// Messages buffered by the server while the bot was offline
#[derive(Debug, Default)]
struct PendingUpdates {
    /// Last update id seen; confirming `last + 1` drops the buffer
    last_update_id: Option<u32>,
    conversations: HashMap<String, PendingConversation>,
}

#[derive(Debug)]
struct PendingConversation {
    count: u32,
    latest: InboundMessage,
}

/// [`Transport`] backed by the Telegram Bot API
pub struct TelegramTransport {
    bot: Bot,
    pending: Mutex<PendingUpdates>,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self {
            bot,
            pending: Mutex::new(PendingUpdates::default()),
        }
    }

    fn pending(&self) -> std::sync::MutexGuard<'_, PendingUpdates> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read the whole server-side buffer, page by page
    ///
    /// Each page is requested past the previous one, which lets the server
    /// drop pages already cached here; the last page is only confirmed by
    /// [`TelegramTransport::acknowledge_pending`].
    async fn load_pending(&self) -> Result<()> {
        let mut pages = 0;
        loop {
            let offset = match self.pending().last_update_id {
                Some(last) => Some(next_offset(last)?),
                None => None,
            };

            let mut request = self.bot.get_updates().timeout(0).limit(UPDATES_PAGE_SIZE);
            if let Some(offset) = offset {
                request = request.offset(offset);
            }
            let updates = request.await?;
            pages += 1;

            let page_len = updates.len();
            if !self.absorb_page(updates) || page_len < usize::from(UPDATES_PAGE_SIZE) {
                break;
            }
        }

        debug!(pages = pages, conversations = self.pending().conversations.len(), "Pending updates loaded");
        Ok(())
    }

    /// Cache one page; false when it held nothing newer than what is cached
    fn absorb_page(&self, updates: Vec<Update>) -> bool {
        let mut pending = self.pending();
        let mut progressed = false;

        for update in updates {
            if pending.last_update_id.map_or(false, |last| update.id.0 <= last) {
                continue;
            }
            pending.last_update_id = Some(update.id.0);
            progressed = true;

            let message = match update.kind {
                UpdateKind::Message(message) | UpdateKind::ChannelPost(message) => message,
                _ => continue,
            };

            let inbound = inbound_from_message(&message);
            pending
                .conversations
                .entry(inbound.user_id.clone())
                .and_modify(|conversation| {
                    conversation.count += 1;
                    conversation.latest = inbound.clone();
                })
                .or_insert(PendingConversation { count: 1, latest: inbound });
        }

        progressed
    }

    /// Confirm every buffered update so live polling starts after them
    pub async fn acknowledge_pending(&self) -> Result<()> {
        let last_update_id = {
            let mut pending = self.pending();
            pending.conversations.clear();
            pending.last_update_id.take()
        };

        if let Some(last) = last_update_id {
            let offset = next_offset(last)?;
            self.bot.get_updates().offset(offset).timeout(0).limit(1).await?;
            info!(last_update_id = last, "Pending updates acknowledged");
        }

        Ok(())
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send(&self, user_id: &str, text: &str) -> Result<MessageHandle> {
        let chat_id = parse_chat_id(user_id)?;
        let message = self
            .bot
            .send_message(chat_id, render_html(text))
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(format_handle(message.chat.id, message.id))
    }

    async fn delete_message(&self, handle: &MessageHandle) -> Result<()> {
        let (chat_id, message_id) = parse_handle(handle)?;
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }

    async fn list_unread(&self) -> Result<Vec<UnreadConversation>> {
        self.load_pending().await?;

        let pending = self.pending();
        let mut conversations: Vec<UnreadConversation> = pending
            .conversations
            .iter()
            .map(|(user_id, conversation)| UnreadConversation {
                user_id: user_id.clone(),
                unread_count: conversation.count,
                is_group: conversation.latest.kind != ConversationKind::Direct,
            })
            .collect();
        conversations.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(conversations)
    }

    async fn fetch_last_message(&self, user_id: &str) -> Result<Option<InboundMessage>> {
        Ok(self
            .pending()
            .conversations
            .get(user_id)
            .map(|conversation| conversation.latest.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_format_and_parse() {
        let handle = format_handle(ChatId(-1001), MessageId(42));
        assert_eq!(handle.as_str(), "-1001:42");
        assert_eq!(parse_handle(&handle).unwrap(), (ChatId(-1001), MessageId(42)));
    }

    #[test]
    fn test_malformed_handles_are_rejected() {
        for raw in ["", "12", "a:1", "1:b", "1:2:3"] {
            assert!(parse_handle(&MessageHandle::new(raw)).is_err(), "{}", raw);
        }
    }

    #[test]
    fn test_render_html_bold_and_escaping() {
        assert_eq!(
            render_html("🚍 *DP EVENTOS TUR*\n1️⃣ - Barretos <SP> & região"),
            "🚍 <b>DP EVENTOS TUR</b>\n1️⃣ - Barretos &lt;SP&gt; &amp; região"
        );
        assert_eq!(render_html("_____________________________"), "_____________________________");
        assert_eq!(render_html("5 * 3 = 15"), "5 * 3 = 15");
        assert_eq!(render_html("*a* e *b*"), "<b>a</b> e <b>b</b>");
    }

    #[test]
    fn test_templates_render_without_stray_asterisks() {
        use crate::content::{menu_text, Reply};
        use crate::models::Stage;

        for stage in [Stage::None, Stage::Barretos, Stage::Reveillon] {
            let html = render_html(menu_text(stage));
            assert!(!html.contains('*'), "{}", html);
            assert!(html.contains("<b>"));
        }
        assert!(!render_html(Reply::MenuPrompt.text()).contains('*'));
    }

    #[test]
    fn test_parse_chat_id() {
        assert_eq!(parse_chat_id("123").unwrap(), ChatId(123));
        assert!(parse_chat_id("abc").is_err());
    }

    #[test]
    fn test_build_bot_with_custom_api_url() {
        let config = BotConfig {
            token: "123:abc".to_string(),
            api_url: Some("http://127.0.0.1:8081".to_string()),
        };
        let bot = build_bot(&config).unwrap();
        assert_eq!(bot.api_url().as_str(), "http://127.0.0.1:8081/");

        let config = BotConfig {
            token: "123:abc".to_string(),
            api_url: Some("not a url".to_string()),
        };
        assert!(build_bot(&config).is_err());
    }
}
