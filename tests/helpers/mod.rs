//! Test helpers module
//!
//! This module provides a recording transport and a fully wired application
//! context backed by an in-memory store.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use TourBuddy::config::Settings;
use TourBuddy::models::{MessageHandle, Session, Stage};
use TourBuddy::services::transport::{InboundMessage, Transport, UnreadConversation};
use TourBuddy::state::{AppContext, MemoryBackend, SessionMap, SessionStore};
use TourBuddy::utils::errors::{Result, TourBuddyError};

pub const USER: &str = "5511987654321";

/// Outbound message captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub user_id: String,
    pub text: String,
    pub handle: MessageHandle,
}

/// Callback run at the start of every `send`, with the contact id and text
#[derive(Default)]
pub struct SendHook(Option<Arc<dyn Fn(&str, &str) + Send + Sync>>);

impl std::fmt::Debug for SendHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0.is_some() { "SendHook(set)" } else { "SendHook(none)" })
    }
}

/// Transport that records every call; handles are `m1`, `m2`, ...
#[derive(Debug, Default)]
pub struct RecordingTransport {
    on_send: Mutex<SendHook>,
    sent: Mutex<Vec<SentMessage>>,
    deleted: Mutex<Vec<MessageHandle>>,
    next_id: AtomicUsize,
    fail_sends: AtomicBool,
    fail_deletes: AtomicBool,
    unread: Mutex<Vec<UnreadConversation>>,
    last_messages: Mutex<HashMap<String, InboundMessage>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent to one contact, in order
    pub fn texts_to(&self, user_id: &str) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.text)
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.sent().last().map(|m| m.text.clone())
    }

    pub fn deleted(&self) -> Vec<MessageHandle> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Run `hook` while a send is in progress, before it is recorded
    pub fn on_send(&self, hook: impl Fn(&str, &str) + Send + Sync + 'static) {
        *self.on_send.lock().unwrap() = SendHook(Some(Arc::new(hook)));
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
        self.deleted.lock().unwrap().clear();
    }

    /// Register an unread conversation and its newest message
    pub fn add_unread(&self, user_id: &str, unread_count: u32, is_group: bool, last: Option<InboundMessage>) {
        self.unread.lock().unwrap().push(UnreadConversation {
            user_id: user_id.to_string(),
            unread_count,
            is_group,
        });
        if let Some(message) = last {
            self.last_messages.lock().unwrap().insert(user_id.to_string(), message);
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, user_id: &str, text: &str) -> Result<MessageHandle> {
        let hook = self.on_send.lock().unwrap().0.clone();
        if let Some(hook) = hook {
            hook(user_id, text);
        }

        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TourBuddyError::Transport("send failed".to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let handle = MessageHandle::new(format!("m{}", id));
        self.sent.lock().unwrap().push(SentMessage {
            user_id: user_id.to_string(),
            text: text.to_string(),
            handle: handle.clone(),
        });
        Ok(handle)
    }

    async fn delete_message(&self, handle: &MessageHandle) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(TourBuddyError::Transport("message already gone".to_string()));
        }
        self.deleted.lock().unwrap().push(handle.clone());
        Ok(())
    }

    async fn list_unread(&self) -> Result<Vec<UnreadConversation>> {
        Ok(self.unread.lock().unwrap().clone())
    }

    async fn fetch_last_message(&self, user_id: &str) -> Result<Option<InboundMessage>> {
        Ok(self.last_messages.lock().unwrap().get(user_id).cloned())
    }
}

/// Default settings with a dummy token
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = "12345:test_token".to_string();
    settings.control.console_enabled = false;
    settings
}

/// Application wired to a recording transport and an in-memory backend
pub struct TestApp {
    pub context: AppContext,
    pub transport: Arc<RecordingTransport>,
    pub backend: Arc<MemoryBackend>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(test_settings())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let transport = RecordingTransport::new();
        let backend = Arc::new(MemoryBackend::new());
        let store = Arc::new(SessionStore::new(backend.clone(), SessionMap::new()));
        let context = AppContext::new(settings, store, transport.clone()).expect("valid test settings");

        Self {
            context,
            transport,
            backend,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.context.store
    }

    pub fn session(&self, user_id: &str) -> Option<Session> {
        self.context.store.get(user_id)
    }

    /// Deliver a direct message and return the outcome
    pub async fn say(&self, user_id: &str, text: &str) -> TourBuddy::HandleOutcome {
        self.context
            .dispatcher
            .handle(InboundMessage::direct(user_id, text))
            .await
    }

    /// Let scheduled menu deletions run
    pub async fn settle_deletions(&self) {
        let delay = self.context.settings.timing.deletion_delay();
        tokio::time::sleep(delay + std::time::Duration::from_millis(10)).await;
    }
}

/// Greeted session at the given stage
pub fn session_at(stage: Stage, now: DateTime<Utc>) -> Session {
    let mut session = Session::new(now);
    session.stage = stage;
    session.greeted = true;
    session
}
