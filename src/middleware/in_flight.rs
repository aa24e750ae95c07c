//! Per-user in-flight tracking
//!
//! At most one inbound message per contact is handled at a time. A message
//! that arrives while another one for the same contact is still being handled
//! is dropped, not queued.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Set of contacts whose message is currently being handled
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    users: Arc<Mutex<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mark a contact busy; `None` when it already is
    pub fn try_acquire(&self, user_id: &str) -> Option<InFlightGuard> {
        if !self.lock().insert(user_id.to_string()) {
            debug!(user_id = %user_id, "Contact already in flight");
            return None;
        }

        Some(InFlightGuard {
            registry: self.clone(),
            user_id: user_id.to_string(),
        })
    }

    pub fn is_busy(&self, user_id: &str) -> bool {
        self.lock().contains(user_id)
    }

    /// Number of contacts currently in flight
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Releases the contact when dropped, on every exit path
#[derive(Debug)]
pub struct InFlightGuard {
    registry: InFlightRegistry,
    user_id: String,
}

impl InFlightGuard {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.user_id);
    }
}
