//! Session store implementation
//!
//! This module keeps the in-memory map of contact sessions and persists it
//! through a pluggable backend. The JSON file backend writes a temporary file
//! and renames it over the previous copy, so a crash mid-write never leaves a
//! truncated state file behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::models::Session;
use crate::utils::errors::{Result, TourBuddyError};

/// Sessions keyed by contact id
pub type SessionMap = HashMap<String, Session>;

/// Durable storage for the whole session map
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Load the stored map; an absent store is an empty map
    async fn load(&self) -> Result<SessionMap>;

    /// Replace the stored map
    async fn save(&self, sessions: &SessionMap) -> Result<()>;
}

/// Pretty-printed JSON file replaced atomically on every save
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next snapshot is written to before the rename
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl StoreBackend for JsonFileBackend {
    async fn load(&self) -> Result<SessionMap> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No state file yet");
                return Ok(SessionMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(SessionMap::new());
        }

        serde_json::from_str(&data).map_err(|e| {
            TourBuddyError::Persistence(format!(
                "malformed state file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, sessions: &SessionMap) -> Result<()> {
        let serialized = serde_json::to_string_pretty(sessions)?;
        let temp_path = self.temp_path();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let written = async {
            tokio::fs::write(&temp_path, serialized.as_bytes()).await?;
            tokio::fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            // The previous state file stays in place; only the partial copy goes
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(TourBuddyError::Persistence(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), sessions = sessions.len(), "State file written");
        Ok(())
    }
}

/// Volatile backend, used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: Mutex<SessionMap>,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing stored map
    pub fn with_sessions(sessions: SessionMap) -> Self {
        Self {
            stored: Mutex::new(sessions),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Last successfully saved map
    pub fn stored(&self) -> SessionMap {
        self.stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl StoreBackend for MemoryBackend {
    async fn load(&self) -> Result<SessionMap> {
        Ok(self.stored())
    }

    async fn save(&self, sessions: &SessionMap) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(TourBuddyError::Persistence(
                "memory backend configured to fail".to_string(),
            ));
        }

        *self
            .stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = sessions.clone();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Shared map of contact sessions
///
/// Every mutation is a short critical section that never awaits. Updates to an
/// absent contact are no-ops, so a session removed while a handler was sleeping
/// is never brought back.
pub struct SessionStore {
    sessions: Mutex<SessionMap>,
    backend: Arc<dyn StoreBackend>,
    persist_lock: tokio::sync::Mutex<()>,
}

impl SessionStore {
    /// Create a store with the given sessions, without touching the backend
    pub fn new(backend: Arc<dyn StoreBackend>, sessions: SessionMap) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            backend,
            persist_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Load the backend's sessions; unreadable state starts an empty store
    pub async fn open(backend: Arc<dyn StoreBackend>) -> Self {
        let sessions = match backend.load().await {
            Ok(sessions) => {
                info!(sessions = sessions.len(), "Session store loaded");
                sessions
            }
            Err(e) => {
                error!(error = %e, "Failed to load session store, starting empty");
                SessionMap::new()
            }
        };

        Self::new(backend, sessions)
    }

    fn lock(&self) -> MutexGuard<'_, SessionMap> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of a contact's session
    pub fn get(&self, user_id: &str) -> Option<Session> {
        self.lock().get(user_id).cloned()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.lock().contains_key(user_id)
    }

    /// Record an inbound message, creating the session on first contact
    ///
    /// Returns the session after the touch and whether it was just created.
    pub fn touch(&self, user_id: &str, now: DateTime<Utc>) -> (Session, bool) {
        let mut sessions = self.lock();
        let mut created = false;
        let session = sessions.entry(user_id.to_string()).or_insert_with(|| {
            created = true;
            Session::new(now)
        });
        session.last_interaction_at = now;
        (session.clone(), created)
    }

    /// Mutate a contact's session in place; no-op when it does not exist
    pub fn update<R>(&self, user_id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.lock().get_mut(user_id).map(f)
    }

    pub fn insert(&self, user_id: &str, session: Session) {
        self.lock().insert(user_id.to_string(), session);
    }

    pub fn remove(&self, user_id: &str) -> Option<Session> {
        self.lock().remove(user_id)
    }

    /// Remove a session only if it still satisfies `predicate`
    pub fn remove_if(
        &self,
        user_id: &str,
        predicate: impl FnOnce(&Session) -> bool,
    ) -> Option<Session> {
        let mut sessions = self.lock();
        if sessions.get(user_id).map_or(false, predicate) {
            sessions.remove(user_id)
        } else {
            None
        }
    }

    /// Ids of every stored contact
    pub fn user_ids(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn snapshot(&self) -> SessionMap {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Write the current map to the backend
    ///
    /// Saves are serialized and each one snapshots the map after acquiring the
    /// lock, so the last completed save always holds the newest state.
    pub async fn save(&self) -> Result<()> {
        let _guard = self.persist_lock.lock().await;
        let snapshot = self.snapshot();
        self.backend.save(&snapshot).await
    }

    /// Save, logging failures instead of returning them
    pub async fn persist(&self) {
        if let Err(e) = self.save().await {
            error!(error = %e, "Failed to persist session store");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stage;
    use crate::utils::helpers::now_millis;

    fn store_with_memory() -> (SessionStore, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (SessionStore::new(backend.clone(), SessionMap::new()), backend)
    }

    #[test]
    fn test_touch_creates_once() {
        let (store, _) = store_with_memory();
        let now = now_millis();

        let (_, created) = store.touch("1", now);
        assert!(created);
        let (session, created) = store.touch("1", now);
        assert!(!created);
        assert_eq!(session.last_interaction_at, now);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_never_resurrects() {
        let (store, _) = store_with_memory();
        store.touch("1", now_millis());
        store.remove("1");

        let result = store.update("1", |s| s.stage = Stage::Barretos);
        assert!(result.is_none());
        assert!(!store.contains("1"));
    }

    #[test]
    fn test_remove_if_checks_predicate() {
        let (store, _) = store_with_memory();
        store.touch("1", now_millis());

        assert!(store.remove_if("1", |s| s.human_handoff).is_none());
        assert!(store.remove_if("1", |s| !s.human_handoff).is_some());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_save_writes_snapshot_to_backend() {
        let (store, backend) = store_with_memory();
        store.touch("7", now_millis());

        store.save().await.unwrap();

        assert_eq!(backend.save_count(), 1);
        assert_eq!(backend.stored(), store.snapshot());
    }

    #[tokio::test]
    async fn test_persist_swallows_failures() {
        let (store, backend) = store_with_memory();
        backend.set_fail_saves(true);
        store.touch("7", now_millis());

        assert!(store.save().await.is_err());
        store.persist().await;
        assert_eq!(backend.save_count(), 0);
        assert!(store.contains("7"));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let backend = JsonFileBackend::new("data/userState.json");
        assert_eq!(backend.temp_path(), PathBuf::from("data/userState.json.tmp"));
    }
}
