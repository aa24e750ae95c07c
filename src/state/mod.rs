//! State management module
//!
//! This module handles the session store, input classification, the menu
//! transition tables and the application context.

pub mod context;
pub mod input;
pub mod scenarios;
pub mod storage;

// Re-export commonly used state components
pub use context::AppContext;
pub use input::UserInput;
pub use scenarios::{EventAction, HandoffReason, InfoTopic, MainMenuAction, PromptAction};
pub use storage::{JsonFileBackend, MemoryBackend, SessionMap, SessionStore, StoreBackend};
