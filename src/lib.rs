//! TourBuddy customer-service bot
//!
//! A Telegram bot for a travel agency selling bus excursions to events. It
//! greets contacts, walks them through the event menus, hands the
//! conversation to a human operator on request and closes sessions that go
//! quiet. Sessions survive restarts through an atomically replaced JSON file.

#![allow(non_snake_case)]

pub mod config;
pub mod content;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TourBuddyError, Result};

// Re-export main components for easy access
pub use handlers::{ControlPlane, HandleOutcome, SessionDispatcher};
pub use models::{MessageHandle, Session, Stage};
pub use services::{InactivitySupervisor, MenuLifecycleManager, Transport};
pub use state::{AppContext, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
