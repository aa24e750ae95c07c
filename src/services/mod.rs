//! Services module
//!
//! This module contains the messaging transport, menu lifecycle, inactivity
//! supervision and startup recovery services.

pub mod menu;
pub mod recovery;
pub mod supervisor;
pub mod telegram;
pub mod transport;

// Re-export commonly used services
pub use menu::{DeferredDeletion, DeletionOutcome, MenuLifecycleManager};
pub use recovery::RecoveryScanner;
pub use supervisor::{InactivitySupervisor, ReminderSweep, SupervisorHandle};
pub use telegram::TelegramTransport;
pub use transport::{ConversationKind, InboundMessage, Transport, UnreadConversation};
