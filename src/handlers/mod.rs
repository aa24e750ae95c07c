//! Handlers module
//!
//! This module contains the entry points for external input:
//! - Message handlers driving the contact conversation
//! - The operator control plane and its console

pub mod control;
pub mod messages;

// Re-export commonly used handler types
pub use control::{run_console, ControlCommand, ControlPlane};
pub use messages::{handle_message, HandleOutcome, SessionDispatcher};
