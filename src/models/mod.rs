//! Data models module
//!
//! This module contains the session record and its supporting types.

pub mod session;

pub use session::{Session, Stage, MessageHandle};
