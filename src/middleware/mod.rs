//! Middleware module
//!
//! This module contains the per-contact admission control applied before a
//! message reaches the dispatcher.

pub mod in_flight;

pub use in_flight::{InFlightGuard, InFlightRegistry};
