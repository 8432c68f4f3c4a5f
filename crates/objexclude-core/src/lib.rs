//! # objexclude Core
//!
//! Core types, traits, and utilities for objexclude.
//! Provides the fundamental abstractions shared by the filter and command
//! layers: the 4-axis position type, error types, host lifecycle events,
//! and shared-state type aliases.

pub mod error;
pub mod events;
pub mod position;
pub mod types;

pub use error::{CommandError, Result};
pub use events::{HostEvent, HostEventDispatcher};
pub use position::Position;
pub use types::{thread_safe, ThreadSafe};
