//! # objexclude Commands
//!
//! The text-command surface around the exclusion filter:
//! - [`args`] - keyed `KEY=VALUE` parameter parsing with typed accessors
//! - [`registry`] - name-to-handler bindings with help text
//! - [`handlers`] - the exclusion command set wired to a shared job state
//!
//! Commands are keyword-addressed with case-insensitive keyed parameters,
//! e.g. `EXCLUDE_OBJECT NAME=tower_left`. Parse and validation failures are
//! typed errors that reject the one offending command and nothing else.

pub mod args;
pub mod handlers;
pub mod registry;

pub use args::{parse_center, parse_polygon, CommandArgs};
pub use handlers::register_commands;
pub use registry::CommandRegistry;
