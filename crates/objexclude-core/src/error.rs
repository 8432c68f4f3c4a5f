//! Error handling for objexclude
//!
//! Provides the error types surfaced by the command layer:
//! - Missing required keyed parameters
//! - Malformed parameter values (CENTER, POLYGON)
//! - Unknown command keywords
//!
//! All error types use `thiserror` for ergonomic error handling. No error in
//! this subsystem is fatal; every failure rejects a single command and leaves
//! the system usable.

use thiserror::Error;

/// Command processing error type
///
/// Represents errors raised while parsing or dispatching a text command.
/// Motion calls and list queries are total and never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A required keyed parameter was absent
    #[error("Missing required parameter {param}")]
    MissingParameter {
        /// The parameter key that was expected (e.g. "NAME").
        param: String,
    },

    /// A parameter value could not be parsed
    #[error("Unable to parse {param}: {reason}")]
    ParseError {
        /// The parameter key whose value was malformed.
        param: String,
        /// A message describing the parse failure.
        reason: String,
    },

    /// The command keyword is not registered
    #[error("Unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized command keyword.
        name: String,
    },
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
