//! # objexclude
//!
//! An exclude-object filter for 3D printer motion streams. Moves belonging
//! to cancelled print objects are suppressed while the rest of the job keeps
//! printing, and position/extrusion continuity is reconciled when normal
//! moves resume.
//!
//! ## Architecture
//!
//! objexclude is organized as a workspace with multiple crates:
//!
//! 1. **objexclude-core** - position type, errors, host events, shared-state
//!    aliases
//! 2. **objexclude-filter** - object registry, exclusion set, region state
//!    machine, position tracker, move transform adapter
//! 3. **objexclude-commands** - keyed parameter parsing, command registry,
//!    the exclusion command set
//! 4. **objexclude** - binary host filtering a G-code stream from stdin to
//!    stdout

pub mod host;

pub use objexclude_commands::{register_commands, CommandArgs, CommandRegistry};
pub use objexclude_core::{
    thread_safe, CommandError, HostEvent, HostEventDispatcher, Position, Result, ThreadSafe,
};
pub use objexclude_filter::{
    ExcludeObjectTransform, ExclusionSet, JobState, MoveAction, MoveTransform, ObjectRegistry,
    PositionTracker, PrintObject, RegionState, StatusSnapshot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Structured logging to stderr with RUST_LOG environment variable support,
/// so the filtered G-code stream on stdout stays clean.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
