//! Position tracking across filtered moves
//!
//! Three snapshots drive the exit reconciliation arithmetic:
//! - `last_position`: the most recent target, updated on every move call
//!   regardless of which branch the state machine takes.
//! - `last_extruded`: the most recent position actually forwarded to the
//!   wrapped transform.
//! - `last_excluded`: the most recent position observed while inside an
//!   excluded region.
//!
//! Snapshots persist for the life of the adapter; a job reset does not
//! touch them.

use objexclude_core::Position;

/// The three position snapshots maintained by the move adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionTracker {
    /// Most recent position seen, on any branch
    pub last_position: Position,
    /// Most recent position forwarded to the wrapped transform
    pub last_extruded: Position,
    /// Most recent position seen while suppressed
    pub last_excluded: Position,
}

impl PositionTracker {
    /// Create a tracker with all snapshots at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position that was forwarded to the wrapped transform
    pub fn record_forwarded(&mut self, pos: Position) {
        self.last_extruded = pos;
        self.last_position = pos;
    }

    /// Record a position that was suppressed inside an excluded region
    pub fn record_suppressed(&mut self, pos: Position) {
        self.last_excluded = pos;
        self.last_position = pos;
    }

    /// Record a position observed without a move (position query)
    pub fn record_observed(&mut self, pos: Position) {
        self.last_position = pos;
    }
}
