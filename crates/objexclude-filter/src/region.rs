//! Region state machine and exit reconciliation
//!
//! Two orthogonal booleans classify every move: whether the current object
//! is excluded (`target_excluded`), and whether the prior move left us inside
//! an excluded region (`previously_excluded`, sticky until an explicit exit).
//!
//! | target_excluded | previously_excluded | action      |
//! |-----------------|---------------------|-------------|
//! | true            | true                | Ignore      |
//! | true            | false               | Enter       |
//! | false           | true                | Exit        |
//! | false           | false               | Passthrough |
//!
//! Exit carries the numeric contract: the first move after a suppressed
//! region holds stale extrusion and possibly an X/Y artifact of the skipped
//! path, and must be reconciled before forwarding.

use crate::tracker::PositionTracker;
use objexclude_core::Position;

/// Classification of a single move against the region state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    /// Forward the move unchanged; not in an excluded region
    Passthrough,
    /// First move into an excluded region; suppress and set the sticky flag
    Enter,
    /// Move within an excluded region; suppress
    Ignore,
    /// First move out of an excluded region; reconcile and forward
    Exit,
}

impl MoveAction {
    /// Classify a move from the two region booleans
    pub fn classify(target_excluded: bool, previously_excluded: bool) -> Self {
        match (target_excluded, previously_excluded) {
            (true, true) => MoveAction::Ignore,
            (true, false) => MoveAction::Enter,
            (false, true) => MoveAction::Exit,
            (false, false) => MoveAction::Passthrough,
        }
    }

    /// True when this action forwards a move to the wrapped transform
    pub fn forwards(&self) -> bool {
        matches!(self, MoveAction::Passthrough | MoveAction::Exit)
    }
}

/// Current-object identity and the sticky excluded-region flag
#[derive(Debug, Clone, Default)]
pub struct RegionState {
    /// The object the incoming moves belong to, if any (canonical name)
    pub current_object: Option<String>,
    /// Sticky: set on Enter, cleared only on Exit. A job reset leaves it
    /// untouched.
    pub in_excluded_region: bool,
}

impl RegionState {
    /// Create a state with no current object, outside any excluded region
    pub fn new() -> Self {
        Self::default()
    }

    /// The current object name, or the empty string when none
    pub fn current_name(&self) -> &str {
        self.current_object.as_deref().unwrap_or("")
    }
}

/// Rewrite the first move leaving an excluded region
///
/// 1. If the target's X/Y exactly equal `last_position`'s (no net travel
///    since the last recorded position), snap X/Y back to `last_extruded` -
///    the last point that was genuinely printed. The comparison is exact
///    floating equality; no epsilon is applied.
/// 2. Unconditionally collapse the extrusion accumulated while suppressed:
///    `e = e - last_excluded.e + last_extruded.e`.
pub fn reconcile_exit(target: Position, tracker: &PositionTracker) -> Position {
    let mut resumed = target;
    if target.xy_equals(&tracker.last_position) {
        resumed.x = tracker.last_extruded.x;
        resumed.y = tracker.last_extruded.y;
    }
    resumed.e = target.e - tracker.last_excluded.e + tracker.last_extruded.e;
    resumed
}
