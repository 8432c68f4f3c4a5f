//! Move transform adapter
//!
//! A decorator over the underlying motion-executing capability. Every move
//! and position query passes through it first: the adapter classifies the
//! move against the region state machine, updates the position tracker, and
//! conditionally forwards the (possibly rewritten) move to the wrapped
//! transform.
//!
//! Exactly one adapter may be active, and the host must install it last in
//! the transform chain so it observes moves before any other transform. That
//! ordering is a contract of the host integration layer, not enforced here.

use crate::region::{reconcile_exit, MoveAction};
use crate::state::{JobState, StatusSnapshot};
use objexclude_core::{Position, ThreadSafe};

/// A stage of the motion pipeline
///
/// Accepts a target position and feed speed, executing the move or
/// forwarding it to the next stage.
pub trait MoveTransform: Send {
    /// Current pipeline position
    fn get_position(&mut self) -> Position;

    /// Execute or forward a move to `target` at `speed`
    fn move_to(&mut self, target: Position, speed: f64);
}

/// The exclusion filter as a stage wrapping the rest of the pipeline
pub struct ExcludeObjectTransform {
    state: ThreadSafe<JobState>,
    next: Box<dyn MoveTransform>,
}

impl ExcludeObjectTransform {
    /// Wrap `next` (the previously active transform) with the exclusion
    /// filter driven by `state`
    pub fn install(state: ThreadSafe<JobState>, next: Box<dyn MoveTransform>) -> Self {
        Self { state, next }
    }

    /// Handle to the shared job state, for command handlers
    pub fn state(&self) -> ThreadSafe<JobState> {
        self.state.clone()
    }

    /// Read-only snapshot of objects, exclusions, and the current object
    pub fn status(&self) -> StatusSnapshot {
        self.state.lock().status()
    }
}

impl MoveTransform for ExcludeObjectTransform {
    fn get_position(&mut self) -> Position {
        let pos = self.next.get_position();
        self.state.lock().tracker.record_observed(pos);
        pos
    }

    fn move_to(&mut self, target: Position, speed: f64) {
        // Classify and update under one lock hold, then forward without it
        // so the wrapped transform never runs inside our critical section.
        let forwarded = {
            let mut state = self.state.lock();
            let action = MoveAction::classify(
                state.target_excluded(),
                state.region.in_excluded_region,
            );

            match action {
                MoveAction::Passthrough => {
                    state.tracker.record_forwarded(target);
                    Some(target)
                }
                MoveAction::Enter => {
                    tracing::info!(
                        object = %state.region.current_name(),
                        "moving into excluded object, suppressing"
                    );
                    state.region.in_excluded_region = true;
                    state.tracker.record_suppressed(target);
                    None
                }
                MoveAction::Ignore => {
                    state.tracker.record_suppressed(target);
                    None
                }
                MoveAction::Exit => {
                    let resumed = reconcile_exit(target, &state.tracker);
                    tracing::info!(
                        object = %state.region.current_name(),
                        %target,
                        %resumed,
                        "leaving excluded region, reconciling"
                    );
                    state.tracker.record_forwarded(resumed);
                    state.region.in_excluded_region = false;
                    Some(resumed)
                }
            }
        };

        if let Some(pos) = forwarded {
            self.next.move_to(pos, speed);
        }
    }
}
