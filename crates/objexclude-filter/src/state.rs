//! Per-job filter state
//!
//! One explicitly owned context object holds the object registry, exclusion
//! set, region state, and position tracker. Command handlers and the move
//! transform adapter share it by reference; reset is an explicit method
//! call, never implicit reinitialization.

use crate::exclusion::ExclusionSet;
use crate::region::RegionState;
use crate::registry::{ObjectRegistry, PrintObject};
use crate::tracker::PositionTracker;
use serde::Serialize;

/// Read-only snapshot of the filter state for external introspection
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    /// Every known object, geometry included (order unspecified)
    pub objects: Vec<PrintObject>,
    /// Names currently excluded (order unspecified)
    pub excluded_objects: Vec<String>,
    /// The current object name, empty when none
    pub current_object: String,
}

/// The mutable state of one print job's exclusion filter
#[derive(Debug, Default)]
pub struct JobState {
    /// Named print objects and their inert geometry
    pub objects: ObjectRegistry,
    /// Names currently cancelled
    pub excluded: ExclusionSet,
    /// Current-object identity and the sticky region flag
    pub region: RegionState,
    /// Last forwarded / extruded / excluded position snapshots
    pub tracker: PositionTracker,
}

impl JobState {
    /// Create an empty job state at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object definition (first definition of a name wins)
    pub fn define_object(&mut self, object: PrintObject) {
        self.objects.define(object);
    }

    /// Begin attributing moves to `name`, inserting a bare record if unknown
    pub fn start_object(&mut self, name: &str) {
        let key = self.objects.ensure(name);
        self.region.current_object = Some(key);
    }

    /// Stop attributing moves to any object
    pub fn end_object(&mut self) {
        self.region.current_object = None;
    }

    /// Mark `name` as excluded (idempotent)
    pub fn exclude_object(&mut self, name: &str) {
        if self.excluded.exclude(name) {
            tracing::info!(object = %name, "object excluded");
        }
    }

    /// True when the current object is in the exclusion set
    pub fn target_excluded(&self) -> bool {
        match &self.region.current_object {
            Some(name) => self.excluded.contains(name),
            None => false,
        }
    }

    /// Clear all objects and all exclusions together, atomically
    ///
    /// The current object, the in-excluded-region flag, and the position
    /// tracker are deliberately left untouched: the reset scopes to what a
    /// new file invalidates, and the region machine still has to reconcile
    /// any in-flight suppressed move.
    pub fn reset(&mut self) {
        tracing::info!("resetting object registry and exclusion set");
        self.objects.clear();
        self.excluded.clear();
    }

    /// Take a read-only status snapshot
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            objects: self.objects.list().cloned().collect(),
            excluded_objects: self.excluded.list().map(str::to_string).collect(),
            current_object: self.region.current_name().to_string(),
        }
    }
}
