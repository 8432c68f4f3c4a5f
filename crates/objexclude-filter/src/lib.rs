//! # objexclude Filter
//!
//! The move-interception core: classifies every motion command against the
//! set of cancelled print objects and either forwards it, suppresses it, or
//! rewrites it to restore position and extrusion continuity.
//!
//! Components:
//! - [`registry`] - named print objects and their inert geometry metadata
//! - [`exclusion`] - the set of currently cancelled object names
//! - [`tracker`] - last forwarded / extruded / excluded position snapshots
//! - [`region`] - the four-way move classification and exit reconciliation
//! - [`state`] - the per-job context owning all of the above
//! - [`transform`] - the decorator that wraps the underlying motion pipeline

pub mod exclusion;
pub mod region;
pub mod registry;
pub mod state;
pub mod tracker;
pub mod transform;

pub use exclusion::ExclusionSet;
pub use region::{reconcile_exit, MoveAction, RegionState};
pub use registry::{normalize_name, ObjectRegistry, PrintObject};
pub use state::{JobState, StatusSnapshot};
pub use tracker::PositionTracker;
pub use transform::{ExcludeObjectTransform, MoveTransform};
