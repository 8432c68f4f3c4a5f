//! Tool-head position representation
//!
//! A position is the 4-axis coordinate the motion pipeline works in:
//! X, Y, Z in machine units plus the cumulative extrusion coordinate E.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 4-axis tool-head position (X, Y, Z, E)
///
/// `e` is cumulative filament feed, not a spatial axis. Positions are plain
/// value types; every move fully replaces the relevant tracker copy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
    /// Cumulative extrusion coordinate
    pub e: f64,
}

impl Position {
    /// Create a position from explicit axis values
    pub fn new(x: f64, y: f64, z: f64, e: f64) -> Self {
        Self { x, y, z, e }
    }

    /// The origin position (all axes zero)
    pub fn origin() -> Self {
        Self::default()
    }

    /// True when the X and Y components exactly equal `other`'s
    ///
    /// Exact float comparison, no tolerance. The exit-reconciliation snap
    /// test depends on exact-match semantics.
    pub fn xy_equals(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X{:.3} Y{:.3} Z{:.3} E{:.5}",
            self.x, self.y, self.z, self.e
        )
    }
}
