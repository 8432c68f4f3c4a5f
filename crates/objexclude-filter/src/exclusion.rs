//! Exclusion set
//!
//! The subset of object names currently cancelled. A name may be excluded
//! before (or without) ever appearing in the object registry.

use crate::registry::normalize_name;
use std::collections::HashSet;

/// Set of cancelled object names, stored in normalized form
#[derive(Debug, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an object name as excluded
    ///
    /// Duplicate excludes are no-ops. Returns true if the name was newly
    /// inserted.
    pub fn exclude(&mut self, name: &str) -> bool {
        self.names.insert(normalize_name(name))
    }

    /// True when `name` is excluded
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_name(name))
    }

    /// Iterate the excluded names (order unspecified)
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Number of excluded names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing is excluded
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Remove every excluded name
    ///
    /// Only called as part of the combined job reset; there is no standalone
    /// clear command.
    pub fn clear(&mut self) {
        self.names.clear();
    }
}
