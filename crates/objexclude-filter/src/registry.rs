//! Print object registry
//!
//! Stores named print objects and their optional geometry metadata. The name
//! is the sole key, uppercased at write time; center and outline are recorded
//! for introspection but never consulted by the filtering logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Normalize an object name to its canonical (uppercase) key form
///
/// All object and exclusion identity comparisons are case-insensitive by
/// normalizing at write time.
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase()
}

/// A named print object
///
/// `center` and `outline` come from DEFINE_OBJECT and are inert metadata:
/// exclusion is decided by name alone, never by coordinate geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintObject {
    /// Canonical (uppercase) object name
    pub name: String,
    /// Optional center point (X, Y)
    pub center: Option<(f64, f64)>,
    /// Optional closed outline as ordered (X, Y) points
    pub outline: Option<Vec<[f64; 2]>>,
}

impl PrintObject {
    /// Create a bare object record with no geometry
    pub fn named(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            center: None,
            outline: None,
        }
    }

    /// Create an object record with geometry metadata
    pub fn with_geometry(name: &str, center: (f64, f64), outline: Vec<[f64; 2]>) -> Self {
        Self {
            name: normalize_name(name),
            center: Some(center),
            outline: Some(outline),
        }
    }
}

impl fmt::Display for PrintObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some((x, y)) = self.center {
            write!(f, " center=({},{})", x, y)?;
        }
        if let Some(outline) = &self.outline {
            write!(f, " outline={} points", outline.len())?;
        }
        Ok(())
    }
}

/// Registry of known print objects, keyed by normalized name
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: HashMap<String, PrintObject>,
}

impl ObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object definition
    ///
    /// The first definition of a name wins; defining the same name again is
    /// a no-op, even with different geometry.
    pub fn define(&mut self, object: PrintObject) {
        self.objects.entry(object.name.clone()).or_insert(object);
    }

    /// Ensure a record exists for `name`, inserting a bare one if absent
    ///
    /// Returns the canonical key.
    pub fn ensure(&mut self, name: &str) -> String {
        let key = normalize_name(name);
        self.objects
            .entry(key.clone())
            .or_insert_with(|| PrintObject::named(&key));
        key
    }

    /// Look up an object by name
    pub fn get(&self, name: &str) -> Option<&PrintObject> {
        self.objects.get(&normalize_name(name))
    }

    /// Iterate the known objects (order unspecified)
    pub fn list(&self) -> impl Iterator<Item = &PrintObject> {
        self.objects.values()
    }

    /// Number of known objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when no objects are registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object record
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
