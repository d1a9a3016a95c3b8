//! Dirty tracking for resource field maps.
//!
//! This module provides [`TrackedFields`], the field store behind every
//! [`Resource`](crate::rest::Resource). It keeps the current field mapping
//! together with a snapshot of the last state known to match the service.
//!
//! # How It Works
//!
//! When data arrives from the service (a fetch, or the response to a save) it
//! is merged into both the current mapping and the snapshot. Local `set`
//! calls only touch the current mapping. A resource is dirty while the two
//! differ, and a resource that has never been persisted has no snapshot at
//! all and is always dirty.
//!
//! # Example
//!
//! ```rust
//! use stormpath::rest::TrackedFields;
//! use serde_json::json;
//!
//! let mut fields = TrackedFields::from_existing(
//!     json!({"name": "app", "description": "test app"}).as_object().cloned().unwrap(),
//! );
//! assert!(!fields.is_dirty());
//!
//! fields.set("description", json!("updated app"));
//! assert!(fields.is_dirty());
//!
//! fields.mark_clean();
//! assert!(!fields.is_dirty());
//! ```

use serde_json::{Map, Value};

/// A JSON field mapping with a snapshot of its last persisted state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackedFields {
    /// The current local mapping.
    current: Map<String, Value>,
    /// The last state known to match the service.
    /// `None` for resources that haven't been saved yet.
    original: Option<Map<String, Value>>,
}

impl TrackedFields {
    /// Creates an empty mapping for a resource that doesn't exist yet.
    ///
    /// New mappings are always dirty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clean mapping from data the service returned.
    #[must_use]
    pub fn from_existing(fields: Map<String, Value>) -> Self {
        Self {
            original: Some(fields.clone()),
            current: fields,
        }
    }

    /// Creates a clean, empty mapping for a resource known only by `href`.
    #[must_use]
    pub fn unloaded() -> Self {
        Self::from_existing(Map::new())
    }

    /// Returns the value of `field`, if present locally.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.current.get(field)
    }

    /// Sets a field locally.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.current.insert(field.into(), value);
    }

    /// Returns the current local mapping.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.current
    }

    /// Returns `true` if the mapping differs from its last persisted state.
    ///
    /// For new mappings, always returns `true`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.original
            .as_ref()
            .map_or(true, |original| original != &self.current)
    }

    /// Merges data returned by the service.
    ///
    /// Fields changed locally keep their local value so a lazy fetch never
    /// discards an unsaved `set`. The snapshot always takes the remote value.
    pub fn merge_remote(&mut self, remote: &Map<String, Value>) {
        let original = self.original.get_or_insert_with(Map::new);
        for (key, value) in remote {
            let locally_changed = original.get(key) != self.current.get(key);
            if !locally_changed || !self.current.contains_key(key) {
                self.current.insert(key.clone(), value.clone());
            }
            original.insert(key.clone(), value.clone());
        }
    }

    /// Replaces both the mapping and the snapshot with service data.
    pub fn reset(&mut self, fields: Map<String, Value>) {
        self.original = Some(fields.clone());
        self.current = fields;
    }

    /// Marks the mapping as clean by capturing the current state.
    pub fn mark_clean(&mut self) {
        self.original = Some(self.current.clone());
    }

    /// Drops every field and the snapshot.
    pub fn clear(&mut self) {
        self.current.clear();
        self.original = Some(Map::new());
    }
}
