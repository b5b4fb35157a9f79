//! Insertion-ordered id registry with first-write-wins semantics.
//!
//! One abstraction for both node and edge identity: `insert` either
//! accepts a value under a fresh id or reports a duplicate, and
//! `into_values` returns the accepted values in insertion order. This
//! replaces scattering "skip if already seen" checks across every
//! construction site.

use indexmap::map::Entry;
use indexmap::IndexMap;

/// Outcome of a [`Registry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The id was unseen; the value was stored.
    Fresh,
    /// The id was already present; the value was dropped.
    Duplicate,
}

/// An insertion-ordered map from string id to value where the first
/// writer wins.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: IndexMap<String, T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Registry {
            entries: IndexMap::new(),
        }
    }

    /// Stores `value` under `id` unless the id is already taken.
    pub fn insert(&mut self, id: String, value: T) -> Insert {
        match self.entries.entry(id) {
            Entry::Occupied(_) => Insert::Duplicate,
            Entry::Vacant(slot) => {
                slot.insert(value);
                Insert::Fresh
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the registry, yielding the values in insertion order.
    pub fn into_values(self) -> Vec<T> {
        self.entries.into_values().collect()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry::new()
    }
}
