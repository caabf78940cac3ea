//! StyleMap: (breakpoint, property) → value → classes.
//!
//! The unqualified namespace (`breakpoint == None`) and each breakpoint's
//! namespace are kept apart by [`StyleKey`], so `size` and `narrow.size` never
//! collide.

use std::fmt;

use indexmap::IndexMap;

use crate::style::table::{StyleTable, ValueClasses};
use crate::value::{Breakpoint, Value};

/// Key of one value table in a [`StyleMap`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    /// `None` for the unqualified entry.
    pub breakpoint: Option<Breakpoint>,
    pub property: String,
}

impl StyleKey {
    /// An unqualified key.
    pub fn unqualified(property: impl Into<String>) -> Self {
        Self {
            breakpoint: None,
            property: property.into(),
        }
    }

    /// A breakpoint-qualified key.
    pub fn at(breakpoint: impl Into<Breakpoint>, property: impl Into<String>) -> Self {
        Self {
            breakpoint: Some(breakpoint.into()),
            property: property.into(),
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.breakpoint {
            Some(bp) => write!(f, "{bp}.{}", self.property),
            None => f.write_str(&self.property),
        }
    }
}

/// A component type's full style map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: IndexMap<StyleKey, ValueClasses>,
}

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key = value` to `classes`, replacing an earlier list for the same triple.
    pub fn insert<S: Into<String>>(
        &mut self,
        key: StyleKey,
        value: impl Into<Value>,
        classes: impl IntoIterator<Item = S>,
    ) {
        self.entries
            .entry(key)
            .or_default()
            .insert(value.into(), classes.into_iter().map(Into::into).collect());
    }

    /// Class tokens for `key = value`.
    pub fn get(&self, key: &StyleKey, value: &Value) -> Option<&[String]> {
        self.entries
            .get(key)
            .and_then(|values| values.get(value))
            .map(Vec::as_slice)
    }

    /// The whole value table under `key`.
    pub fn values_of(&self, key: &StyleKey) -> Option<&ValueClasses> {
        self.entries.get(key)
    }

    /// Whether any entry exists under `key`.
    pub fn contains_key(&self, key: &StyleKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate `(key, value table)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &ValueClasses)> {
        self.entries.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deep merge: keys are unioned at every level, and on an exact
    /// (key, value) collision `other`'s class list replaces ours.
    pub fn deep_merge(mut self, other: StyleMap) -> StyleMap {
        for (key, values) in other.entries {
            let slot = self.entries.entry(key).or_default();
            for (value, classes) in values {
                slot.insert(value, classes);
            }
        }
        self
    }

    /// Key-level overlay: every key of `other` replaces our whole value table.
    pub fn overlay(mut self, other: StyleMap) -> StyleMap {
        for (key, values) in other.entries {
            self.entries.insert(key, values);
        }
        self
    }
}

impl From<StyleTable> for StyleMap {
    fn from(table: StyleTable) -> Self {
        let entries = table
            .iter()
            .map(|(property, values)| (StyleKey::unqualified(property), values.clone()))
            .collect();
        StyleMap { entries }
    }
}
