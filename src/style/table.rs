//! StyleTable: the authoring form of a style map.
//!
//! A table maps property name → property value → class tokens, with no
//! breakpoint qualification. Component declarations pass three of these
//! (general, responsive, with-responsive) to build a [`StyleMap`](super::map::StyleMap).

use indexmap::IndexMap;

use crate::value::Value;

/// Property value → class tokens, in declaration order.
pub type ValueClasses = IndexMap<Value, Vec<String>>;

/// Unqualified property → value → classes table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    entries: IndexMap<String, ValueClasses>,
}

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `property = value` to `classes` (builder).
    pub fn with<S: Into<String>>(
        mut self,
        property: impl Into<String>,
        value: impl Into<Value>,
        classes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.insert(property, value, classes);
        self
    }

    /// Map `property = value` to `classes`, replacing an earlier list for the same pair.
    pub fn insert<S: Into<String>>(
        &mut self,
        property: impl Into<String>,
        value: impl Into<Value>,
        classes: impl IntoIterator<Item = S>,
    ) {
        self.entries
            .entry(property.into())
            .or_default()
            .insert(value.into(), classes.into_iter().map(Into::into).collect());
    }

    /// Class tokens for `property = value`.
    pub fn get(&self, property: &str, value: &Value) -> Option<&[String]> {
        self.entries
            .get(property)
            .and_then(|values| values.get(value))
            .map(Vec::as_slice)
    }

    /// Iterate `(property, value table)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueClasses)> {
        self.entries.iter().map(|(property, values)| (property.as_str(), values))
    }

    /// Number of properties in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
