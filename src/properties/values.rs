//! Property values supplied to a component instance.

use indexmap::IndexMap;

use crate::value::{Breakpoint, Value};

/// The value of one property: either a plain value or one value per breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// The same value regardless of viewport.
    Single(Value),
    /// A value per breakpoint, e.g. `{ narrow: condensed, wide: spacious }`.
    Responsive(IndexMap<Breakpoint, Value>),
}

impl PropertyValue {
    /// Build a responsive value from `(breakpoint, value)` pairs.
    pub fn responsive<B, V>(pairs: impl IntoIterator<Item = (B, V)>) -> Self
    where
        B: Into<Breakpoint>,
        V: Into<Value>,
    {
        PropertyValue::Responsive(
            pairs
                .into_iter()
                .map(|(bp, value)| (bp.into(), value.into()))
                .collect(),
        )
    }

    /// The plain value, if this is [`PropertyValue::Single`].
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            PropertyValue::Single(value) => Some(value),
            PropertyValue::Responsive(_) => None,
        }
    }

    /// The value for `breakpoint`, if this is [`PropertyValue::Responsive`] and has one.
    pub fn at(&self, breakpoint: &Breakpoint) -> Option<&Value> {
        match self {
            PropertyValue::Single(_) => None,
            PropertyValue::Responsive(values) => values.get(breakpoint),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        PropertyValue::Single(value)
    }
}

macro_rules! single_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::Single(Value::from(value))
                }
            }
        )*
    };
}

single_from!(&str, String, bool, i64, i32);

/// Property name → value mapping for one instance, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyValues {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyValues {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a property, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Look up a property value.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    /// Whether a value is set for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a property value, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.entries.shift_remove(name)
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of values set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no value is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = PropertyValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}
