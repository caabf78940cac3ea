//! HTML attribute values and serialization.

use std::fmt;

use html_escape::encode_double_quoted_attribute;
use indexmap::IndexMap;

/// Attributes rendered as `name="name"` when true and omitted when false.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "hidden", "disabled", "checked", "selected", "readonly", "required", "multiple", "open",
    "autofocus", "novalidate",
];

/// The value of one HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Str(s) => f.write_str(s),
            AttributeValue::Int(n) => write!(f, "{n}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Str(s.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Str(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Int(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

/// Attribute name → value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: IndexMap<String, AttributeValue>,
}

impl HtmlAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Look up an attribute.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// Whether `name` is set.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove an attribute, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.entries.shift_remove(name)
    }

    /// Keep only attributes for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &AttributeValue) -> bool) {
        self.entries.retain(|name, value| keep(name, value));
    }

    /// Attribute names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as `name="value"` pairs separated by spaces.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let is_boolean = BOOLEAN_ATTRIBUTES.contains(&name.as_str());
            match value {
                AttributeValue::Bool(false) if is_boolean => continue,
                AttributeValue::Bool(true) if is_boolean => {
                    parts.push(format!("{name}=\"{name}\""));
                }
                other => {
                    let value = other.to_string();
                    parts.push(format!("{name}=\"{}\"", encode_double_quoted_attribute(&value)));
                }
            }
        }
        parts.join(" ")
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = HtmlAttributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
