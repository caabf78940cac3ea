//! Property declarations: PropertyDefinition, PropertiesDefinition.

use indexmap::{IndexMap, IndexSet};

use crate::value::Value;

/// Declaration of a single component property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    name: String,
    /// `None` accepts any value.
    allowed_values: Option<IndexSet<Value>>,
    default: Option<Value>,
    responsive: bool,
}

impl PropertyDefinition {
    /// Declare a property that accepts any value and has no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allowed_values: None,
            default: None,
            responsive: false,
        }
    }

    /// Restrict the property to the given values (builder).
    pub fn allowed<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the default value (builder).
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Accept per-breakpoint values (builder).
    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The allowed values, or `None` if unrestricted.
    pub fn allowed_values(&self) -> Option<&IndexSet<Value>> {
        self.allowed_values.as_ref()
    }

    /// The default value, if declared.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether per-breakpoint values are accepted.
    pub fn is_responsive(&self) -> bool {
        self.responsive
    }

    /// Whether `value` is acceptable for this property.
    pub fn accepts(&self, value: &Value) -> bool {
        self.allowed_values
            .as_ref()
            .map_or(true, |allowed| allowed.contains(value))
    }
}

/// The full set of property declarations of a component type, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertiesDefinition {
    entries: IndexMap<String, PropertyDefinition>,
}

impl PropertiesDefinition {
    /// Create an empty set of declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing any previous one with the same name (builder).
    pub fn with(mut self, definition: PropertyDefinition) -> Self {
        self.insert(definition);
        self
    }

    /// Add a declaration, returning the one it replaced.
    pub fn insert(&mut self, definition: PropertyDefinition) -> Option<PropertyDefinition> {
        self.entries.insert(definition.name.clone(), definition)
    }

    /// Look up a declaration by property name.
    pub fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.entries.get(name)
    }

    /// Whether a property with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.entries.values()
    }

    /// Declared property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `child` on `self`: a name present in both takes the child's
    /// declaration whole, with no field-level merge.
    pub fn merged_with(&self, child: &PropertiesDefinition) -> PropertiesDefinition {
        let mut entries = self.entries.clone();
        for (name, definition) in &child.entries {
            entries.insert(name.clone(), definition.clone());
        }
        PropertiesDefinition { entries }
    }
}

impl FromIterator<PropertyDefinition> for PropertiesDefinition {
    fn from_iter<I: IntoIterator<Item = PropertyDefinition>>(iter: I) -> Self {
        let mut definitions = PropertiesDefinition::new();
        for definition in iter {
            definitions.insert(definition);
        }
        definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_anything() {
        let def = PropertyDefinition::new("label");
        assert!(def.allowed_values().is_none());
        assert!(def.accepts(&Value::from("anything")));
        assert!(def.accepts(&Value::from(42)));
        assert!(!def.is_responsive());
    }

    #[test]
    fn allowed_restricts() {
        let def = PropertyDefinition::new("size").allowed(["small", "large"]);
        assert!(def.accepts(&Value::from("small")));
        assert!(!def.accepts(&Value::from("medium")));
    }

    #[test]
    fn builder_default_and_responsive() {
        let def = PropertyDefinition::new("gap")
            .allowed(["none", "normal"])
            .default_value("none")
            .responsive(true);
        assert_eq!(def.default(), Some(&Value::from("none")));
        assert!(def.is_responsive());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut defs = PropertiesDefinition::new().with(PropertyDefinition::new("a"));
        let old = defs.insert(PropertyDefinition::new("a").default_value(1));
        assert!(old.is_some());
        assert_eq!(defs.len(), 1);
        assert_eq!(defs.get("a").and_then(|d| d.default()), Some(&Value::Int(1)));
    }

    #[test]
    fn merged_with_child_wins_whole_definition() {
        let parent = PropertiesDefinition::new()
            .with(PropertyDefinition::new("a").allowed(["y"]).default_value("y"))
            .with(PropertyDefinition::new("b").default_value("z"));
        let child = PropertiesDefinition::new().with(PropertyDefinition::new("a").allowed(["x"]));

        let merged = parent.merged_with(&child);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("a"), child.get("a"));
        // The parent's default does not leak into the child's declaration.
        assert_eq!(merged.get("a").and_then(|d| d.default()), None);
        assert_eq!(merged.get("b"), parent.get("b"));
    }

    #[test]
    fn from_iterator_and_names() {
        let defs: PropertiesDefinition = ["tag", "gap", "align"]
            .into_iter()
            .map(PropertyDefinition::new)
            .collect();
        assert_eq!(defs.names().collect::<Vec<_>>(), vec!["tag", "gap", "align"]);
        assert!(defs.contains("gap"));
        assert!(!defs.contains("wrap"));
    }
}
