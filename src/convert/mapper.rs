//! Class-to-argument mapping for rewriting raw markup into component calls.
//!
//! Given the attributes of a plain element, [`ClassArgumentMapper`] works out
//! which component arguments reproduce it. Every class must map to an
//! argument (or be explicitly ignored); anything else is a [`ConversionError`].

use indexmap::{IndexMap, IndexSet};

use crate::attributes::{AttributeValue, HtmlAttributes};
use crate::convert::tokenizer::class_names;
use crate::properties::PropertyValues;
use crate::style::{StyleKey, StyleMap};
use crate::value::Value;

/// Errors from converting markup attributes into component arguments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Cannot convert class \"{0}\"")]
    UnknownClass(String),
}

/// Component arguments produced from markup attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertedArguments {
    /// Component properties, e.g. `scheme` or `title`.
    pub properties: PropertyValues,
    /// Attributes passed through unchanged.
    pub html_attributes: HtmlAttributes,
}

/// Maps class names back to component arguments.
#[derive(Debug, Clone, Default)]
pub struct ClassArgumentMapper {
    /// Argument name → (class name → value), tried in order.
    tables: IndexMap<String, IndexMap<String, Value>>,
    ignored: IndexSet<String>,
}

impl ClassArgumentMapper {
    /// Create a mapper with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map each class in `pairs` to a value of `argument` (builder).
    pub fn mapping<C, V>(mut self, argument: impl Into<String>, pairs: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
    {
        let table = self.tables.entry(argument.into()).or_default();
        for (class, value) in pairs {
            table.insert(class.into(), value.into());
        }
        self
    }

    /// Skip `class` during conversion, e.g. the component's own base class (builder).
    pub fn ignore(mut self, class: impl Into<String>) -> Self {
        self.ignored.insert(class.into());
        self
    }

    /// Build tables by reversing the unqualified entries of `map` for `properties`.
    ///
    /// Only values that map to exactly one class can be recovered from markup.
    pub fn from_style_map<'p>(map: &StyleMap, properties: impl IntoIterator<Item = &'p str>) -> Self {
        let mut mapper = Self::new();
        for property in properties {
            let Some(values) = map.values_of(&StyleKey::unqualified(property)) else {
                continue;
            };
            let pairs = values.iter().filter_map(|(value, classes)| match classes.as_slice() {
                [single] => Some((single.clone(), value.clone())),
                _ => None,
            });
            mapper = mapper.mapping(property, pairs);
        }
        mapper
    }

    /// Convert a `class` attribute value into component properties.
    ///
    /// Each class goes to the first table that knows it and whose argument is
    /// still unset.
    pub fn classes_to_args(&self, classes: &str) -> Result<PropertyValues, ConversionError> {
        let mut args = PropertyValues::new();
        for class in class_names(classes) {
            if self.ignored.contains(class) {
                continue;
            }
            let slot = self.tables.iter().find_map(|(argument, table)| {
                table
                    .get(class)
                    .filter(|_| !args.contains(argument))
                    .map(|value| (argument.clone(), value.clone()))
            });
            match slot {
                Some((argument, value)) => {
                    args.insert(argument, value);
                }
                None => return Err(ConversionError::UnknownClass(class.to_owned())),
            }
        }
        Ok(args)
    }

    /// Convert one attribute, adding to `args`.
    ///
    /// `class` goes through [`classes_to_args`](Self::classes_to_args), `title`
    /// becomes a `title` property, and anything else passes through as an
    /// HTML attribute.
    ///
    /// Values are stored as raw strings. Quoting them as source literals for
    /// a rewritten call is left to whoever emits the code.
    pub fn attribute_to_args(
        &self,
        name: &str,
        value: &str,
        args: &mut ConvertedArguments,
    ) -> Result<(), ConversionError> {
        match name {
            "class" => {
                for (argument, value) in self.classes_to_args(value)?.iter() {
                    args.properties.insert(argument, value.clone());
                }
            }
            "title" => {
                args.properties.insert("title", value);
            }
            _ => {
                args.html_attributes.insert(name, AttributeValue::from(value));
            }
        }
        Ok(())
    }

    /// Convert every attribute of an element.
    pub fn attributes_to_args<'v>(
        &self,
        attributes: impl IntoIterator<Item = (&'v str, &'v str)>,
    ) -> Result<ConvertedArguments, ConversionError> {
        let mut args = ConvertedArguments::default();
        for (name, value) in attributes {
            self.attribute_to_args(name, value, &mut args)?;
        }
        Ok(args)
    }
}
