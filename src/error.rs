//! Error types shared across the declaration and validation layers.

use crate::value::{Breakpoint, Value};

/// A malformed type-level declaration.
///
/// These indicate a programming error in a component library and are raised
/// at registration time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("property name must not be empty")]
    EmptyPropertyName,
    #[error("property `{property}` declares an empty set of allowed values")]
    EmptyAllowedValues { property: String },
    #[error("default `{default}` of property `{property}` is not one of its allowed values")]
    DefaultNotAllowed { property: String, default: Value },
    #[error("component name must not be empty")]
    EmptyComponentName,
    #[error("component `{0}` is already registered")]
    DuplicateComponent(String),
    #[error("parent of component `{component}` is not registered")]
    UnknownParent { component: String },
    #[error("invalid default tag `{tag}` for component `{component}`")]
    InvalidDefaultTag { component: String, tag: String },
}

/// An invalid property value or HTML attribute name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown property `{property}`")]
    UnknownProperty { property: String },
    #[error("invalid value `{value}` for property `{property}`")]
    ValueNotAllowed { property: String, value: Value },
    #[error("property `{property}` does not accept responsive values")]
    NotResponsive { property: String },
    #[error("unknown breakpoint `{breakpoint}` for property `{property}`")]
    UnknownBreakpoint {
        property: String,
        breakpoint: Breakpoint,
    },
    #[error("html attributes not allowed: {}", .names.join(", "))]
    DisallowedAttributes { names: Vec<String> },
}

impl ValidationError {
    /// The property this error refers to, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            ValidationError::UnknownProperty { property }
            | ValidationError::ValueNotAllowed { property, .. }
            | ValidationError::NotResponsive { property }
            | ValidationError::UnknownBreakpoint { property, .. } => Some(property),
            ValidationError::DisallowedAttributes { .. } => None,
        }
    }
}
