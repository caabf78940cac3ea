//! Property declarations, values, defaults, and validation.

pub mod definition;
pub mod registry;
pub mod values;

pub use definition::{PropertiesDefinition, PropertyDefinition};
pub use values::{PropertyValue, PropertyValues};
