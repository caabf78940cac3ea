//! Property registry operations: declare, extend, default-fill, validate.

use crate::config::ExecutionMode;
use crate::error::{ConfigError, ValidationError};
use crate::properties::definition::{PropertiesDefinition, PropertyDefinition};
use crate::properties::values::{PropertyValue, PropertyValues};
use crate::value::Breakpoints;

/// Check a set of declarations and return it as the type's definitions.
pub fn define(properties: PropertiesDefinition) -> Result<PropertiesDefinition, ConfigError> {
    for definition in properties.iter() {
        check_definition(definition)?;
    }
    Ok(properties)
}

/// Overlay `new_properties` on the parent's definitions, if the parent has any.
///
/// A name present in both keeps the child's declaration whole.
pub fn extend(
    parent: Option<&PropertiesDefinition>,
    new_properties: PropertiesDefinition,
) -> Result<PropertiesDefinition, ConfigError> {
    let new_properties = define(new_properties)?;
    Ok(match parent {
        Some(parent) => parent.merged_with(&new_properties),
        None => new_properties,
    })
}

fn check_definition(definition: &PropertyDefinition) -> Result<(), ConfigError> {
    if definition.name().is_empty() {
        return Err(ConfigError::EmptyPropertyName);
    }
    if let Some(allowed) = definition.allowed_values() {
        if allowed.is_empty() {
            return Err(ConfigError::EmptyAllowedValues {
                property: definition.name().to_owned(),
            });
        }
    }
    if let Some(default) = definition.default() {
        if !definition.accepts(default) {
            return Err(ConfigError::DefaultNotAllowed {
                property: definition.name().to_owned(),
                default: default.clone(),
            });
        }
    }
    Ok(())
}

/// Fill in defaults for declared properties missing from `values`.
///
/// Defaults are only inserted when `fallback_to_default` is set or `mode` is
/// production; otherwise missing properties stay missing. Keys that are not
/// declared are carried over untouched.
pub fn fill_defaults(
    definitions: &PropertiesDefinition,
    values: &PropertyValues,
    fallback_to_default: bool,
    mode: ExecutionMode,
) -> PropertyValues {
    let mut filled = values.clone();
    if !(fallback_to_default || mode.is_production()) {
        return filled;
    }
    for definition in definitions.iter() {
        if filled.contains(definition.name()) {
            continue;
        }
        if let Some(default) = definition.default() {
            filled.insert(definition.name(), default.clone());
        }
    }
    filled
}

/// Validate every supplied value, collecting all errors.
pub fn validate(
    definitions: &PropertiesDefinition,
    values: &PropertyValues,
    breakpoints: &Breakpoints,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (name, value) in values.iter() {
        let Some(definition) = definitions.get(name) else {
            errors.push(ValidationError::UnknownProperty {
                property: name.to_owned(),
            });
            continue;
        };

        match value {
            PropertyValue::Single(value) => {
                if !definition.accepts(value) {
                    errors.push(ValidationError::ValueNotAllowed {
                        property: name.to_owned(),
                        value: value.clone(),
                    });
                }
            }
            PropertyValue::Responsive(per_breakpoint) => {
                if !definition.is_responsive() {
                    errors.push(ValidationError::NotResponsive {
                        property: name.to_owned(),
                    });
                    continue;
                }
                for (breakpoint, value) in per_breakpoint {
                    if !breakpoints.contains(breakpoint) {
                        errors.push(ValidationError::UnknownBreakpoint {
                            property: name.to_owned(),
                            breakpoint: breakpoint.clone(),
                        });
                    } else if !definition.accepts(value) {
                        errors.push(ValidationError::ValueNotAllowed {
                            property: name.to_owned(),
                            value: value.clone(),
                        });
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
