//! Resolving property values against a style map.

use indexmap::IndexSet;
use tracing::trace;

use crate::properties::values::PropertyValues;
use crate::style::map::StyleMap;

/// Compute the classes for `values`.
///
/// The map is walked in declaration order. Unqualified keys read a plain
/// value of their property; breakpoint keys read that breakpoint's entry of a
/// responsive value. Values with no matching leaf contribute nothing. Each
/// token is emitted once, at its first position.
pub fn resolve(map: &StyleMap, values: &PropertyValues) -> Vec<String> {
    let mut classes: IndexSet<String> = IndexSet::new();

    for (key, table) in map.iter() {
        let Some(property_value) = values.get(&key.property) else {
            continue;
        };
        let value = match &key.breakpoint {
            None => property_value.as_single(),
            Some(breakpoint) => property_value.at(breakpoint),
        };
        if let Some(tokens) = value.and_then(|value| table.get(value)) {
            classes.extend(tokens.iter().cloned());
        }
    }

    trace!(count = classes.len(), "resolved style classes");
    classes.into_iter().collect()
}
