//! Responsive expansion of style tables.

use crate::style::map::{StyleKey, StyleMap};
use crate::style::table::StyleTable;
use crate::value::Breakpoints;

/// Expand every `(property, value)` leaf of `table` into one entry per breakpoint.
///
/// Breakpoint entries carry the same class list as the source leaf and are
/// emitted in breakpoint order. When `remove_initial` is false the
/// unqualified entries are kept and come first.
pub fn responsive_expand(table: &StyleTable, breakpoints: &Breakpoints, remove_initial: bool) -> StyleMap {
    let mut expanded = StyleMap::new();

    if !remove_initial {
        expanded = expanded.deep_merge(StyleMap::from(table.clone()));
    }

    for breakpoint in breakpoints {
        for (property, values) in table.iter() {
            let key = StyleKey::at(breakpoint.clone(), property);
            for (value, classes) in values {
                expanded.insert(key.clone(), value.clone(), classes.iter().cloned());
            }
        }
    }

    expanded
}
