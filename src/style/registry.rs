//! Building a component type's style map from its declared tables.

use crate::style::map::StyleMap;
use crate::style::responsive::responsive_expand;
use crate::style::table::StyleTable;
use crate::value::Breakpoints;

/// The three tables a component declares its styles with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclaration {
    /// Entries without responsive variants.
    pub general: StyleTable,
    /// Entries replaced by their breakpoint variants (no bare fallback).
    pub responsive: StyleTable,
    /// Entries kept as-is and also expanded to breakpoint variants.
    pub with_responsive: StyleTable,
}

impl StyleDeclaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the general table (builder).
    pub fn general(mut self, table: StyleTable) -> Self {
        self.general = table;
        self
    }

    /// Set the responsive-only table (builder).
    pub fn responsive(mut self, table: StyleTable) -> Self {
        self.responsive = table;
        self
    }

    /// Set the with-responsive table (builder).
    pub fn with_responsive(mut self, table: StyleTable) -> Self {
        self.with_responsive = table;
        self
    }

    fn expand(&self, breakpoints: &Breakpoints) -> [StyleMap; 3] {
        [
            StyleMap::from(self.general.clone()),
            responsive_expand(&self.responsive, breakpoints, true),
            responsive_expand(&self.with_responsive, breakpoints, false),
        ]
    }
}

/// Build a style map from scratch: general, then deep-merged responsive and
/// with-responsive expansions.
pub fn define(declaration: &StyleDeclaration, breakpoints: &Breakpoints) -> StyleMap {
    let [general, responsive, with_responsive] = declaration.expand(breakpoints);
    general.deep_merge(responsive).deep_merge(with_responsive)
}

/// Build a style map on top of the parent's. Each (breakpoint, property) key
/// the child declares replaces the parent's value table for that key.
pub fn extend(
    parent: Option<&StyleMap>,
    declaration: &StyleDeclaration,
    breakpoints: &Breakpoints,
) -> StyleMap {
    let [general, responsive, with_responsive] = declaration.expand(breakpoints);
    parent
        .cloned()
        .unwrap_or_default()
        .overlay(general)
        .overlay(responsive)
        .overlay(with_responsive)
}
