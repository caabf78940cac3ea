//! Attribute allow-lists: exact names and `prefix-*` wildcards.

use indexmap::IndexSet;

/// Attribute names every component accepts unless configured otherwise.
pub const BASE_ALLOWED_ATTRIBUTES: &[&str] = &[
    "id",
    "class",
    "classes",
    "style",
    "role",
    "title",
    "hidden",
    "tabindex",
    "lang",
    "dir",
    "test_selector",
    "data-*",
    "aria-*",
];

/// A set of allowed attribute names.
///
/// An entry ending in `*` allows every name starting with the text before it,
/// so `data-*` allows `data-target` but not `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: IndexSet<String>,
    prefixes: IndexSet<String>,
}

impl AllowList {
    /// Build an allow-list from names and wildcard patterns.
    pub fn new(entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut list = AllowList::empty();
        list.extend(entries);
        list
    }

    /// An allow-list that allows nothing.
    pub fn empty() -> Self {
        Self {
            names: IndexSet::new(),
            prefixes: IndexSet::new(),
        }
    }

    /// Add names and wildcard patterns.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = impl Into<String>>) {
        for entry in entries {
            let entry: String = entry.into();
            match entry.strip_suffix('*') {
                Some(prefix) => {
                    self.prefixes.insert(prefix.to_owned());
                }
                None => {
                    self.names.insert(entry);
                }
            }
        }
    }

    /// Whether `name` is allowed.
    pub fn allows(&self, name: &str) -> bool {
        self.names.contains(name)
            || self
                .prefixes
                .iter()
                .any(|prefix| name.len() > prefix.len() && name.starts_with(prefix.as_str()))
    }

    /// Both lists combined.
    pub fn union(&self, other: &AllowList) -> AllowList {
        let mut combined = self.clone();
        combined.names.extend(other.names.iter().cloned());
        combined.prefixes.extend(other.prefixes.iter().cloned());
        combined
    }

    /// Returns `true` if nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prefixes.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(BASE_ALLOWED_ATTRIBUTES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names() {
        let list = AllowList::new(["id", "class"]);
        assert!(list.allows("id"));
        assert!(!list.allows("onclick"));
        assert!(!list.allows("ids"));
    }

    #[test]
    fn wildcard_prefixes() {
        let list = AllowList::new(["data-*", "aria-*"]);
        assert!(list.allows("data-target"));
        assert!(list.allows("aria-label"));
        assert!(!list.allows("data-"));
        assert!(!list.allows("data"));
        assert!(!list.allows("ariax"));
    }

    #[test]
    fn default_is_base_list() {
        let list = AllowList::default();
        for name in ["id", "class", "classes", "role", "data-action", "aria-hidden", "test_selector"] {
            assert!(list.allows(name), "{name} should be allowed");
        }
        assert!(!list.allows("onclick"));
        assert!(!list.allows("href"));
    }

    #[test]
    fn union_combines() {
        let base = AllowList::new(["id"]);
        let extra = AllowList::new(["href", "x-*"]);
        let both = base.union(&extra);
        assert!(both.allows("id"));
        assert!(both.allows("href"));
        assert!(both.allows("x-ray"));
        assert!(!base.allows("href"));
    }

    #[test]
    fn empty_allows_nothing() {
        let list = AllowList::empty();
        assert!(list.is_empty());
        assert!(!list.allows("id"));
    }
}
