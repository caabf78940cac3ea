//! Property values and breakpoints.
//!
//! [`Value`] is the scalar a component property can hold. Symbols and strings
//! share the [`Value::Str`] variant. [`Breakpoints`] is the ordered set of
//! responsive thresholds a style map expands over.

use std::fmt;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// A boolean flag, e.g. `full_width: true`.
    Bool(bool),
    /// An integer, e.g. `level: 2`.
    Int(i64),
    /// A string or symbol, e.g. `variant: primary`.
    Str(String),
}

impl Value {
    /// Return the inner string, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

// ---------------------------------------------------------------------------
// Breakpoints
// ---------------------------------------------------------------------------

/// A named responsive threshold, e.g. `narrow` or `wide`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Breakpoint(String);

impl Breakpoint {
    /// Create a breakpoint with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The breakpoint name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Breakpoint {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Names of the default breakpoints, smallest first.
pub const DEFAULT_BREAKPOINTS: &[&str] = &["v_narrow", "v_regular", "narrow", "regular", "wide"];

/// The ordered set of supported breakpoints.
///
/// Order is significant: responsive expansion emits breakpoint entries in this
/// order, which in turn fixes the order of resolved classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    items: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Build a breakpoint set from names. Duplicate names keep their first position.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut items: Vec<Breakpoint> = Vec::new();
        for name in names {
            let bp = Breakpoint::new(name);
            if !items.contains(&bp) {
                items.push(bp);
            }
        }
        Self { items }
    }

    /// Iterate breakpoints in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.items.iter()
    }

    /// Whether `bp` is one of the configured breakpoints.
    pub fn contains(&self, bp: &Breakpoint) -> bool {
        self.items.contains(bp)
    }

    /// Number of configured breakpoints.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no breakpoints are configured.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINTS.iter().copied())
    }
}

impl<'a> IntoIterator for &'a Breakpoints {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
