//! Definition tracking for a single lowering pass.

use indexmap::IndexSet;

/// Names assigned so far, in the order they were first assigned.
///
/// A fresh set is created for every top-level call; statements add to it,
/// expressions only read it.
///
/// ```
/// use minipy_ast::lower::Definitions;
///
/// let mut defs = Definitions::new();
/// defs.define("y");
/// defs.define("x");
/// defs.define("y");
/// assert!(defs.is_defined("x"));
/// assert_eq!(defs.iter().collect::<Vec<_>>(), ["y", "x"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    names: IndexSet<String>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`. Redefining keeps the first position.
    pub fn define(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
