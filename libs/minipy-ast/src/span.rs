//! # Source Span
//!
//! Represents a range in the source code for error reporting.
//!
//! ## Usage
//!
//! ```rust
//! use minipy_ast::Span;
//!
//! let span = Span::new(0, 10);
//! assert_eq!(span.start(), 0);
//! assert_eq!(span.end(), 10);
//! assert_eq!(span.len(), 10);
//! ```

use serde::{Deserialize, Serialize};

/// A range in the source code, represented as byte offsets.
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
///
/// # Example
///
/// ```rust
/// use minipy_ast::Span;
///
/// // For source "max(1, 2)" the span of "max" would be:
/// let span = Span::new(0, 3);
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minipy_ast::Span;
    ///
    /// let span = Span::new(5, 15);
    /// assert_eq!(span.start(), 5);
    /// assert_eq!(span.end(), 15);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span has zero length.
    ///
    /// tree-sitter reports `MISSING` nodes with empty spans.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Creates a span from a tree-sitter node.
    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        Self {
            start: node.start_byte(),
            end: node.end_byte(),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}
