//! Cursor walker over the tree-sitter CST.
//!
//! Lowering never materializes child lists. It moves a single cursor through
//! the tree and every function leaves the cursor on the node it was handed,
//! so the caller can keep walking siblings.

use tree_sitter::{Node, Tree, TreeCursor};

use super::kind::NodeKind;
use crate::error::{LowerError, ParseErrorKind};
use crate::span::Span;

/// A mutable position in a CST together with the source it was parsed from.
pub struct CstCursor<'a> {
    cursor: TreeCursor<'a>,
    source: &'a str,
    depth: usize,
    max_depth: usize,
}

impl<'a> CstCursor<'a> {
    /// Creates a cursor on the root of `tree`.
    pub fn new(tree: &'a Tree, source: &'a str, max_depth: usize) -> Self {
        Self {
            cursor: tree.walk(),
            source,
            depth: 0,
            max_depth,
        }
    }

    pub fn node(&self) -> Node<'a> {
        self.cursor.node()
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_kind(self.raw_kind())
    }

    /// The grammar's own name for the current node.
    pub fn raw_kind(&self) -> &'static str {
        self.cursor.node().kind()
    }

    pub fn span(&self) -> Span {
        Span::from_ts_node(&self.cursor.node())
    }

    /// Source text covered by the current node.
    pub fn text(&self) -> &'a str {
        self.source
            .get(self.cursor.node().byte_range())
            .unwrap_or_default()
    }

    /// Whether the current node has any child besides comments.
    pub fn has_children(&self) -> bool {
        self.first_child_index().is_some()
    }

    fn first_child_index(&self) -> Option<usize> {
        let node = self.cursor.node();
        let mut walk = node.walk();
        let index = node.children(&mut walk).position(|child| !child.is_extra());
        index
    }

    /// Moves to the first child that is not a comment or other extra.
    pub fn goto_first_child(&mut self) -> bool {
        let Some(index) = self.first_child_index() else {
            return false;
        };
        self.cursor.goto_first_child();
        for _ in 0..index {
            self.cursor.goto_next_sibling();
        }
        true
    }

    /// Moves to the next sibling that is not a comment or other extra.
    /// The cursor does not move when there is none.
    pub fn goto_next_sibling(&mut self) -> bool {
        let mut steps = 0;
        let mut next = self.cursor.node().next_sibling();
        while let Some(node) = next {
            steps += 1;
            if !node.is_extra() {
                for _ in 0..steps {
                    self.cursor.goto_next_sibling();
                }
                return true;
            }
            next = node.next_sibling();
        }
        false
    }

    pub fn goto_parent(&mut self) -> bool {
        self.cursor.goto_parent()
    }

    /// Like [`goto_next_sibling`](Self::goto_next_sibling), but a missing
    /// sibling is an error: the grammar promised one.
    pub fn expect_next_sibling(&mut self) -> Result<(), LowerError> {
        if self.goto_next_sibling() {
            Ok(())
        } else {
            Err(self.unsupported(ParseErrorKind::Syntax))
        }
    }

    /// Runs `f` with the cursor on the first child of the current node, then
    /// returns the cursor to the current node whatever `f` did.
    ///
    /// Fails when the node has no children or when entering it would exceed
    /// the nesting limit.
    pub fn in_children<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, LowerError>,
    ) -> Result<T, LowerError> {
        if self.depth >= self.max_depth {
            return Err(self.unsupported(ParseErrorKind::NestingTooDeep));
        }
        if !self.goto_first_child() {
            return Err(self.unsupported(ParseErrorKind::Syntax));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        self.goto_parent();
        result
    }

    /// Builds a parse error for the current node, quoting its source text.
    pub fn unsupported(&self, kind: ParseErrorKind) -> LowerError {
        LowerError::parse(kind, self.span(), self.text())
    }
}
