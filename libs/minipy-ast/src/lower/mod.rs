//! # CST to AST Lowering
//!
//! Walks the tree-sitter CST once, in pre-order, with a single cursor:
//!
//! ```text
//! lower_tree
//! └── program::lower_program
//!     └── statements::lower_statement
//!         └── expressions::lower_expression
//!             └── arguments::lower_arguments (calls)
//! ```
//!
//! Each call owns its [`Definitions`], so lowering different sources never
//! shares state, whether calls run one after another or in parallel.
//!
//! ## Example
//!
//! ```rust
//! use minipy_ast::lower::parse_to_ast;
//! use minipy_ast::{Expression, Statement};
//!
//! let stmts = parse_to_ast("x = 2\nprint(x)").unwrap();
//! assert_eq!(stmts.len(), 2);
//! assert!(matches!(&stmts[1], Statement::Expr { expr: Expression::Builtin1 { .. } }));
//! ```

mod arguments;
mod cursor;
mod expressions;
mod kind;
mod program;
mod scope;
mod statements;

pub use cursor::CstCursor;
pub use expressions::lower_expression;
pub use kind::NodeKind;
pub use program::lower_program;
pub use scope::Definitions;
pub use statements::lower_statement;

use config::constants::{LowerConfig, SYNTAX_SNIPPET_CHARS};
use tracing::debug;
use tree_sitter::{Node, Tree};

use crate::ast::Statement;
use crate::error::{LowerError, ParseErrorKind};
use crate::span::Span;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parses and lowers `source` with the default configuration.
///
/// # Errors
///
/// The first [`LowerError`] met anywhere in the tree; no partial result is
/// returned.
///
/// # Example
///
/// ```rust
/// use minipy_ast::lower::parse_to_ast;
///
/// assert!(parse_to_ast("x = 1\ny = x * 2").is_ok());
/// assert!(parse_to_ast("y = x * 2").is_err());
/// ```
pub fn parse_to_ast(source: &str) -> Result<Vec<Statement>, LowerError> {
    parse_with_config(source, &LowerConfig::default())
}

/// Parses and lowers `source` with an explicit configuration.
pub fn parse_with_config(source: &str, config: &LowerConfig) -> Result<Vec<Statement>, LowerError> {
    let tree = minipy_parser::parse_source(source).map_err(|err| {
        LowerError::parse(
            ParseErrorKind::GrammarUnavailable,
            Span::new(0, source.len()),
            err.to_string(),
        )
    })?;
    lower_tree(&tree, source, config)
}

/// Lowers a tree already parsed from `source`.
///
/// Trees with syntax errors are rejected before any lowering happens.
pub fn lower_tree(tree: &Tree, source: &str, config: &LowerConfig) -> Result<Vec<Statement>, LowerError> {
    if let Some(err) = first_syntax_error(tree, source) {
        debug!(%err, "rejecting source with syntax errors");
        return Err(err);
    }

    let mut defs = Definitions::new();
    let mut cursor = CstCursor::new(tree, source, config.max_depth);
    lower_program(&mut cursor, &mut defs)
}

// =============================================================================
// SYNTAX ERRORS
// =============================================================================

/// Finds the first `ERROR` or `MISSING` node in document order.
fn first_syntax_error(tree: &Tree, source: &str) -> Option<LowerError> {
    if !tree.root_node().has_error() {
        return None;
    }

    let mut cursor = tree.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(syntax_error(&node, source));
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn syntax_error(node: &Node, source: &str) -> LowerError {
    let snippet = if node.is_missing() {
        format!("missing {}", node.kind())
    } else {
        source
            .get(node.byte_range())
            .unwrap_or_default()
            .chars()
            .take(SYNTAX_SNIPPET_CHARS)
            .collect()
    };
    LowerError::parse(ParseErrorKind::Syntax, Span::from_ts_node(node), snippet)
}

// =============================================================================
// TESTS
// =============================================================================
