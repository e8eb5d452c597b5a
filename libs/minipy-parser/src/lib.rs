//! This crate provides concrete syntax trees for minipy source code using the
//! [tree-sitter][] parsing library and its Python grammar.
//!
//! minipy is a strict subset of Python, so the Python grammar is used as-is;
//! deciding which of its node kinds are meaningful is left to `minipy-ast`.
//!
//! ```
//! let tree = minipy_parser::parse_source("x = 1\nprint(x)").unwrap();
//! assert!(!tree.root_node().has_error());
//! assert_eq!(tree.root_node().kind(), "module");
//! ```
//!
//! [tree-sitter]: https://tree-sitter.github.io/

use thiserror::Error;
use tree_sitter::{Language, Parser, Tree};

/// The tree-sitter [`LanguageFn`][LanguageFn] for the Python grammar.
///
/// [LanguageFn]: https://docs.rs/tree-sitter-language/*/tree_sitter_language/struct.LanguageFn.html
pub use tree_sitter_python::LANGUAGE;

/// Errors raised before a syntax tree exists.
///
/// Syntax errors in the source are not reported here: tree-sitter always
/// produces a tree and marks the broken regions with `ERROR` or `MISSING`
/// nodes.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The grammar was compiled against an incompatible tree-sitter ABI.
    #[error("failed to load the Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter gave up without producing a tree.
    #[error("parser returned no tree")]
    NoTree,
}

/// Returns the grammar as a tree-sitter [`Language`].
pub fn language() -> Language {
    LANGUAGE.into()
}

/// Parses minipy source code and returns a syntax tree.
///
/// This is a high-level wrapper around tree-sitter that handles parser
/// initialization and error reporting.
///
/// # Arguments
/// * `source` - The minipy source code to parse
///
/// # Returns
/// * `Ok(Tree)` - The parsed syntax tree, possibly containing error nodes
/// * `Err(ParserError)` - The grammar could not be loaded or no tree was produced
///
/// # Examples
/// ```
/// use minipy_parser::parse_source;
///
/// let tree = parse_source("max(1, 2)").unwrap();
/// assert!(!tree.root_node().has_error());
/// ```
pub fn parse_source(source: &str) -> Result<Tree, ParserError> {
    let mut parser = Parser::new();
    parser.set_language(&language())?;

    parser.parse(source, None).ok_or(ParserError::NoTree)
}
