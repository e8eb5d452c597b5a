//! # minipy AST Crate
//!
//! Lowers the tree-sitter CST of a minipy program into a small, typed AST.
//! minipy is a Python subset: number literals, names, `+ - *`, single-name
//! assignment and the builtins `print`, `abs`, `max`, `min` and `pow`.
//!
//! ## Architecture
//!
//! ```text
//! minipy Source → minipy-parser (tree-sitter CST) → minipy-ast (AST)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use minipy_ast::{parse_to_ast, BinaryOp, Expression, Statement};
//!
//! let statements = parse_to_ast("x = 1 + 2").unwrap();
//! assert_eq!(
//!     statements,
//!     vec![Statement::Define {
//!         name: "x".to_string(),
//!         value: Expression::binary(BinaryOp::Plus, Expression::number(1.0), Expression::number(2.0)),
//!     }]
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: Closed enums; builtin names are enums, not strings
//! - **Fail Fast**: The first error aborts lowering, nothing partial is returned
//! - **Located Errors**: Every error carries the byte span and source text it is about
//! - **No Evaluation**: Pure syntax transformation plus definition-before-use

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod lower;
pub mod printer;
pub mod span;

// Re-exports for convenience
pub use ast::*;
pub use config::constants::LowerConfig;
pub use diagnostic::Diagnostic;
pub use error::{LowerError, ParseErrorKind};
pub use lower::{lower_tree, parse_to_ast, parse_with_config};
pub use printer::print;
pub use span::Span;
