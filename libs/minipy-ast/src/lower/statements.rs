//! # Statement Lowering
//!
//! tree-sitter-python wraps both statement forms in `expression_statement`:
//!
//! ```text
//! expression_statement          expression_statement
//! └── assignment                └── <expression>
//!     ├── identifier (target)
//!     ├── "="
//!     └── <expression> (value)
//! ```

use super::cursor::CstCursor;
use super::expressions::lower_expression;
use super::kind::NodeKind;
use super::scope::Definitions;
use crate::ast::Statement;
use crate::error::{LowerError, ParseErrorKind};

/// Lowers the statement under the cursor, registering assignment targets in
/// `defs`.
pub fn lower_statement(
    cursor: &mut CstCursor<'_>,
    defs: &mut Definitions,
) -> Result<Statement, LowerError> {
    if cursor.kind() != NodeKind::ExpressionStatement {
        return Err(cursor.unsupported(ParseErrorKind::UnsupportedStatement));
    }
    let (span, text) = (cursor.span(), cursor.text());

    cursor.in_children(|c| {
        if c.kind() == NodeKind::Assignment {
            return lower_assignment(c, defs);
        }

        let expr = lower_expression(c, defs)?;
        // `1, 2` is a tuple statement
        if c.goto_next_sibling() {
            return Err(LowerError::parse(ParseErrorKind::UnsupportedStatement, span, text));
        }
        Ok(Statement::Expr { expr })
    })
}

/// The target is registered only after the value is lowered, so `x = x + 1`
/// needs an earlier definition of `x`.
fn lower_assignment(
    cursor: &mut CstCursor<'_>,
    defs: &mut Definitions,
) -> Result<Statement, LowerError> {
    let (span, text) = (cursor.span(), cursor.text());

    let (name, value) = cursor.in_children(|c| {
        if c.kind() != NodeKind::Identifier {
            return Err(c.unsupported(ParseErrorKind::UnsupportedTarget));
        }
        let name = c.text();

        // annotated assignments have `:` here
        c.expect_next_sibling()?;
        if c.kind() != NodeKind::Equals || !c.goto_next_sibling() {
            return Err(LowerError::parse(ParseErrorKind::UnsupportedStatement, span, text));
        }

        let value = lower_expression(c, defs)?;
        Ok((name, value))
    })?;

    defs.define(name);
    Ok(Statement::Define {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Expression};
    use config::constants::MAX_NESTING_DEPTH;
    use minipy_parser::parse_source;

    fn lower(source: &str, defs: &mut Definitions) -> Result<Statement, LowerError> {
        let tree = parse_source(source).unwrap();
        let mut cursor = CstCursor::new(&tree, source, MAX_NESTING_DEPTH);
        // go to statement
        cursor.goto_first_child();
        lower_statement(&mut cursor, defs)
    }

    #[test]
    fn test_define_registers_name() {
        let mut defs = Definitions::new();
        let stmt = lower("x = 1", &mut defs).unwrap();
        assert_eq!(
            stmt,
            Statement::Define {
                name: "x".to_string(),
                value: Expression::number(1.0),
            }
        );
        assert!(defs.is_defined("x"));
    }

    #[test]
    fn test_self_reference_requires_prior_definition() {
        let mut defs = Definitions::new();
        let err = lower("x = x + 1", &mut defs).unwrap_err();
        assert!(matches!(err, LowerError::Reference { ref name, .. } if name == "x"));
        assert!(!defs.is_defined("x"));

        defs.define("x");
        let stmt = lower("x = x + 1", &mut defs).unwrap();
        assert_eq!(
            stmt,
            Statement::Define {
                name: "x".to_string(),
                value: Expression::binary(
                    BinaryOp::Plus,
                    Expression::identifier("x"),
                    Expression::number(1.0)
                ),
            }
        );
    }

    #[test]
    fn test_expression_statement() {
        let mut defs = Definitions::new();
        let stmt = lower("2*3", &mut defs).unwrap();
        assert_eq!(
            stmt,
            Statement::Expr {
                expr: Expression::binary(BinaryOp::Mul, Expression::number(2.0), Expression::number(3.0)),
            }
        );
        assert!(defs.is_empty());
    }

    #[test]
    fn test_tuple_statement_is_unsupported() {
        let err = lower("1, 2", &mut Definitions::new()).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::UnsupportedStatement));
    }

    #[test]
    fn test_attribute_target_is_unsupported() {
        let err = lower("a.b = 1", &mut Definitions::new()).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::UnsupportedTarget));
    }

    #[test]
    fn test_annotated_assignment_is_unsupported() {
        let mut defs = Definitions::new();
        let err = lower("x: int = 1", &mut defs).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::UnsupportedStatement));
        assert!(defs.is_empty());
    }

    #[test]
    fn test_augmented_assignment_is_unsupported() {
        let mut defs = Definitions::new();
        defs.define("x");
        let err = lower("x += 1", &mut defs).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::UnsupportedExpression));
    }

    #[test]
    fn test_compound_statement_is_unsupported() {
        let err = lower("pass", &mut Definitions::new()).unwrap_err();
        assert_eq!(
            err,
            LowerError::parse(ParseErrorKind::UnsupportedStatement, crate::Span::new(0, 4), "pass")
        );
    }
}
