//! Program lowering: the CST root to a statement sequence.

use tracing::debug;

use super::cursor::CstCursor;
use super::kind::NodeKind;
use super::scope::Definitions;
use super::statements::lower_statement;
use crate::ast::Statement;
use crate::error::{LowerError, ParseErrorKind};

/// Lowers every statement of the `module` under the cursor, in document
/// order. An empty module lowers to no statements.
pub fn lower_program(
    cursor: &mut CstCursor<'_>,
    defs: &mut Definitions,
) -> Result<Vec<Statement>, LowerError> {
    if cursor.kind() != NodeKind::Module {
        return Err(cursor.unsupported(ParseErrorKind::UnsupportedProgram));
    }
    if !cursor.has_children() {
        return Ok(Vec::new());
    }

    let statements = cursor.in_children(|c| {
        let mut statements = Vec::new();
        loop {
            if c.kind() != NodeKind::Semicolon {
                statements.push(lower_statement(c, defs)?);
            }
            if !c.goto_next_sibling() {
                break;
            }
        }
        Ok(statements)
    })?;

    debug!(
        statements = statements.len(),
        definitions = defs.len(),
        "lowered program"
    );
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;
    use config::constants::MAX_NESTING_DEPTH;
    use minipy_parser::parse_source;

    fn lower(source: &str) -> (Result<Vec<Statement>, LowerError>, Definitions) {
        let tree = parse_source(source).unwrap();
        let mut cursor = CstCursor::new(&tree, source, MAX_NESTING_DEPTH);
        let mut defs = Definitions::new();
        let result = lower_program(&mut cursor, &mut defs);
        (result, defs)
    }

    #[test]
    fn test_statements_in_document_order() {
        let (result, defs) = lower("y = 1\nx = 2\nprint(y)");
        let stmts = result.unwrap();
        assert_eq!(stmts.len(), 3);
        assert!(matches!(&stmts[2], Statement::Expr { expr: Expression::Builtin1 { .. } }));
        assert_eq!(defs.iter().collect::<Vec<_>>(), ["y", "x"]);
    }

    #[test]
    fn test_semicolons_separate_statements() {
        let (result, _) = lower("a = 1; b = a;");
        assert_eq!(result.unwrap().len(), 2);
    }

    #[test]
    fn test_empty_program() {
        let (result, _) = lower("");
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_comment_only_program() {
        let (result, _) = lower("# nothing here\n");
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_first_failure_aborts() {
        let (result, defs) = lower("a = 1\nb = c\nd = 2");
        let err = result.unwrap_err();
        assert!(matches!(err, LowerError::Reference { ref name, .. } if name == "c"));
        assert!(!defs.is_defined("d"));
    }

    #[test]
    fn test_non_module_root_is_rejected() {
        let source = "x = 1";
        let tree = parse_source(source).unwrap();
        let mut cursor = CstCursor::new(&tree, source, MAX_NESTING_DEPTH);
        cursor.goto_first_child();

        let err = lower_program(&mut cursor, &mut Definitions::new()).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::UnsupportedProgram));
    }
}
