//! Argument list lowering.

use super::cursor::CstCursor;
use super::expressions::lower_expression;
use super::kind::NodeKind;
use super::scope::Definitions;
use crate::ast::Expression;
use crate::error::LowerError;

/// Lowers every argument of an `argument_list`, in order.
///
/// The cursor starts on the opening `(`. Arguments and separators alternate
/// until the closing `)`. Arity is left to the caller.
pub fn lower_arguments(
    cursor: &mut CstCursor<'_>,
    defs: &Definitions,
) -> Result<Vec<Expression>, LowerError> {
    let mut args = Vec::new();

    while cursor.goto_next_sibling() {
        if cursor.kind() == NodeKind::CloseParen {
            break;
        }
        args.push(lower_expression(cursor, defs)?);

        // separator
        if !cursor.goto_next_sibling() || cursor.kind() == NodeKind::CloseParen {
            break;
        }
    }

    Ok(args)
}
