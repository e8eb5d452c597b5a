//! # Expression Lowering
//!
//! Converts one CST expression subtree into one [`Expression`].
//!
//! ## Supported Forms
//!
//! | CST node          | AST                         |
//! |-------------------|-----------------------------|
//! | `integer`/`float` | `Expression::Number`        |
//! | `identifier`      | `Expression::Identifier`    |
//! | `unary_operator`  | `Expression::Number` (`-1`) |
//! | `call`            | `Builtin1` / `Builtin2`     |
//! | `binary_operator` | `Expression::BinaryOp`      |
//!
//! Everything else, including parentheses, lists and comparisons, is
//! rejected with the offending source text.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use tracing::trace;

use super::arguments::lower_arguments;
use super::cursor::CstCursor;
use super::kind::NodeKind;
use super::scope::Definitions;
use crate::ast::{BinaryOp, Builtin, Expression};
use crate::error::{LowerError, ParseErrorKind};

/// Lowers the expression under the cursor.
///
/// The cursor is back on the same node when this returns. Identifiers must
/// already be in `defs`.
pub fn lower_expression(
    cursor: &mut CstCursor<'_>,
    defs: &Definitions,
) -> Result<Expression, LowerError> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        match cursor.kind() {
            NodeKind::Integer | NodeKind::Float => lower_number(cursor),
            NodeKind::Identifier => lower_identifier(cursor, defs),
            NodeKind::UnaryOperator => lower_signed_number(cursor),
            NodeKind::Call => lower_call(cursor, defs),
            NodeKind::BinaryOperator => lower_binary(cursor, defs),
            _ => Err(cursor.unsupported(ParseErrorKind::UnsupportedExpression)),
        }
    })
}

fn lower_number(cursor: &CstCursor<'_>) -> Result<Expression, LowerError> {
    parse_finite(cursor.text())
        .map(Expression::number)
        .ok_or_else(|| cursor.unsupported(ParseErrorKind::InvalidNumber))
}

/// Literals that overflow to infinity are not numbers the printer can write back.
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn lower_identifier(cursor: &CstCursor<'_>, defs: &Definitions) -> Result<Expression, LowerError> {
    let name = cursor.text();
    if !defs.is_defined(name) {
        return Err(LowerError::Reference {
            name: name.to_string(),
            span: cursor.span(),
        });
    }
    Ok(Expression::identifier(name))
}

/// `-1`, `+2.5`: a sign directly in front of a number literal.
///
/// Stacked signs (`--1`) are an unsupported unary form; a sign in front of
/// anything else that is not a literal (`-x`) fails as a unary operation. The
/// operand is never lowered.
fn lower_signed_number(cursor: &mut CstCursor<'_>) -> Result<Expression, LowerError> {
    let (operator, operand) = cursor.in_children(|c| {
        let operator = c.text();
        c.expect_next_sibling()?;
        Ok((operator, c.kind()))
    })?;

    if !matches!(operator, "-" | "+") || operand == NodeKind::UnaryOperator {
        return Err(cursor.unsupported(ParseErrorKind::UnsupportedUnary));
    }
    if !matches!(operand, NodeKind::Integer | NodeKind::Float) {
        return Err(cursor.unsupported(ParseErrorKind::UnaryOperation));
    }

    let text = cursor.text();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Expression::number(value)),
        Ok(_) => Err(cursor.unsupported(ParseErrorKind::InvalidNumber)),
        Err(_) => Err(cursor.unsupported(ParseErrorKind::UnaryOperation)),
    }
}

fn lower_call(cursor: &mut CstCursor<'_>, defs: &Definitions) -> Result<Expression, LowerError> {
    let (callee, args) = cursor.in_children(|c| {
        let callee = c.text();
        c.expect_next_sibling()?;
        if c.kind() != NodeKind::ArgumentList {
            return Err(c.unsupported(ParseErrorKind::UnsupportedExpression));
        }
        let args = c.in_children(|c| lower_arguments(c, defs))?;
        Ok((callee, args))
    })?;
    trace!(callee, arguments = args.len(), "lowered call");

    let arity_error = match args.len() {
        0 => ParseErrorKind::MissingArguments,
        1 => ParseErrorKind::UnknownBuiltin1,
        2 => ParseErrorKind::UnknownBuiltin2,
        _ => ParseErrorKind::TooManyArguments,
    };

    let Some(builtin) = Builtin::lookup(callee).filter(|b| b.arity() == args.len()) else {
        return Err(cursor.unsupported(arity_error));
    };

    let mut args = args.into_iter();
    match (builtin, args.next(), args.next()) {
        (Builtin::Unary(name), Some(arg), None) => Ok(Expression::builtin1(name, arg)),
        (Builtin::Binary(name), Some(arg1), Some(arg2)) => Ok(Expression::builtin2(name, arg1, arg2)),
        _ => Err(cursor.unsupported(arity_error)),
    }
}

/// The result nests exactly like the CST, so precedence and associativity
/// come from the grammar.
fn lower_binary(cursor: &mut CstCursor<'_>, defs: &Definitions) -> Result<Expression, LowerError> {
    cursor.in_children(|c| {
        let left = lower_expression(c, defs)?;

        c.expect_next_sibling()?;
        let op = BinaryOp::from_symbol(c.text())
            .ok_or_else(|| c.unsupported(ParseErrorKind::UnknownBinaryOperator))?;

        c.expect_next_sibling()?;
        let right = lower_expression(c, defs)?;

        Ok(Expression::binary(op, left, right))
    })
}
