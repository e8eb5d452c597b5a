//! Renders the AST back to minipy source.
//!
//! Output of a successful lowering parses back to an equal AST: lowering only
//! produces operator trees that the grammar's precedence already implies, so
//! no parentheses are needed.

use std::fmt;

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

use crate::ast::*;

/// Renders `statements` one per line.
///
/// ```
/// use minipy_ast::{parse_to_ast, print};
///
/// let stmts = parse_to_ast("x=1\nprint(max(x,-2)*3)").unwrap();
/// assert_eq!(print(&stmts), "x = 1\nprint(max(x, -2) * 3)");
/// ```
pub fn print(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Define { name, value } => write!(f, "{name} = {value}"),
            Statement::Expr { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Operator chains nest as deep as lowering allows.
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Expression::Number { value } => write!(f, "{value}"),
            Expression::Identifier { name } => f.write_str(name),
            Expression::Builtin1 { name, arg } => write!(f, "{name}({arg})"),
            Expression::Builtin2 { name, arg1, arg2 } => write!(f, "{name}({arg1}, {arg2})"),
            Expression::BinaryOp { op, left, right } => write!(f, "{left} {op} {right}"),
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Builtin1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Builtin2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_numbers() {
        assert_eq!(Expression::number(987.0).to_string(), "987");
        assert_eq!(Expression::number(-1.0).to_string(), "-1");
        assert_eq!(Expression::number(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_print_builtins() {
        let expr = Expression::builtin2(
            Builtin2::Pow,
            Expression::identifier("x"),
            Expression::builtin1(Builtin1::Abs, Expression::number(-2.0)),
        );
        assert_eq!(expr.to_string(), "pow(x, abs(-2))");
    }

    #[test]
    fn test_print_program() {
        let stmts = vec![
            Statement::Define {
                name: "x".to_string(),
                value: Expression::binary(BinaryOp::Minus, Expression::number(4.0), Expression::number(1.0)),
            },
            Statement::Expr {
                expr: Expression::builtin1(Builtin1::Print, Expression::identifier("x")),
            },
        ];
        assert_eq!(print(&stmts), "x = 4 - 1\nprint(x)");
    }
}
