//! # minipy AST
//!
//! The closed set of statements and expressions produced by lowering.
//! Nodes own their children; nothing is shared and nothing points back up.
//!
//! With serde the nodes serialize as internally tagged objects, e.g.
//! `{"tag":"num","value":1.0}`.

use serde::{Deserialize, Serialize};

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Statement {
    /// `name = value`
    #[serde(rename = "define")]
    Define { name: String, value: Expression },
    /// A bare expression evaluated for effect.
    #[serde(rename = "expr")]
    Expr { expr: Expression },
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Expression {
    /// Numeric literal, including sign forms such as `-1`.
    #[serde(rename = "num")]
    Number { value: f64 },
    /// Reference to a name defined earlier in the program.
    #[serde(rename = "id")]
    Identifier { name: String },
    /// One-argument builtin call.
    #[serde(rename = "builtin1")]
    Builtin1 { name: Builtin1, arg: Box<Expression> },
    /// Two-argument builtin call.
    #[serde(rename = "builtin2")]
    Builtin2 {
        name: Builtin2,
        arg1: Box<Expression>,
        arg2: Box<Expression>,
    },
    /// Binary arithmetic.
    #[serde(rename = "binop")]
    BinaryOp {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn number(value: f64) -> Self {
        Expression::Number { value }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { name: name.into() }
    }

    pub fn builtin1(name: Builtin1, arg: Expression) -> Self {
        Expression::Builtin1 {
            name,
            arg: Box::new(arg),
        }
    }

    pub fn builtin2(name: Builtin2, arg1: Expression, arg2: Expression) -> Self {
        Expression::Builtin2 {
            name,
            arg1: Box::new(arg1),
            arg2: Box::new(arg2),
        }
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Plus,
    Minus,
    Mul,
}

impl BinaryOp {
    /// Maps operator text from the source to an operator.
    ///
    /// ```
    /// use minipy_ast::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::from_symbol("*"), Some(BinaryOp::Mul));
    /// assert_eq!(BinaryOp::from_symbol("/"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Plus),
            "-" => Some(BinaryOp::Minus),
            "*" => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Mul => "*",
        }
    }
}

/// Builtins taking exactly one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Builtin1 {
    Print,
    Abs,
}

impl Builtin1 {
    pub fn name(self) -> &'static str {
        match self {
            Builtin1::Print => "print",
            Builtin1::Abs => "abs",
        }
    }
}

/// Builtins taking exactly two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Builtin2 {
    Max,
    Min,
    Pow,
}

impl Builtin2 {
    pub fn name(self) -> &'static str {
        match self {
            Builtin2::Max => "max",
            Builtin2::Min => "min",
            Builtin2::Pow => "pow",
        }
    }
}

/// A builtin of either arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Unary(Builtin1),
    Binary(Builtin2),
}

/// Every builtin the language knows, keyed by its source name.
pub const BUILTINS: [(&str, Builtin); 5] = [
    ("print", Builtin::Unary(Builtin1::Print)),
    ("abs", Builtin::Unary(Builtin1::Abs)),
    ("max", Builtin::Binary(Builtin2::Max)),
    ("min", Builtin::Binary(Builtin2::Min)),
    ("pow", Builtin::Binary(Builtin2::Pow)),
];

impl Builtin {
    /// Looks a callee name up in [`BUILTINS`].
    ///
    /// ```
    /// use minipy_ast::{Builtin, Builtin2};
    ///
    /// assert_eq!(Builtin::lookup("pow"), Some(Builtin::Binary(Builtin2::Pow)));
    /// assert_eq!(Builtin::lookup("len"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, builtin)| *builtin)
    }

    /// Number of arguments the builtin accepts.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Unary(_) => 1,
            Builtin::Binary(_) => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Unary(b) => b.name(),
            Builtin::Binary(b) => b.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_names_round_trip() {
        for (name, builtin) in BUILTINS {
            assert_eq!(builtin.name(), name);
            assert_eq!(Builtin::lookup(name), Some(builtin));
        }
    }

    #[test]
    fn test_builtin_arities() {
        assert_eq!(Builtin::lookup("print").map(Builtin::arity), Some(1));
        assert_eq!(Builtin::lookup("abs").map(Builtin::arity), Some(1));
        assert_eq!(Builtin::lookup("max").map(Builtin::arity), Some(2));
        assert_eq!(Builtin::lookup("min").map(Builtin::arity), Some(2));
        assert_eq!(Builtin::lookup("pow").map(Builtin::arity), Some(2));
    }

    #[test]
    fn test_builtin_lookup_is_case_sensitive() {
        assert_eq!(Builtin::lookup("Print"), None);
    }

    #[test]
    fn test_binary_op_symbols() {
        for op in [BinaryOp::Plus, BinaryOp::Minus, BinaryOp::Mul] {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(BinaryOp::from_symbol("**"), None);
    }
}
