//! Grammar node kinds understood by the lowering pass.
//!
//! tree-sitter identifies nodes by string. Lowering matches on this closed
//! enum instead, so every dispatch has an explicit arm for kinds it does not
//! handle.

/// A tree-sitter-python node kind, narrowed to what lowering needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Module,
    ExpressionStatement,
    Assignment,
    Integer,
    Float,
    Identifier,
    UnaryOperator,
    BinaryOperator,
    Call,
    ArgumentList,
    /// The `=` token of an assignment.
    Equals,
    CloseParen,
    /// Separator between simple statements on one line.
    Semicolon,
    /// Any other named node or token.
    Other,
}

impl NodeKind {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "module" => NodeKind::Module,
            "expression_statement" => NodeKind::ExpressionStatement,
            "assignment" => NodeKind::Assignment,
            "integer" => NodeKind::Integer,
            "float" => NodeKind::Float,
            "identifier" => NodeKind::Identifier,
            "unary_operator" => NodeKind::UnaryOperator,
            "binary_operator" => NodeKind::BinaryOperator,
            "call" => NodeKind::Call,
            "argument_list" => NodeKind::ArgumentList,
            "=" => NodeKind::Equals,
            ")" => NodeKind::CloseParen,
            ";" => NodeKind::Semicolon,
            _ => NodeKind::Other,
        }
    }
}
