use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What went wrong when a CST did not have the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// The source contains `ERROR` or `MISSING` nodes.
    Syntax,
    /// The grammar could not be loaded or produced no tree.
    GrammarUnavailable,
    /// The root is not a module.
    UnsupportedProgram,
    UnsupportedStatement,
    /// Assignment to something other than a plain name.
    UnsupportedTarget,
    UnsupportedExpression,
    InvalidNumber,
    /// A unary operator other than `+` or `-`.
    UnsupportedUnary,
    /// A sign applied to something that is not a bare number.
    UnaryOperation,
    UnknownBuiltin1,
    UnknownBuiltin2,
    TooManyArguments,
    MissingArguments,
    UnknownBinaryOperator,
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ParseErrorKind::Syntax => "invalid syntax",
            ParseErrorKind::GrammarUnavailable => "parser unavailable",
            ParseErrorKind::UnsupportedProgram => "could not parse program",
            ParseErrorKind::UnsupportedStatement => "could not parse stmt",
            ParseErrorKind::UnsupportedTarget => "unsupported assignment target",
            ParseErrorKind::UnsupportedExpression => "could not parse expr",
            ParseErrorKind::InvalidNumber => "invalid number literal",
            ParseErrorKind::UnsupportedUnary => "unsupported unary expression",
            ParseErrorKind::UnaryOperation => "unary operation failed",
            ParseErrorKind::UnknownBuiltin1 => "unknown builtin of arity 1",
            ParseErrorKind::UnknownBuiltin2 => "unknown builtin of arity 2",
            ParseErrorKind::TooManyArguments => "too many arguments",
            ParseErrorKind::MissingArguments => "missing arguments",
            ParseErrorKind::UnknownBinaryOperator => "unknown binary operator",
            ParseErrorKind::NestingTooDeep => "nesting too deep",
        };
        f.write_str(message)
    }
}

/// Failure of a lowering pass. The first failure aborts the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum LowerError {
    /// A name was used before any assignment to it.
    #[error("ReferenceError: name {name} is not defined")]
    Reference { name: String, span: Span },

    /// The CST did not have a shape this pass understands.
    #[error("ParseError: {kind} at {span}: {snippet}")]
    Parse {
        kind: ParseErrorKind,
        span: Span,
        snippet: String,
    },
}

impl LowerError {
    pub fn parse(kind: ParseErrorKind, span: Span, snippet: impl Into<String>) -> Self {
        LowerError::Parse {
            kind,
            span,
            snippet: snippet.into(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LowerError::Reference { span, .. } | LowerError::Parse { span, .. } => *span,
        }
    }

    /// The parse error kind, or `None` for reference errors.
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            LowerError::Parse { kind, .. } => Some(*kind),
            LowerError::Reference { .. } => None,
        }
    }
}
