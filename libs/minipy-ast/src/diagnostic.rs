use crate::error::{LowerError, ParseErrorKind};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A lowering failure rendered for display, with an optional fix-up hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }
}

impl From<&LowerError> for Diagnostic {
    fn from(err: &LowerError) -> Self {
        let diagnostic = Diagnostic::new(err.to_string(), err.span());
        match err {
            LowerError::Reference { name, .. } => {
                diagnostic.with_hint(format!("assign `{name}` before using it"))
            }
            LowerError::Parse { kind, .. } => match hint_for(*kind) {
                Some(hint) => diagnostic.with_hint(hint.to_string()),
                None => diagnostic,
            },
        }
    }
}

fn hint_for(kind: ParseErrorKind) -> Option<&'static str> {
    match kind {
        ParseErrorKind::Syntax => Some("check for unbalanced parentheses or a dangling operator"),
        ParseErrorKind::UnsupportedUnary | ParseErrorKind::UnaryOperation => {
            Some("only `+` or `-` directly before a number is supported")
        }
        ParseErrorKind::UnknownBuiltin1 => Some("one-argument builtins are `print` and `abs`"),
        ParseErrorKind::UnknownBuiltin2 => Some("two-argument builtins are `max`, `min` and `pow`"),
        ParseErrorKind::TooManyArguments | ParseErrorKind::MissingArguments => {
            Some("builtins take one or two arguments")
        }
        ParseErrorKind::UnknownBinaryOperator => Some("supported operators are `+`, `-` and `*`"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_error_hint() {
        let err = LowerError::Reference {
            name: "y".to_string(),
            span: Span::new(4, 5),
        };
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.message, "ReferenceError: name y is not defined");
        assert_eq!(diagnostic.span, Span::new(4, 5));
        assert_eq!(diagnostic.hint.as_deref(), Some("assign `y` before using it"));
    }

    #[test]
    fn test_unsupported_expression_has_no_hint() {
        let err = LowerError::parse(ParseErrorKind::UnsupportedExpression, Span::new(0, 5), "[1,2]");
        let diagnostic = Diagnostic::from(&err);
        assert!(diagnostic.hint.is_none());
        assert!(diagnostic.message.contains("[1,2]"));
    }
}
