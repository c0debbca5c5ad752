use reckon_ast::Span;

use super::error::{SyntaxError, SyntaxErrorKind};

/// A user-facing error pointing at part of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with an explicit span
    pub fn at_span<S: Into<String>>(span: Span, message: S) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        Diagnostic {
            message: err.kind.to_string(),
            span: err.span,
            help: help_for(&err.kind),
        }
    }
}

fn help_for(kind: &SyntaxErrorKind) -> Option<String> {
    let help = match kind {
        SyntaxErrorKind::EmptyExpression => "Enter a mathematical expression such as '1+2'",
        SyntaxErrorKind::MissingOperand(_) => "Each operator needs a number or '(' on its right",
        SyntaxErrorKind::DanglingOperator => "Add an operand after the last operator",
        SyntaxErrorKind::UnclosedParenthesis => "Did you forget a closing ')'?",
        SyntaxErrorKind::UnexpectedClosingParenthesis => {
            "Did you forget a matching '(' earlier?"
        }
        SyntaxErrorKind::MissingOperator(_) => {
            "Implicit multiplication is not supported; write '*' explicitly"
        }
        SyntaxErrorKind::NestingTooDeep(_) => "Remove redundant parentheses",
        SyntaxErrorKind::UnexpectedToken(_) => return None,
    };
    Some(help.to_string())
}

/// Render a diagnostic with the expression and an underline below the span.
///
/// Single-character spans get a caret, longer spans a caret followed by
/// tildes. An empty span at the end of input is drawn just past the last
/// character.
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let column = source
        .get(..diag.span.start)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| source.chars().count());
    let width = diag.span.slice(source).chars().count().max(1);

    let mut out = String::new();
    out.push_str(&format!("error: {}\n", diag.message));
    out.push_str(&format!(" --> col {}\n", column + 1));
    out.push_str(&format!("  | {source}\n"));
    out.push_str(&format!(
        "  | {}^{}",
        " ".repeat(column),
        "~".repeat(width - 1)
    ));
    if let Some(help) = &diag.help {
        out.push_str(&format!("\n  = help: {help}"));
    }
    out
}
