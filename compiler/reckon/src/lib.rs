use reckon_ast::format_number;
use reckon_eval::{Calculator, ErrorCategory, ErrorKind, EvalError};
use reckon_parser::parser::{render_snippet, Diagnostic};

/// Printed for an empty line.
pub const EMPTY_INPUT: &str = "Please enter a mathematical expression.";

/// The message shown to the user for a failed evaluation.
pub fn message_for(err: &EvalError) -> String {
    match err.category() {
        ErrorCategory::InvalidInput => format!("The input is invalid. {err}"),
        ErrorCategory::MalformedSyntax => format!("The expression syntax is malformed. {err}"),
        ErrorCategory::Overflow => "The result is too large to calculate.".to_string(),
        ErrorCategory::Other => "An unexpected error occurred.".to_string(),
    }
}

/// A caret snippet pointing at the part of `source` that caused `err`.
pub fn snippet_for(err: &EvalError, source: &str) -> String {
    let diag = match err {
        EvalError::Syntax(syntax) => Diagnostic::from(syntax),
        other => Diagnostic::at_span(other.span(), other.to_string()),
    };
    let diag = match help_for(err.kind()) {
        Some(help) if diag.help.is_none() => diag.with_help(help),
        _ => diag,
    };
    render_snippet(&diag, source)
}

fn help_for(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::IllegalCharacter => {
            Some("Only digits, + - * / ^ and parentheses are allowed, without spaces")
        }
        ErrorKind::UnsupportedSignPrefix => {
            Some("Write a negative value as a difference, e.g. 0-5")
        }
        ErrorKind::OperandOutOfRange => Some("Operands must be at most 2147483647"),
        ErrorKind::UndefinedResult => Some("A negative base needs an integer exponent"),
        _ => None,
    }
}

/// Evaluate one line of input into the text printed for it.
pub fn respond(calc: &Calculator, line: &str) -> Result<String, String> {
    if line.is_empty() {
        return Err(EMPTY_INPUT.to_string());
    }
    calc.evaluate(line)
        .map(format_number)
        .map_err(|err| message_for(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn respond_default(line: &str) -> Result<String, String> {
        respond(&Calculator::default(), line)
    }

    #[test]
    fn test_results() {
        assert_eq!(respond_default("(100+200)*3+99"), Ok("999".to_string()));
        assert_eq!(respond_default("11^2/50"), Ok("2.42".to_string()));
        assert_eq!(respond_default("1/3"), Ok("0.3333333333333333".to_string()));
        assert_eq!(
            respond_default("((100+1)^3)*((4^16)+255)"),
            Ok("4425109362762851".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(respond_default(""), Err(EMPTY_INPUT.to_string()));
        assert!(respond_default("85m/2^2/500")
            .unwrap_err()
            .starts_with("The input is invalid. The expression contains illegal characters."));
        assert!(respond_default("-200^3")
            .unwrap_err()
            .starts_with("The input is invalid. The expression contains number prefixes"));
        assert_eq!(
            respond_default("(1+2*5"),
            Err(
                "The expression syntax is malformed. unbalanced parentheses: missing ')'"
                    .to_string()
            )
        );
        assert_eq!(
            respond_default("455^455"),
            Err("The result is too large to calculate.".to_string())
        );
        assert_eq!(
            respond_default("(0-8)^(1/3)"),
            Err("An unexpected error occurred.".to_string())
        );
    }

    #[test]
    fn test_snippet_points_at_operand() {
        let err = Calculator::default().evaluate("(2147483648*1)+500").unwrap_err();
        let snippet = snippet_for(&err, "(2147483648*1)+500");
        assert!(snippet.contains("  | (2147483648*1)+500\n  |  ^~~~~~~~~~"));
        assert!(snippet.ends_with("= help: Operands must be at most 2147483647"));
    }

    #[test]
    fn test_snippet_help_for_each_phase() {
        let calc = Calculator::default();
        let help = |source: &str| {
            let err = calc.evaluate(source).unwrap_err();
            snippet_for(&err, source)
                .lines()
                .last()
                .map(str::to_string)
                .unwrap_or_default()
        };
        assert_eq!(
            help("1 + 2"),
            "  = help: Only digits, + - * / ^ and parentheses are allowed, without spaces"
        );
        assert_eq!(help("-5+1"), "  = help: Write a negative value as a difference, e.g. 0-5");
        // syntax errors keep the parser's own help
        assert_eq!(help("(1+2"), "  = help: Did you forget a closing ')'?");
        assert!(!snippet_for(&calc.evaluate("455^455").unwrap_err(), "455^455").contains("help"));
    }
}
