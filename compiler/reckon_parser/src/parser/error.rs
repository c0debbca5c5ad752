use nom::error::{ErrorKind, ParseError};
use reckon_ast::Span;
use thiserror::Error;

use super::token_stream::{span_of, TokenSlice};

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("the expression is empty")]
    EmptyExpression,

    #[error("too many operators: expected a number or '(' but found '{0}'")]
    MissingOperand(String),

    #[error("too many operators: the expression ends with an operator")]
    DanglingOperator,

    #[error("unbalanced parentheses: missing ')'")]
    UnclosedParenthesis,

    #[error("unbalanced parentheses: unexpected ')'")]
    UnexpectedClosingParenthesis,

    #[error("missing operator before '{0}'")]
    MissingOperator(String),

    /// A token outside the expression alphabet. Validated text never lexes
    /// to one, so this only comes from parsing raw token streams.
    #[error("unexpected input '{0}'")]
    UnexpectedToken(String),

    #[error("the expression is nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// A parse failure anchored at the offending source span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Anchor `kind` at the first token of `input`, or at `end` when the
    /// input is exhausted.
    pub fn at(input: TokenSlice<'_>, kind: SyntaxErrorKind, end: usize) -> Self {
        let span = input.peek().map(span_of).unwrap_or(Span::new(end, end));
        Self { kind, span }
    }
}

/// Recoverable nom errors name the token a combinator refused; the
/// expression parser replaces them with a precise kind before they escape.
impl<'a> ParseError<TokenSlice<'a>> for SyntaxError {
    fn from_error_kind(input: TokenSlice<'a>, _kind: ErrorKind) -> Self {
        match input.peek() {
            Some(token) => Self {
                kind: SyntaxErrorKind::UnexpectedToken(token.lexeme.clone()),
                span: span_of(token),
            },
            None => Self {
                kind: SyntaxErrorKind::DanglingOperator,
                span: Span::default(),
            },
        }
    }

    fn append(_input: TokenSlice<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
