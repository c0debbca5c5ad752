use reckon_ast::Span;
use reckon_lexer::ValidationError;
use reckon_parser::{SyntaxError, SyntaxErrorKind};
use thiserror::Error;

use crate::value::ArithmeticFault;

/// Any failure of the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Syntax(SyntaxError),

    #[error("the result of '{expression}' is too large to calculate")]
    ArithmeticOverflow { expression: String, span: Span },

    #[error("'{expression}' has no real result")]
    UndefinedResult { expression: String, span: Span },

    #[error("the expression is nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },
}

/// The flat taxonomy of [`EvalError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalCharacter,
    UnsupportedSignPrefix,
    OperandOutOfRange,
    SyntaxError,
    ArithmeticOverflow,
    UndefinedResult,
    NestingTooDeep,
}

/// How a caller should present an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    InvalidInput,
    MalformedSyntax,
    Overflow,
    Other,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::IllegalCharacter
            | ErrorKind::UnsupportedSignPrefix
            | ErrorKind::OperandOutOfRange => ErrorCategory::InvalidInput,
            ErrorKind::SyntaxError => ErrorCategory::MalformedSyntax,
            ErrorKind::ArithmeticOverflow => ErrorCategory::Overflow,
            ErrorKind::UndefinedResult | ErrorKind::NestingTooDeep => ErrorCategory::Other,
        }
    }
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Validation(ValidationError::IllegalCharacter { .. }) => {
                ErrorKind::IllegalCharacter
            }
            EvalError::Validation(ValidationError::UnsupportedSignPrefix { .. }) => {
                ErrorKind::UnsupportedSignPrefix
            }
            EvalError::Validation(ValidationError::OperandOutOfRange { .. }) => {
                ErrorKind::OperandOutOfRange
            }
            EvalError::Syntax(_) => ErrorKind::SyntaxError,
            EvalError::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
            EvalError::UndefinedResult { .. } => ErrorKind::UndefinedResult,
            EvalError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }

    /// The part of the expression the error refers to
    pub fn span(&self) -> Span {
        match self {
            EvalError::Validation(err) => {
                let start = err.position();
                Span::new(start, start + err.fragment().len())
            }
            EvalError::Syntax(err) => err.span,
            EvalError::ArithmeticOverflow { span, .. }
            | EvalError::UndefinedResult { span, .. }
            | EvalError::NestingTooDeep { span, .. } => *span,
        }
    }

    pub(crate) fn from_fault(fault: ArithmeticFault, expression: String, span: Span) -> Self {
        match fault {
            ArithmeticFault::Overflow => EvalError::ArithmeticOverflow { expression, span },
            ArithmeticFault::Undefined => EvalError::UndefinedResult { expression, span },
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(err: SyntaxError) -> Self {
        match err.kind {
            SyntaxErrorKind::NestingTooDeep(limit) => EvalError::NestingTooDeep {
                limit,
                span: err.span,
            },
            _ => EvalError::Syntax(err),
        }
    }
}
