//! Evaluation of reckon arithmetic expressions.
//!
//! [`evaluate`] runs the whole pipeline on a piece of text:
//!
//! 1. [`reckon_lexer::validate`] rejects illegal characters, sign prefixes
//!    and operands outside the 32-bit range,
//! 2. the text is lexed and parsed into an [`ExpressionNode`],
//! 3. [`reduce_exponents`] folds every `^` chain into a literal,
//! 4. [`evaluate_arithmetic`] computes the result with checked arithmetic.
//!
//! Each phase runs only if the previous one succeeded, so validation errors
//! always win over syntax errors, which always win over arithmetic errors.

mod error;
mod evaluator;
mod reduce;
mod value;

use reckon_ast::ExpressionNode;
use reckon_parser::ParserConfig;

pub use error::{ErrorCategory, ErrorKind, EvalError};
pub use evaluator::{evaluate_arithmetic, Evaluator};
pub use reduce::reduce_exponents;
pub use value::{ArithmeticFault, Value};

/// Evaluate `expression` with the default limits.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Calculator::default().evaluate(expression)
}

/// Calculator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalcConfig {
    pub parser: ParserConfig,
}

/// The outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The expression after exponent reduction
    pub reduced: String,
    pub value: Value,
}

impl Evaluation {
    pub fn as_f64(&self) -> f64 {
        self.value.as_real()
    }
}

/// A stateless expression evaluator.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Validate and parse `expression` without evaluating it.
    pub fn parse(&self, expression: &str) -> Result<ExpressionNode, EvalError> {
        reckon_lexer::validate(expression)?;
        let tokens = reckon_lexer::tokenize(expression);
        Ok(reckon_parser::parse_expression(&tokens, &self.config.parser)?)
    }

    /// Parse `expression` and reduce its exponents.
    pub fn reduce(&self, expression: &str) -> Result<ExpressionNode, EvalError> {
        reduce_exponents(self.parse(expression)?)
    }

    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        self.evaluate_detailed(expression).map(|e| e.as_f64())
    }

    pub fn evaluate_detailed(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let reduced = self.reduce(expression)?;
        let value = Evaluator::new().evaluate(&reduced)?;
        log::debug!("{expression} = {value}");
        Ok(Evaluation {
            reduced: reduced.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_logger::Builder;
    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = Builder::new()
                .filter_level(LevelFilter::Trace)
                .is_test(true)
                .try_init();
        });
    }

    #[test]
    fn test_evaluate_detailed() {
        init_test_logger();
        let calc = Calculator::default();
        let evaluation = calc.evaluate_detailed("((100+1)^3)*((4^16)+255)").unwrap();
        assert_eq!(evaluation.reduced, "1030301*(4294967296+255)");
        assert_eq!(evaluation.value, Value::Int64(4_425_109_362_762_851));
        assert_eq!(evaluation.as_f64(), 4425109362762851.0);
    }

    #[test]
    fn test_phase_priority() {
        init_test_logger();
        // illegal character beats the syntax error
        assert_eq!(evaluate("1+*m").unwrap_err().kind(), ErrorKind::IllegalCharacter);
        // syntax error beats the overflow
        assert_eq!(evaluate("455^455+").unwrap_err().kind(), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_custom_nesting_limit() {
        let calc = Calculator::new(CalcConfig {
            parser: ParserConfig {
                max_nesting_depth: 2,
            },
        });
        assert_eq!(calc.evaluate("((1))"), Ok(1.0));
        assert_eq!(
            calc.evaluate("(((1)))").unwrap_err().kind(),
            ErrorKind::NestingTooDeep
        );
    }
}
