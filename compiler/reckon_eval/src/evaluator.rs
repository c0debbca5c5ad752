use reckon_ast::{
    BinaryOperator, ChainNode, ExpressionNode, LiteralNode, Span, Spanned, Visitable, Visitor,
};

use crate::error::EvalError;
use crate::value::Value;

/// Evaluates an expression tree with checked arithmetic.
///
/// Chains are folded left to right in a loop. `^` links are evaluated with
/// the same re-typing the exponent reducer applies, so evaluating a tree
/// gives the same result whether or not it was reduced first.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&mut self, expr: &ExpressionNode) -> Result<Value, EvalError> {
        expr.accept(self)
    }
}

impl Visitor for Evaluator {
    type Output = Value;
    type Error = EvalError;

    fn visit_literal(&mut self, node: &Spanned<LiteralNode>) -> Result<Value, EvalError> {
        Ok(Value::from(node.node))
    }

    fn visit_chain(&mut self, node: &Spanned<Box<ChainNode>>) -> Result<Value, EvalError> {
        let chain = &node.node;
        let mut acc = chain.first.accept(self)?;

        for (index, link) in chain.links.iter().enumerate() {
            let operand = link.operand.accept(self)?;
            let result = Value::apply(link.operator, acc, operand).map_err(|fault| {
                let span = failing_span(node, index);
                EvalError::from_fault(fault, chain.prefix_to_string(index), span)
            })?;

            acc = match link.operator {
                BinaryOperator::Pow => Value::from(result.to_literal()),
                _ => result,
            };
        }
        Ok(acc)
    }
}

/// Span of the operation that failed at link `index`. The last link covers
/// the whole chain, parentheses included.
fn failing_span(node: &Spanned<Box<ChainNode>>, index: usize) -> Span {
    if index + 1 == node.node.links.len() {
        node.span
    } else {
        node.node.prefix_span(index)
    }
}

/// Evaluate a tree to a real number.
pub fn evaluate_arithmetic(expr: &ExpressionNode) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(expr).map(|value| value.as_real())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use reckon_parser::parse_str;

    fn eval(source: &str) -> Result<f64, EvalError> {
        evaluate_arithmetic(&parse_str(source).unwrap())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("(100+200)*3+99"), Ok(999.0));
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("5-9"), Ok(-4.0));
    }

    #[test]
    fn test_division_is_real() {
        assert_eq!(eval("7/2"), Ok(3.5));
        assert!((eval("1/3").unwrap() - 0.3333333333333333).abs() < 1e-9);
    }

    #[test]
    fn test_overflow_reports_the_failing_operation() {
        let err = eval("1+3*2147483647").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticOverflow);
        assert_eq!(
            err,
            EvalError::ArithmeticOverflow {
                expression: "3*2147483647".to_string(),
                span: reckon_ast::Span::new(2, 14),
            }
        );
    }

    #[test]
    fn test_overflow_inside_a_chain() {
        let err = eval("5+2147483647-1+3").unwrap_err();
        assert_eq!(
            err,
            EvalError::ArithmeticOverflow {
                expression: "5+2147483647".to_string(),
                span: reckon_ast::Span::new(0, 12),
            }
        );

        // the last link reports the whole chain, parentheses included
        let err = eval("1+(2147483647*2)").unwrap_err();
        assert_eq!(err.span(), reckon_ast::Span::new(2, 16));
    }

    #[test]
    fn test_long_chains_fold_without_recursion() {
        let sum = vec!["1"; 100_000].join("+");
        assert_eq!(eval(&sum), Ok(100_000.0));

        let product = vec!["1"; 100_000].join("*");
        assert_eq!(eval(&product), Ok(1.0));
    }

    #[test]
    fn test_unreduced_power() {
        assert_eq!(eval("6^2+1"), Ok(37.0));
        assert_eq!(eval("2^30*2").unwrap_err().kind(), ErrorKind::ArithmeticOverflow);
    }
}
