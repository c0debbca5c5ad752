//! Exponent reduction.
//!
//! Every `^` chain is replaced by a literal holding its value before the rest
//! of the tree is evaluated. Operands are reduced bottom-up, then a `^` chain
//! is folded from the left, so `2^3^2` computes `2^3` first.

use reckon_ast::{BinaryOperator, ChainLink, ChainNode, ExpressionNode, OperatorCounter, Span};

use crate::error::EvalError;
use crate::evaluator::evaluate_arithmetic;
use crate::value::Value;

/// Replace every `^` chain in `expr` with its computed value.
pub fn reduce_exponents(expr: ExpressionNode) -> Result<ExpressionNode, EvalError> {
    let powers = OperatorCounter::count(&expr).get(BinaryOperator::Pow);
    if powers == 0 {
        return Ok(expr);
    }
    log::trace!("reducing {powers} exponent(s) in {expr}");

    let reduced = reduce_node(expr)?;
    log::debug!("reduced expression: {reduced}");
    Ok(reduced)
}

fn reduce_node(expr: ExpressionNode) -> Result<ExpressionNode, EvalError> {
    let chain = match expr {
        ExpressionNode::Literal(_) => return Ok(expr),
        ExpressionNode::Chain(chain) => chain,
    };
    let span = chain.span;
    let ChainNode { first, links } = *chain.node;

    let first = reduce_node(first)?;
    let links = links
        .into_iter()
        .map(|link| Ok(ChainLink::new(link.operator, reduce_node(link.operand)?)))
        .collect::<Result<Vec<_>, EvalError>>()?;

    if links.first().is_some_and(|link| link.operator == BinaryOperator::Pow) {
        fold_powers(first, links, span)
    } else {
        Ok(ExpressionNode::chain(first, links).with_span(span))
    }
}

/// Fold a reduced `^` chain into one literal, leftmost step first.
///
/// Each intermediate literal spans the steps folded so far; the final one
/// takes the span of the whole chain.
fn fold_powers(
    first: ExpressionNode,
    links: Vec<ChainLink>,
    span: Span,
) -> Result<ExpressionNode, EvalError> {
    let last = links.len().saturating_sub(1);
    let mut acc = first;

    for (index, link) in links.into_iter().enumerate() {
        let step_span = if index == last {
            span
        } else {
            acc.span().to(&link.operand.span())
        };
        let base = evaluate_arithmetic(&acc)?;
        let power = evaluate_arithmetic(&link.operand)?;
        let value = Value::power(base, power).map_err(|fault| {
            let step =
                ExpressionNode::binary(acc.clone(), BinaryOperator::Pow, link.operand.clone());
            EvalError::from_fault(fault, step.to_string(), step_span)
        })?;
        log::trace!("{base}^{power} = {value}");

        acc = ExpressionNode::literal(value.to_literal(), step_span);
    }
    Ok(acc)
}
