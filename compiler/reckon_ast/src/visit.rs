//! Visitor pattern implementation for traversing the AST.
//!
//! Implement [`Visitor`] to compute something from an expression tree; nodes
//! implement [`Visitable`] to dispatch to the matching `visit_*` method.
//! Visitors choose their own output and error types, so an evaluator can
//! fail with its own error enum while a read-only analysis can use
//! [`std::convert::Infallible`].

use std::convert::Infallible;

use crate::ast::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error>;
}

/// A visitor for traversing expression trees.
///
/// The default `visit_chain` visits the operands of a chain from left to
/// right and returns the last operand's output.
pub trait Visitor {
    /// The output type of the visitor.
    type Output;
    /// The error type of the visitor.
    type Error;

    fn visit_literal(&mut self, node: &Spanned<LiteralNode>) -> Result<Self::Output, Self::Error>;

    fn visit_chain(
        &mut self,
        node: &Spanned<Box<ChainNode>>,
    ) -> Result<Self::Output, Self::Error> {
        let mut output = node.node.first.accept(self)?;
        for link in &node.node.links {
            output = link.operand.accept(self)?;
        }
        Ok(output)
    }
}

/// A span in the expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// The starting byte index (inclusive).
    pub start: usize,
    /// The ending byte index (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span that covers both this span and another.
    pub fn to(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The spanned slice of `source`, or an empty string when the span does
    /// not lie inside it.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Counts operator occurrences.
#[derive(Debug, Default)]
pub struct OperatorCounter {
    counts: [usize; 5],
}

impl OperatorCounter {
    /// Creates a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the operators of `expr`.
    pub fn count(expr: &ExpressionNode) -> Self {
        let mut counter = Self::new();
        expr.accept(&mut counter).unwrap_or_else(|never| match never {});
        counter
    }

    /// How many times `op` occurs.
    pub fn get(&self, op: BinaryOperator) -> usize {
        self.counts[Self::slot(op)]
    }

    /// Total number of operators.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn slot(op: BinaryOperator) -> usize {
        match op {
            BinaryOperator::Add => 0,
            BinaryOperator::Sub => 1,
            BinaryOperator::Mul => 2,
            BinaryOperator::Div => 3,
            BinaryOperator::Pow => 4,
        }
    }
}

impl Visitor for OperatorCounter {
    type Output = ();
    type Error = Infallible;

    fn visit_literal(&mut self, _node: &Spanned<LiteralNode>) -> Result<(), Infallible> {
        Ok(())
    }

    fn visit_chain(&mut self, node: &Spanned<Box<ChainNode>>) -> Result<(), Infallible> {
        node.node.first.accept(self)?;
        for link in &node.node.links {
            self.counts[Self::slot(link.operator)] += 1;
            link.operand.accept(self)?;
        }
        Ok(())
    }
}
