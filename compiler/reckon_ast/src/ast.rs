// Abstract Syntax Tree (AST) definitions for reckon expressions

use std::fmt;

use crate::visit::{Span, Visitable, Visitor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node paired with the source span it was parsed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    Literal(Spanned<LiteralNode>),
    Chain(Spanned<Box<ChainNode>>),
}

/// A numeric literal.
///
/// The parser only ever produces `Int`. Exponent reduction replaces `^`
/// chains with either kind, depending on the computed value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralNode {
    Int(i64),
    Float(f64),
}

/// A run of operators that share one precedence level, applied left to
/// right: `first op1 operand1 op2 operand2 ...`.
///
/// Operands of a chain are literals, chains of a higher precedence or
/// parenthesized sub-expressions. A flat `1+1+...+1` is a single chain, so
/// the depth of the tree grows with parenthesis nesting only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainNode {
    pub first: ExpressionNode,
    pub links: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainLink {
    pub operator: BinaryOperator,
    pub operand: ExpressionNode,
}

impl ChainLink {
    pub fn new(operator: BinaryOperator, operand: ExpressionNode) -> Self {
        Self { operator, operand }
    }
}

impl ChainNode {
    /// Precedence shared by every link, `None` for a chain without links.
    pub fn precedence(&self) -> Option<u8> {
        self.links.first().map(|link| link.operator.precedence())
    }

    /// Span from the first operand to the operand of link `index`.
    pub fn prefix_span(&self, index: usize) -> Span {
        match self.links.get(index) {
            Some(link) => self.first.span().to(&link.operand.span()),
            None => self.first.span(),
        }
    }

    /// The chain printed up to and including link `index`.
    pub fn prefix_to_string(&self, index: usize) -> String {
        ChainDisplay {
            chain: self,
            links: index.saturating_add(1).min(self.links.len()),
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter. All levels are left-associative.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Div => 2,
            BinaryOperator::Pow => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
            BinaryOperator::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl ExpressionNode {
    /// Build a literal node
    pub fn literal(value: LiteralNode, span: Span) -> Self {
        ExpressionNode::Literal(Spanned::new(value, span))
    }

    /// Build a chain whose span covers all operands. Without links this is
    /// `first` itself.
    pub fn chain(first: ExpressionNode, links: Vec<ChainLink>) -> Self {
        let span = match links.last() {
            Some(last) => first.span().to(&last.operand.span()),
            None => return first,
        };
        ExpressionNode::Chain(Spanned::new(Box::new(ChainNode { first, links }), span))
    }

    /// Build a single-operator chain
    pub fn binary(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> Self {
        Self::chain(left, vec![ChainLink::new(operator, right)])
    }

    pub fn span(&self) -> Span {
        match self {
            ExpressionNode::Literal(lit) => lit.span,
            ExpressionNode::Chain(chain) => chain.span,
        }
    }

    /// Replace the span of this node, e.g. to cover enclosing parentheses.
    pub fn with_span(mut self, span: Span) -> Self {
        match &mut self {
            ExpressionNode::Literal(lit) => lit.span = span,
            ExpressionNode::Chain(chain) => chain.span = span,
        }
        self
    }

    /// The first operator of the chain at the root of this node.
    pub fn operator(&self) -> Option<BinaryOperator> {
        match self {
            ExpressionNode::Literal(_) => None,
            ExpressionNode::Chain(chain) => chain.node.links.first().map(|link| link.operator),
        }
    }

    pub fn precedence(&self) -> Option<u8> {
        match self {
            ExpressionNode::Literal(_) => None,
            ExpressionNode::Chain(chain) => chain.node.precedence(),
        }
    }
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            ExpressionNode::Literal(lit) => visitor.visit_literal(lit),
            ExpressionNode::Chain(chain) => visitor.visit_chain(chain),
        }
    }
}

/// Format a number the way reckon prints results: shortest round-trip
/// decimal form, switching to scientific notation from 1e16 upwards.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.abs() >= 1e16 {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for LiteralNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralNode::Int(n) => write!(f, "{n}"),
            LiteralNode::Float(x) => f.write_str(&format_number(*x)),
        }
    }
}

impl LiteralNode {
    fn is_negative(&self) -> bool {
        match self {
            LiteralNode::Int(n) => *n < 0,
            LiteralNode::Float(x) => x.is_sign_negative(),
        }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Literal(lit) => write!(f, "{}", lit.node),
            ExpressionNode::Chain(chain) => {
                let links = chain.node.links.len();
                write!(f, "{}", ChainDisplay { chain: &chain.node, links })
            }
        }
    }
}

/// Prints the first `links` links of a chain with minimal parentheses.
struct ChainDisplay<'a> {
    chain: &'a ChainNode,
    links: usize,
}

impl fmt::Display for ChainDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.chain.precedence().unwrap_or(0);
        write_operand(f, &self.chain.first, |child| child < prec)?;
        for link in self.chain.links.iter().take(self.links) {
            write!(f, "{}", link.operator)?;
            write_operand(f, &link.operand, |child| child <= prec)?;
        }
        Ok(())
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &ExpressionNode,
    needs_parens: impl Fn(u8) -> bool,
) -> fmt::Result {
    let wrap = match operand {
        // reduced literals may be negative, which the input grammar cannot express
        ExpressionNode::Literal(lit) => lit.node.is_negative(),
        ExpressionNode::Chain(chain) => chain.node.precedence().is_some_and(&needs_parens),
    };
    if wrap {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}
