//! Abstract Syntax Tree (AST) for reckon arithmetic expressions.
//!
//! This crate defines the expression tree produced by `reckon_parser` and
//! consumed by `reckon_eval`, along with a visitor for traversing it.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::{
    format_number, BinaryOperator, ChainLink, ChainNode, ExpressionNode, LiteralNode, Spanned,
};
pub use visit::{OperatorCounter, Span, Visitable, Visitor};

/// A result type for AST serialization.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, serde_json::Error>;

/// Serializes an AST node to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use reckon_ast::{to_json, ExpressionNode, LiteralNode, Span};
///
/// let expr = ExpressionNode::literal(LiteralNode::Int(42), Span::new(0, 2));
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("\"Int\": 42"));
/// assert!(json.contains("\"end\": 2"));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json)
}
