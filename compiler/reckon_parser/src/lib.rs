//! Parser for reckon arithmetic expressions.
//!
//! Turns the token stream produced by `reckon_lexer` into a
//! `reckon_ast::ExpressionNode`, honouring the usual precedence of
//! `+ -`, `* /` and `^` (all left-associative) and reporting malformed
//! syntax as a [`parser::SyntaxError`] anchored at the offending span.

pub mod parser;

pub use parser::{parse_expression, parse_str, ParserConfig, SyntaxError, SyntaxErrorKind};
