//! Parser for reckon expressions using nom over a token slice.

mod diagnostics;
mod error;
mod expressions;
#[cfg(test)]
pub(crate) mod test_utils;
mod token_stream;

use reckon_ast::ExpressionNode;
use reckon_lexer::Token;

pub use diagnostics::{render_snippet, Diagnostic};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use expressions::{get_binary_operator, ExpressionParser, PResult};
pub use token_stream::{span_of, TokenSlice};

/// Maximum parenthesis nesting accepted by default
pub const MAX_NESTING_DEPTH: usize = 100;

/// Limits applied while parsing.
///
/// Runs of same-precedence operators become flat chains, so parenthesis
/// nesting is the only thing that deepens the tree. Bounding it bounds the
/// recursion of every later pass over the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How many parentheses may be open at once
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Parse a complete token stream into an expression tree.
pub fn parse_expression(
    tokens: &[Token],
    config: &ParserConfig,
) -> Result<ExpressionNode, SyntaxError> {
    let end = tokens.last().map(Token::end_offset).unwrap_or(0);
    log::debug!("parsing {} tokens", tokens.len());
    ExpressionParser::new(config, end).parse_complete(TokenSlice::new(tokens))
}

/// Lex and parse `source` with the default limits.
pub fn parse_str(source: &str) -> Result<ExpressionNode, SyntaxError> {
    let tokens = reckon_lexer::tokenize(source);
    parse_expression(&tokens, &ParserConfig::default())
}
