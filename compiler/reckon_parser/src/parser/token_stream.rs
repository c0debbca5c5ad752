use reckon_ast::Span;
use reckon_lexer::{Token, TokenType};

/// A cursor over lexed tokens, used as the nom input type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.0.first()
    }

    /// Get the type of the current token without advancing
    pub fn peek_type(&self) -> Option<TokenType> {
        self.peek().map(|t| t.token_type)
    }

    /// The slice after the current token
    pub fn advance(&self) -> Self {
        TokenSlice(self.0.get(1..).unwrap_or(&[]))
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tokens left
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Span covering a single token
pub fn span_of(token: &Token) -> Span {
    Span::new(token.location.offset, token.end_offset())
}
