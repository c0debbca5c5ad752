//! Lexer for reckon expressions built on the `logos` crate.
//! Converts expression text into positioned tokens for the parser.

use logos::Logos;

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// Expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
    /// Current column number (1-based)
    column: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given expression text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
            column: 1,
        }
    }

    /// Convert a LogosToken to our semantic TokenType
    fn convert_token(logos_token: LogosToken) -> TokenType {
        match logos_token {
            LogosToken::Integer(n) => TokenType::Integer(n),
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::Caret => TokenType::Caret,
            LogosToken::LeftParen => TokenType::LeftParen,
            LogosToken::RightParen => TokenType::RightParen,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.logos_lexer.next()?;
        let lexeme = self.logos_lexer.slice();
        let location = Location {
            column: self.column,
            offset: self.logos_lexer.span().start,
        };
        let token_type = match logos_token {
            Ok(token) => Self::convert_token(token),
            Err(()) => {
                #[cfg(feature = "logging")]
                log::trace!("invalid input {lexeme:?} at column {}", self.column);
                TokenType::Error
            }
        };
        self.column += lexeme.chars().count();
        Some(Token::new(token_type, lexeme, location))
    }
}

/// Lex a whole expression into a token vector
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
