//! Test utilities for the parser

use reckon_lexer::{Lexer, Token};

/// Tokenizes a string for testing
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reckon_lexer::TokenType;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("1+2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token_type, TokenType::Integer(1));
        assert_eq!(tokens[1].token_type, TokenType::Plus);
        assert_eq!(tokens[2].token_type, TokenType::Integer(2));
    }
}
