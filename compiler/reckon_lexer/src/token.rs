use std::fmt;

/// Represents a token's location in the expression text.
///
/// Expressions are single-line, so a location is the 0-based byte offset
/// plus the 1-based column used when pointing at the token in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based column in the expression
    pub column: usize,
    /// The 0-based byte offset from the start of the expression
    pub offset: usize,
}

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Literals
    Integer(i64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    // Delimiters
    LeftParen,
    RightParen,

    /// A character outside the expression alphabet
    Error,
}

impl TokenType {
    /// Whether the token is one of the five binary operators.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Plus
                | TokenType::Minus
                | TokenType::Star
                | TokenType::Slash
                | TokenType::Caret
        )
    }

    /// Whether the token is a `+` or `-`, the two characters that could be
    /// read as a sign.
    pub fn is_sign(&self) -> bool {
        matches!(self, TokenType::Plus | TokenType::Minus)
    }

    /// Whether the token can begin an operand: a number or an opening
    /// parenthesis.
    pub fn starts_operand(&self) -> bool {
        matches!(self, TokenType::Integer(_) | TokenType::LeftParen)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Integer(n) => write!(f, "{n}"),
            TokenType::Plus => f.write_str("+"),
            TokenType::Minus => f.write_str("-"),
            TokenType::Star => f.write_str("*"),
            TokenType::Slash => f.write_str("/"),
            TokenType::Caret => f.write_str("^"),
            TokenType::LeftParen => f.write_str("("),
            TokenType::RightParen => f.write_str(")"),
            TokenType::Error => f.write_str("<invalid>"),
        }
    }
}

/// A token together with the text it was lexed from and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    /// Create a new token
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Byte offset one past the end of the token
    pub fn end_offset(&self) -> usize {
        self.location.offset + self.lexeme.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}
