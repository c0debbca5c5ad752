use logos::Logos;

/// Raw token type produced by the logos state machine.
///
/// Whitespace is not skipped and lexes as an error like any other character
/// outside the expression alphabet.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    // Digit runs that overflow i64 saturate; the validator rejects them by
    // their lexeme.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().unwrap_or(i64::MAX))]
    Integer(i64),

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
}
