//! Structural validation of expression text.
//!
//! Validation runs before any parsing or arithmetic and rejects three kinds of
//! input, checked in priority order:
//!
//! 1. characters outside `0-9 + - * / ^ ( )`,
//! 2. explicit sign prefixes such as `-5` or `4^(3753+-9)`,
//! 3. digit runs that do not fit a non-negative 32-bit signed integer.
//!
//! Malformed operator adjacency such as `1+*8` is left to the parser.

use thiserror::Error;

use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

/// Largest operand accepted in an expression.
pub const MAX_OPERAND: i64 = i32::MAX as i64;

/// Input rejected before evaluation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "The expression contains illegal characters. Found '{character}' at position {position}."
    )]
    IllegalCharacter { character: char, position: usize },

    #[error(
        "The expression contains number prefixes which are unsupported. Found sign '{sign}' at position {position}."
    )]
    UnsupportedSignPrefix { sign: char, position: usize },

    #[error(
        "The expression contains values that cannot be interpreted as positive 32 bit integers. Found '{operand}' at position {position}."
    )]
    OperandOutOfRange { operand: String, position: usize },
}

impl ValidationError {
    /// Byte offset of the offending text
    pub fn position(&self) -> usize {
        match self {
            ValidationError::IllegalCharacter { position, .. }
            | ValidationError::UnsupportedSignPrefix { position, .. }
            | ValidationError::OperandOutOfRange { position, .. } => *position,
        }
    }

    /// The offending text itself
    pub fn fragment(&self) -> String {
        match self {
            ValidationError::IllegalCharacter { character, .. } => character.to_string(),
            ValidationError::UnsupportedSignPrefix { sign, .. } => sign.to_string(),
            ValidationError::OperandOutOfRange { operand, .. } => operand.clone(),
        }
    }
}

/// Whether `c` belongs to the expression alphabet.
pub fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// Validate an expression, returning the first failing check.
pub fn validate(expression: &str) -> Result<(), ValidationError> {
    check_characters(expression)?;

    // Only the expression alphabet remains, which is all single-byte, so the
    // lexer cannot produce error tokens from here on.
    let tokens: Vec<Token> = Lexer::new(expression).collect();
    check_sign_prefixes(&tokens)?;
    check_operand_ranges(&tokens)?;

    #[cfg(feature = "logging")]
    log::trace!("validated {expression:?} ({} tokens)", tokens.len());
    Ok(())
}

fn check_characters(expression: &str) -> Result<(), ValidationError> {
    match expression
        .char_indices()
        .find(|(_, c)| !is_expression_char(*c))
    {
        Some((position, character)) => Err(ValidationError::IllegalCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

fn check_sign_prefixes(tokens: &[Token]) -> Result<(), ValidationError> {
    for (i, token) in tokens.iter().enumerate() {
        if !token.token_type.is_sign() {
            continue;
        }
        let follows_operator_or_start = match i.checked_sub(1) {
            None => true,
            Some(prev) => tokens[prev].token_type.is_operator(),
        };
        let precedes_operand = tokens
            .get(i + 1)
            .is_some_and(|next| next.token_type.starts_operand());

        if follows_operator_or_start && precedes_operand {
            let sign = if token.token_type == TokenType::Plus { '+' } else { '-' };
            return Err(ValidationError::UnsupportedSignPrefix {
                sign,
                position: token.location.offset,
            });
        }
    }
    Ok(())
}

fn check_operand_ranges(tokens: &[Token]) -> Result<(), ValidationError> {
    for token in tokens {
        if let TokenType::Integer(value) = token.token_type {
            if !(0..=MAX_OPERAND).contains(&value) {
                return Err(ValidationError::OperandOutOfRange {
                    operand: token.lexeme.clone(),
                    position: token.location.offset,
                });
            }
        }
    }
    Ok(())
}
