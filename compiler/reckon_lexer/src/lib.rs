//! Lexical analysis for reckon arithmetic expressions.
//!
//! This crate turns expression text into positioned tokens and hosts the
//! validator that rejects structurally illegal input before parsing.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;
pub mod validate;

// Re-export the main types for convenience
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
pub use validate::{validate, ValidationError};
