//! Expression parsing.
//!
//! Grammar, lowest to highest precedence, every level left-associative:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := power (('*' | '/') power)*
//! power   := factor ('^' factor)*
//! factor  := NUMBER | '(' expr ')'
//! ```
//!
//! `^` is left-associative: `2^3^2` is `(2^3)^2 = 64`.
//!
//! Each run of same-precedence operators becomes one [`ChainNode`], so only
//! parentheses add depth to the tree and to the parser's recursion.
//!
//! [`ChainNode`]: reckon_ast::ChainNode

use nom::branch::alt;
use nom::error::{ErrorKind, ParseError};
use nom::Err as NomErr;
use nom::IResult;
use reckon_ast::{BinaryOperator, ChainLink, ExpressionNode, LiteralNode};
use reckon_lexer::TokenType;

use super::error::{SyntaxError, SyntaxErrorKind};
use super::token_stream::{span_of, TokenSlice};
use super::ParserConfig;

pub type PResult<'a, O> = IResult<TokenSlice<'a>, O, SyntaxError>;

/// Map a token to the binary operator it denotes, if any
pub fn get_binary_operator(token_type: &TokenType) -> Option<BinaryOperator> {
    match token_type {
        TokenType::Plus => Some(BinaryOperator::Add),
        TokenType::Minus => Some(BinaryOperator::Sub),
        TokenType::Star => Some(BinaryOperator::Mul),
        TokenType::Slash => Some(BinaryOperator::Div),
        TokenType::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Recursive-descent parser over one token slice.
pub struct ExpressionParser<'cfg> {
    config: &'cfg ParserConfig,
    /// Byte offset just past the last token, used to anchor end-of-input errors
    end: usize,
}

impl<'cfg> ExpressionParser<'cfg> {
    pub fn new(config: &'cfg ParserConfig, end: usize) -> Self {
        Self { config, end }
    }

    fn failure<'a, O>(&self, input: TokenSlice<'a>, kind: SyntaxErrorKind) -> PResult<'a, O> {
        Err(NomErr::Failure(SyntaxError::at(input, kind, self.end)))
    }

    /// Parse a complete expression; every token must be consumed.
    pub fn parse_complete<'a>(
        &self,
        input: TokenSlice<'a>,
    ) -> Result<ExpressionNode, SyntaxError> {
        if input.is_empty() {
            return Err(SyntaxError::at(input, SyntaxErrorKind::EmptyExpression, self.end));
        }

        let (rest, expr) = match self.parse_binary(input, 0, 0) {
            Ok(ok) => ok,
            Err(NomErr::Error(e)) | Err(NomErr::Failure(e)) => return Err(e),
            Err(NomErr::Incomplete(_)) => {
                return Err(SyntaxError::at(input, SyntaxErrorKind::DanglingOperator, self.end))
            }
        };

        match rest.peek() {
            None => {
                log::trace!("parsed expression spanning {:?}", expr.span());
                Ok(expr)
            }
            Some(token) => {
                let kind = match token.token_type {
                    TokenType::RightParen => SyntaxErrorKind::UnexpectedClosingParenthesis,
                    _ => self.unexpected_after_operand(token.token_type, &token.lexeme),
                };
                Err(SyntaxError::at(rest, kind, self.end))
            }
        }
    }

    fn unexpected_after_operand(&self, token_type: TokenType, lexeme: &str) -> SyntaxErrorKind {
        if token_type.starts_operand() {
            SyntaxErrorKind::MissingOperator(lexeme.to_string())
        } else {
            SyntaxErrorKind::UnexpectedToken(lexeme.to_string())
        }
    }

    /// Precedence climbing over the binary operators.
    ///
    /// Every operator is left-associative, so the right operand is parsed at
    /// one level above the operator's own precedence. Operators met in this
    /// loop never bind tighter than the ones before them: an operator of the
    /// same precedence extends the current chain, a lower one closes it and
    /// starts a new chain with the closed one as its first operand.
    pub fn parse_binary<'a>(
        &self,
        input: TokenSlice<'a>,
        min_precedence: u8,
        nesting: usize,
    ) -> PResult<'a, ExpressionNode> {
        let (mut input, mut first) = self.parse_primary(input, nesting)?;
        let mut links: Vec<ChainLink> = Vec::new();

        while let Some(token) = input.peek() {
            let op = match get_binary_operator(&token.token_type) {
                Some(op) => op,
                None => break,
            };
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            if links.first().is_some_and(|link| link.operator.precedence() != precedence) {
                first = ExpressionNode::chain(first, std::mem::take(&mut links));
            }

            let (rest, operand) = self.parse_binary(input.advance(), precedence + 1, nesting)?;
            links.push(ChainLink::new(op, operand));
            input = rest;
        }

        Ok((input, ExpressionNode::chain(first, links)))
    }

    /// A number or a parenthesized expression.
    fn parse_primary<'a>(
        &self,
        input: TokenSlice<'a>,
        nesting: usize,
    ) -> PResult<'a, ExpressionNode> {
        let result = alt((
            |i: TokenSlice<'a>| self.parse_number(i),
            |i: TokenSlice<'a>| self.parse_grouped(i, nesting),
        ))(input);

        match result {
            Err(NomErr::Error(_)) => {
                let kind = match input.peek() {
                    None => SyntaxErrorKind::DanglingOperator,
                    Some(token) if token.token_type == TokenType::Error => {
                        SyntaxErrorKind::UnexpectedToken(token.lexeme.clone())
                    }
                    Some(token) => SyntaxErrorKind::MissingOperand(token.lexeme.clone()),
                };
                self.failure(input, kind)
            }
            other => other,
        }
    }

    fn parse_number<'a>(&self, input: TokenSlice<'a>) -> PResult<'a, ExpressionNode> {
        match input.peek() {
            Some(token) => match token.token_type {
                TokenType::Integer(value) => Ok((
                    input.advance(),
                    ExpressionNode::literal(LiteralNode::Int(value), span_of(token)),
                )),
                _ => Err(NomErr::Error(SyntaxError::from_error_kind(input, ErrorKind::Digit))),
            },
            None => Err(NomErr::Error(SyntaxError::from_error_kind(input, ErrorKind::Eof))),
        }
    }

    fn parse_grouped<'a>(
        &self,
        input: TokenSlice<'a>,
        nesting: usize,
    ) -> PResult<'a, ExpressionNode> {
        let open = match input.peek() {
            Some(token) if token.token_type == TokenType::LeftParen => token,
            _ => return Err(NomErr::Error(SyntaxError::from_error_kind(input, ErrorKind::Char))),
        };
        if nesting >= self.config.max_nesting_depth {
            return self.failure(
                input,
                SyntaxErrorKind::NestingTooDeep(self.config.max_nesting_depth),
            );
        }

        let (rest, inner) = self.parse_binary(input.advance(), 0, nesting + 1)?;

        match rest.peek() {
            Some(close) if close.token_type == TokenType::RightParen => {
                let span = span_of(open).to(&span_of(close));
                Ok((rest.advance(), inner.with_span(span)))
            }
            None => self.failure(rest, SyntaxErrorKind::UnclosedParenthesis),
            Some(token) => {
                let kind = self.unexpected_after_operand(token.token_type, &token.lexeme);
                self.failure(rest, kind)
            }
        }
    }
}
