mod expr;
pub use expr::{Expr, Program};

use errors::{RabbitError, Result};
use scanner::{Token, TokenData};

#[derive(Debug)]
pub struct ParserError<'a> {
    error: ParserErrorType,
    token: Token<'a>,
}

impl<'a> From<ParserError<'a>> for RabbitError {
    fn from(error: ParserError<'a>) -> Self {
        RabbitError {
            line: error.token.line(),
            col: error.token.col(),
            message: error.error.to_string(),
        }
    }
}

impl<'a> ParserError<'a> {
    fn new(error: ParserErrorType, token: Token<'a>) -> Self {
        Self { token, error }
    }
}

#[derive(Debug)]
pub enum ParserErrorType {
    ExpectedExpression,
    ExpectedOperator,
    ExpectedOperation,
    MissingArgument,
    MissingRightParen,
}

impl std::fmt::Display for ParserErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ParserErrorType::ExpectedExpression => "Expected integer literal or `(`",
                ParserErrorType::ExpectedOperator => "Expected operator after `(`",
                ParserErrorType::ExpectedOperation =>
                    "Expected parenthesized operation at top level",
                ParserErrorType::MissingArgument => "Expected at least one argument",
                ParserErrorType::MissingRightParen => "Missing closing `)` before end of input",
            }
        )
    }
}

/// Single-pass recursive descent with one token of lookahead and no
/// backtracking. Holds the token vector and an explicit index instead of
/// streaming, since the scanner has already tokenized the whole input.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        debug_assert!(matches!(tokens.last().map(|t| t.data), Some(TokenData::Eof)));
        Self { tokens, current: 0 }
    }

    pub fn parse(mut self) -> Result<Program> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            let start = self.peek_token().clone();
            let expr = self.expression()?;
            // A bare literal cannot stand alone as a program statement
            if !matches!(expr, Expr::Operation { .. }) {
                return Err(ParserError::new(ParserErrorType::ExpectedOperation, start).into());
            }
            body.push(expr);
        }

        Ok(Program(body))
    }

    fn expression(&mut self) -> Result<Expr> {
        let token = self.advance();
        match token.data {
            TokenData::Integer(n) => Ok(Expr::Integer(n)),
            TokenData::LeftParen => self.operation(),
            _ => Err(ParserError::new(ParserErrorType::ExpectedExpression, token).into()),
        }
    }

    /// Parses the remainder of an operation after its `(` has been consumed.
    fn operation(&mut self) -> Result<Expr> {
        let token = self.advance();
        let operator = match token.data {
            TokenData::Operator(op) => op,
            _ => return Err(ParserError::new(ParserErrorType::ExpectedOperator, token).into()),
        };

        let mut arguments = Vec::new();
        while !self.check(TokenData::RightParen) {
            if self.is_at_end() {
                return Err(ParserError::new(
                    ParserErrorType::MissingRightParen,
                    self.peek_token().clone(),
                )
                .into());
            }
            arguments.push(self.expression()?);
        }

        let closing_paren = self.advance();
        if arguments.is_empty() {
            return Err(
                ParserError::new(ParserErrorType::MissingArgument, closing_paren).into()
            );
        }

        Ok(Expr::Operation { operator, arguments })
    }
}

// Helpers
impl<'a> Parser<'a> {
    fn peek_token(&self) -> &Token<'a> {
        &self.tokens[self.current]
    }

    fn check(&self, data: TokenData) -> bool {
        self.peek_token().data == data
    }

    fn advance(&mut self) -> Token<'a> {
        let token = self.tokens[self.current].clone();
        // The index parks on the trailing Eof token
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenData::Eof)
    }
}
