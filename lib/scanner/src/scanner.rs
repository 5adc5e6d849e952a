use cursor::Cursor;
use errors::{RabbitError, Result};

mod token;
pub use token::{Operator, Token, TokenData};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScanError {
    #[error("Unexpected token `{0}`")]
    UnexpectedToken(String),
    #[error("Integer literal `{0}` does not fit into 64 bits")]
    IntegerOutOfRange(String),
}

/// Eagerly tokenizes a whole source string. The token sequence always ends
/// with an `Eof` token so end-of-input errors have a position to point at.
pub struct Scanner<'a> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        Self { start: cursor.clone(), current: cursor, tokens: Vec::new() }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>> {
        while let Some(c) = self.begin_token() {
            // Operators win over the unexpected-run rule, so `-` is never
            // the start of a negative literal.
            if let Some(op) = Operator::from_char(c) {
                self.add_token(TokenData::Operator(op));
                continue;
            }

            match c {
                '(' => self.add_token(TokenData::LeftParen),
                ')' => self.add_token(TokenData::RightParen),
                d if d.is_ascii_digit() => self.integer()?,
                w if w.is_whitespace() => (),
                _ => return Err(self.unexpected_run()),
            }
        }

        self.tokens.push(Token::new(
            TokenData::Eof,
            (self.current.clone(), self.current.clone()),
        ));
        Ok(self.tokens)
    }

    /// Marks the start of the next token and consumes its first character.
    fn begin_token(&mut self) -> Option<char> {
        self.start = self.current.clone();
        self.current.next()
    }

    fn add_token(&mut self, data: TokenData) {
        self.tokens.push(Token::new(data, (self.start.clone(), self.current.clone())));
    }

    fn integer(&mut self) -> Result<()> {
        while self.current.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current.next();
        }

        let lexeme = self.start.slice_until(&self.current);
        let value = lexeme
            .parse::<i64>()
            .map_err(|_| self.error(ScanError::IntegerOutOfRange(lexeme.to_string())))?;

        self.add_token(TokenData::Integer(value));
        Ok(())
    }

    /// Consumes the rest of an unrecognized run (up to the next whitespace)
    /// and reports it at the run's first character. No token is emitted.
    fn unexpected_run(&mut self) -> RabbitError {
        while self.current.peek().is_some_and(|c| !c.is_whitespace()) {
            self.current.next();
        }

        let run = self.start.slice_until(&self.current);
        self.error(ScanError::UnexpectedToken(run.to_string()))
    }

    fn error(&self, error: ScanError) -> RabbitError {
        RabbitError {
            line: self.start.line(),
            col: self.start.col(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cursor::{Col, Line};
    use pretty_assertions::assert_eq;

    use super::*;

    fn summarize<'a>(tokens: &'a [Token<'a>]) -> Vec<(TokenData, &'a str, usize, usize)> {
        tokens.iter().map(|t| (t.data, t.lexeme(), t.line().0, t.col().0)).collect()
    }

    #[test]
    fn simple_operation() {
        let tokens = Scanner::new("(+ 1 2)").scan_tokens().unwrap();
        assert_eq!(
            summarize(&tokens),
            vec![
                (TokenData::LeftParen, "(", 1, 1),
                (TokenData::Operator(Operator::Plus), "+", 1, 2),
                (TokenData::Integer(1), "1", 1, 4),
                (TokenData::Integer(2), "2", 1, 6),
                (TokenData::RightParen, ")", 1, 7),
                (TokenData::Eof, "", 1, 8),
            ]
        );
    }

    #[test]
    fn bare_integer_literal() {
        let tokens = Scanner::new("42").scan_tokens().unwrap();
        assert_eq!(
            summarize(&tokens),
            vec![(TokenData::Integer(42), "42", 1, 1), (TokenData::Eof, "", 1, 3)]
        );
    }

    #[test]
    fn all_operators() {
        let tokens = Scanner::new("+ - * /").scan_tokens().unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.data).collect::<Vec<_>>(),
            vec![
                TokenData::Operator(Operator::Plus),
                TokenData::Operator(Operator::Minus),
                TokenData::Operator(Operator::Star),
                TokenData::Operator(Operator::Slash),
                TokenData::Eof,
            ]
        );
    }

    #[test]
    fn minus_is_an_operator_not_a_sign() {
        let tokens = Scanner::new("-12").scan_tokens().unwrap();
        assert_eq!(
            summarize(&tokens),
            vec![
                (TokenData::Operator(Operator::Minus), "-", 1, 1),
                (TokenData::Integer(12), "12", 1, 2),
                (TokenData::Eof, "", 1, 4),
            ]
        );
    }

    #[test]
    fn positions_span_lines() {
        let tokens = Scanner::new("(+ 1 1)\n(- 2 1)").scan_tokens().unwrap();
        assert_eq!(
            summarize(&tokens),
            vec![
                (TokenData::LeftParen, "(", 1, 1),
                (TokenData::Operator(Operator::Plus), "+", 1, 2),
                (TokenData::Integer(1), "1", 1, 4),
                (TokenData::Integer(1), "1", 1, 6),
                (TokenData::RightParen, ")", 1, 7),
                (TokenData::LeftParen, "(", 2, 1),
                (TokenData::Operator(Operator::Minus), "-", 2, 2),
                (TokenData::Integer(2), "2", 2, 4),
                (TokenData::Integer(1), "1", 2, 6),
                (TokenData::RightParen, ")", 2, 7),
                (TokenData::Eof, "", 2, 8),
            ]
        );
    }

    #[test]
    fn unexpected_run_reports_its_start() {
        let error = Scanner::new("(+ 1 @)").scan_tokens().unwrap_err();
        assert_eq!(
            error,
            RabbitError {
                line: Line(1),
                col: Col(6),
                message: ScanError::UnexpectedToken("@)".to_string()).to_string(),
            }
        );
    }

    #[test]
    fn unexpected_run_on_later_line() {
        let error = Scanner::new("(+ 1 1)\n(* 2 abc)").scan_tokens().unwrap_err();
        assert_eq!(
            error,
            RabbitError {
                line: Line(2),
                col: Col(6),
                message: ScanError::UnexpectedToken("abc)".to_string()).to_string(),
            }
        );
    }

    #[test]
    fn oversized_integer_literal() {
        let error = Scanner::new("99999999999999999999").scan_tokens().unwrap_err();
        assert_eq!(
            error,
            RabbitError {
                line: Line(1),
                col: Col(1),
                message: ScanError::IntegerOutOfRange("99999999999999999999".to_string())
                    .to_string(),
            }
        );
    }

    #[test]
    fn empty_input_is_just_eof() {
        let tokens = Scanner::new("").scan_tokens().unwrap();
        assert_eq!(summarize(&tokens), vec![(TokenData::Eof, "", 1, 1)]);
    }
}
