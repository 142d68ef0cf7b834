use crate::lexer::prelude::{Lexer, Spanned, Token};
use crate::utils::prelude::SrcSpan;
use super::error::{ParseError, ParseErrorType};
use super::ast::Expression;

pub trait Parse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Precedence
    ) -> Result<Self, ParseError>;
}

pub trait InfixParse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        precedence: Precedence
    ) -> Result<Self, ParseError>;
}

pub struct Parser<T: Iterator<Item = Spanned>> {
    pub current_token: Spanned,
    pub next_token: Spanned,
    errors: Vec<ParseError>,

    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: (0, Token::Eof, 0),
            next_token: (0, Token::Eof, 0),
            errors: vec![],

            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Spanned {
        let next = match self.tokens.next() {
            Some(spanned) => spanned,
            None => {
                let end = self.next_token.2;

                (end, Token::Eof, end)
            }
        };

        std::mem::replace(
            &mut self.current_token,
            std::mem::replace(&mut self.next_token, next)
        )
    }

    pub fn current_precedence(&self) -> Precedence {
        Precedence::from(&self.current_token.1)
    }

    /// Parses a single expression, recording any failure in the error list.
    /// Callers that loop may accumulate several errors before draining them.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        match Expression::parse(self, precedence) {
            Ok(expression) => Some(expression),
            Err(error) => {
                self.errors.push(error);

                None
            }
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    pub fn expect_one(&mut self, expected: Token) -> Result<(u32, u32), ParseError> {
        let (start, token, end) = &self.current_token;

        if *token == expected {
            let span = (*start, *end);
            self.step();

            Ok(span)
        } else {
            parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected,
                },
                SrcSpan { start: *start, end: *end }
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Iff,     // <->
    Implies, // ->
    OrXor,   // | ^
    And,     // &
    Prefix   // ~
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value {
            Token::Iff => Self::Iff,
            Token::Implies => Self::Implies,
            Token::Or | Token::Xor => Self::OrXor,
            Token::And => Self::And,
            _ => Self::Lowest,
        }
    }
}

pub fn parse_source(src: &str) -> Result<Expression, Vec<ParseError>> {
    let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    match parser.parse_expression(Precedence::Lowest) {
        Some(expression) if parser.errors().is_empty() => Ok(expression),
        _ => Err(parser.take_errors())
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
