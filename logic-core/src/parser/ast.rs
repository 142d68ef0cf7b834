use std::fmt::Display;

use crate::{
    lexer::prelude::{Spanned, Token},
    parser::prelude::{parse_error, InfixParse, Parse, ParseError, ParseErrorType, Parser, Precedence},
    utils::prelude::SrcSpan
};

// expression -> <identifier> | <boolean> | <prefix> | <infix> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Boolean(Boolean),
    Prefix(Prefix),
    Infix(Infix),
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Expression {
    fn parse(
        parser: &mut Parser<T>,
        precedence: Precedence
    ) -> Result<Self, ParseError> {
        let mut expr = match parser.current_token.clone() {
            (start, Token::Ident(value), end) => {
                parser.step();

                Self::Identifier(Identifier {
                    value,
                    location: SrcSpan { start, end }
                })
            },
            (start, token @ (Token::True | Token::False), end) => {
                parser.step();

                Self::Boolean(Boolean {
                    value: token == Token::True,
                    location: SrcSpan { start, end }
                })
            },
            (_, Token::Not, _) => Self::Prefix(Prefix::parse(parser, Precedence::Prefix)?),
            (_, Token::LParen, _) => {
                parser.expect_one(Token::LParen)?;

                let expression = Expression::parse(parser, Precedence::Lowest)?;

                parser.expect_one(Token::RParen)?;

                // no dedicated node for a group, the parentheses only reset
                // the precedence floor
                expression
            },
            (start, token, end) => return parse_error(
                ParseErrorType::NoPrefixParseFunction { token },
                SrcSpan { start, end }
            )
        };

        while precedence < parser.current_precedence() {
            expr = match &parser.current_token.1 {
                token if token.is_connective() => {
                    Self::Infix(Infix::parse(parser, expr, precedence)?)
                },
                _ => break
            };
        }

        Ok(expr)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Boolean(boolean) => write!(f, "{boolean}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
            Self::Infix(infix) => write!(f, "{infix}")
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Identifier(ident) => ident.location,
            Self::Boolean(boolean) => boolean.location,
            Self::Prefix(prefix) => prefix.location,
            Self::Infix(infix) => infix.location
        }
    }

    /// Multi-line rendering of the tree itself, one extra indentation level
    /// (four spaces) per nesting depth.
    pub fn pretty_print(&self, indent: &str) -> String {
        match self {
            Self::Identifier(ident) => format!("{indent}Identifier({})", ident.value),
            Self::Boolean(boolean) => format!("{indent}Boolean({})", boolean.value),
            Self::Prefix(prefix) => {
                let child_indent = format!("{indent}    ");
                let right = prefix.right.pretty_print(&child_indent);

                format!(
                    "{indent}Prefix[\n{indent}  Operator: {}\n{indent}  Right:\n{right}\n{indent}]",
                    prefix.operator.as_literal()
                )
            },
            Self::Infix(infix) => {
                let child_indent = format!("{indent}    ");
                let left = infix.left.pretty_print(&child_indent);
                let right = infix.right.pretty_print(&child_indent);

                format!(
                    "{indent}Infix[\n{indent}  Operator: {}\n{indent}  Left:\n{left}\n{indent}  Right:\n{right}\n{indent}]",
                    infix.operator.as_literal()
                )
            }
        }
    }
}

// identifier -> <letter> { <letter> }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// boolean -> true | false
#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub value: bool,
    pub location: SrcSpan
}

impl Display for Boolean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// prefix -> ~ <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> Parse<T> for Prefix {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Precedence
    ) -> Result<Self, ParseError> {
        let (start, operator, _) = parser.next_token();

        let right = Expression::parse(parser, Precedence::Prefix)?;
        let end = right.location().end;

        Ok(Self {
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.as_literal(), self.right)
    }
}

// infix -> <expression> <connective> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = Spanned>> InfixParse<T> for Infix {
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        _precedence: Precedence
    ) -> Result<Self, ParseError> {
        let precedence = parser.current_precedence();

        let SrcSpan { start, .. } = left.location();

        let (_, operator, _) = parser.next_token();

        // the right operand binds at the operator's own precedence, which
        // keeps chains of equal precedence left-associated
        let right = Expression::parse(parser, precedence)?;

        let SrcSpan { end, .. } = right.location();

        Ok(Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.as_literal(), self.right)
    }
}
