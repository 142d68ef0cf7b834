use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    NoPrefixParseFunction {
        token: Token,
    },
    UnexpectedToken {
        token: Token,
        expected: Token,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn message(&self) -> String {
        match &self.error {
            ParseErrorType::NoPrefixParseFunction { token } => {
                format!("no prefix parse function for `{}` found", token.as_literal())
            },
            ParseErrorType::UnexpectedToken { token, expected } => {
                format!(
                    "expected next token to be `{}`, got `{}` instead",
                    expected.as_literal(),
                    token.as_literal()
                )
            }
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::NoPrefixParseFunction { token } => {
                let found = match token {
                    Token::Illegal(literal) => format!("the unrecognized character sequence `{literal}`"),
                    Token::Eof => "the end of input".to_string(),
                    _ => format!("`{}`", token.as_literal())
                };

                (
                    "Expected an expression",
                    vec![format!("Found {found}, expected an identifier, `true`, `false`, `~` or `(`")]
                )
            },
            ParseErrorType::UnexpectedToken { .. } => ("Unexpected token", vec![self.message()]),
        }
    }
}
