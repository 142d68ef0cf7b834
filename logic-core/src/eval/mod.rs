
use thiserror::Error;

use crate::{
    environment::prelude::Environment,
    lexer::prelude::Token,
    parser::prelude::Expression,
    utils::prelude::SrcSpan
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("undefined variable: {name}")]
    UndefinedVariable {
        name: String,
        location: SrcSpan
    },
}

impl Expression {
    /// Recursive tree walk against the given bindings. Both operands of a
    /// connective are always evaluated, left before right; `&` and `|` do
    /// not short-circuit.
    pub fn evaluate(&self, env: &Environment) -> Result<bool, EvalError> {
        match self {
            Expression::Identifier(ident) => match env.get(&ident.value) {
                Some(value) => Ok(value),
                None => Err(EvalError::UndefinedVariable {
                    name: ident.value.clone(),
                    location: ident.location
                })
            },
            Expression::Boolean(boolean) => Ok(boolean.value),
            Expression::Prefix(prefix) => {
                let right = prefix.right.evaluate(env)?;

                match prefix.operator {
                    Token::Not => Ok(!right),
                    // the parser only ever builds `~` prefixes
                    _ => panic!("unknown unary operator `{}`", prefix.operator.as_literal())
                }
            },
            Expression::Infix(infix) => {
                let left = infix.left.evaluate(env)?;
                let right = infix.right.evaluate(env)?;

                match infix.operator {
                    Token::And => Ok(left && right),
                    Token::Or => Ok(left || right),
                    Token::Xor => Ok(left != right),
                    Token::Implies => Ok(!left || right),
                    Token::Iff => Ok(left == right),
                    _ => panic!("unknown operator `{}`", infix.operator.as_literal())
                }
            }
        }
    }
}
