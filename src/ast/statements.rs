use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, expressions::Identifier};

/// `var <name> = <value>;`
///
/// `value` stays `None` until declaration values are handed to the
/// expression parser; today their tokens are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Display for VarStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return <value>;`, with the same caveat as [`VarStatement::value`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Option<Expression>,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)?;
        if let Some(value) = &self.return_value {
            write!(f, " {}", value)?;
        }
        write!(f, ";")
    }
}

/// A lone expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnStatement {
    pub token: Token,
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    /// Raw tokens between the braces; block statements are not parsed yet.
    pub body: Vec<Token>,
}

impl Display for FnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|param| param.value.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        let body = self
            .body
            .iter()
            .map(|token| token.literal.as_str())
            .collect::<Vec<&str>>()
            .join(" ");

        write!(f, "{} {}({}) {{ {} }}", self.token.literal, self.name, parameters, body)
    }
}
