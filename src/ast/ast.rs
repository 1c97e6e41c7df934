use std::fmt::Display;

use super::{
    expressions::{Identifier, InfixExpression, IntegerLiteral},
    statements::{ExpressionStatement, FnStatement, ReturnStatement, VarStatement},
};

/// Which capability set a node belongs to.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Program,
    Statement,
    Expression,
}

/// Behaviour shared by every node in the tree.
pub trait Node {
    /// Literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;
    fn node_kind(&self) -> NodeKind;
}

/// Root of every parse result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
    fn node_kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Var(VarStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    /// Only produced once a handler for `function` is registered.
    Function(FnStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Var(stmt) => &stmt.token.literal,
            Statement::Return(stmt) => &stmt.token.literal,
            Statement::Expression(stmt) => &stmt.token.literal,
            Statement::Function(stmt) => &stmt.token.literal,
        }
    }
    fn node_kind(&self) -> NodeKind {
        NodeKind::Statement
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Var(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
            Statement::Function(stmt) => write!(f, "{}", stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Infix(InfixExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => &expr.token.literal,
            Expression::Integer(expr) => &expr.token.literal,
            Expression::Infix(expr) => &expr.token.literal,
        }
    }
    fn node_kind(&self) -> NodeKind {
        NodeKind::Expression
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
        }
    }
}
