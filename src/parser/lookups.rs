use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// How tightly an infix operator binds to its operands, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,       // ==
    Relational,     // < or >
    Additive,       // +
    Multiplicative, // *
    Unary,          // !x or -x
    Call,           // f()
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Option<Expression>;

/// Registers the baseline grammar.
///
/// No infix operators are registered yet, so the binding-power loop in
/// `parse_expr` never runs. Operators plug in through [`Parser::led`], e.g.
/// `parser.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr)`.
/// `function` declarations plug in through
/// `parser.stmt(TokenKind::Function, parse_fn_stmt)` once block statements exist.
pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Integer, parse_integer_expr);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
