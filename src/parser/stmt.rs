use log::debug;

use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, FnStatement, ReturnStatement, VarStatement},
    },
    lexer::tokens::{Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// Every statement rule stops on the last token it consumed; the caller
/// advances past it.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        debug!("dispatching {} statement", kind);
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// `<expr>` with an optional trailing `;`.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStatement { token, expression }))
}

pub fn parse_var_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let name = Identifier::from_token(parser.expect(TokenKind::Identifier)?);
    parser.expect(TokenKind::Assignment)?;

    // TODO: hand the value to parse_expr once grouping and calls are registered
    skip_to_semicolon(parser)?;

    Some(Statement::Var(VarStatement {
        token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    skip_to_semicolon(parser)?;

    Some(Statement::Return(ReturnStatement {
        token,
        return_value: None,
    }))
}

/// Moves the cursor onto the next `;`.
///
/// Running into EOF first records an unexpected-token error and fails.
fn skip_to_semicolon(parser: &mut Parser) -> Option<()> {
    while !parser.current_token_is(TokenKind::Semicolon) {
        if parser.current_token_is(TokenKind::EOF) {
            let eof = parser.current_token().clone();
            parser.unexpected_token(TokenKind::Semicolon, &eof);
            return None;
        }
        parser.advance();
    }

    Some(())
}

/// `function <name>(<params>) { <body> }`
///
/// Not part of the baseline grammar. The body is kept as raw tokens.
pub fn parse_fn_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let name = Identifier::from_token(parser.expect(TokenKind::Identifier)?);
    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_fn_params(parser)?;
    parser.expect(TokenKind::OpenCurly)?;
    let body = collect_block_tokens(parser)?;

    Some(Statement::Function(FnStatement {
        token,
        name,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the cursor on the opening parenthesis, finishing
/// on the closing one.
pub fn parse_fn_params(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    parameters.push(Identifier::from_token(parser.expect(TokenKind::Identifier)?));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parameters.push(Identifier::from_token(parser.expect(TokenKind::Identifier)?));
    }

    parser.expect(TokenKind::CloseParen)?;

    Some(parameters)
}

/// Collects the tokens of a brace-delimited block, cursor starting on `{`
/// and ending on the matching `}`.
fn collect_block_tokens(parser: &mut Parser) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut depth = 1;

    loop {
        parser.advance();

        match parser.current_token_kind() {
            TokenKind::OpenCurly => depth += 1,
            TokenKind::CloseCurly => {
                depth -= 1;
                if depth == 0 {
                    return Some(tokens);
                }
            }
            TokenKind::EOF => {
                let eof = parser.current_token().clone();
                parser.unexpected_token(TokenKind::CloseCurly, &eof);
                return None;
            }
            _ => {}
        }

        tokens.push(parser.current_token().clone());
    }
}
