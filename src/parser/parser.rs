//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser keeps a two-token window (`current_token`, `peek_token`) over
//! a pull-based token source and maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::{debug, info, trace, warn};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Errors are accumulated rather than returned: a parse always yields a
/// [`Program`], and callers inspect [`Parser::errors`] to decide whether to
/// trust it.
pub struct Parser {
    /// Where tokens come from, one per `advance`
    source: Box<dyn TokenSource>,
    current_token: Token,
    peek_token: Token,
    /// Syntax errors in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser primed with two tokens and the baseline grammar.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current_token = source.next_token();
        let peek_token = if current_token.kind == TokenKind::EOF {
            current_token.clone()
        } else {
            source.next_token()
        };

        let mut parser = Parser {
            source,
            current_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    ///
    /// Once the lookahead is EOF the source is not asked again; the window
    /// just holds EOF in both slots.
    pub fn advance(&mut self) {
        let next = if self.peek_token.kind == TokenKind::EOF {
            self.peek_token.clone()
        } else {
            self.source.next_token()
        };

        self.current_token = std::mem::replace(&mut self.peek_token, next);
        trace!(
            "advanced to {} {:?}",
            self.current_token.kind,
            self.current_token.literal
        );
    }

    /// Advances if the lookahead is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or `None` after recording an unexpected-token
    /// error. The cursor does not move on failure.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Some(self.current_token.clone())
        } else {
            let actual = self.peek_token.clone();
            self.unexpected_token(expected_kind, &actual);
            None
        }
    }

    /// Records that `actual` appeared where a token of `expected` kind was required.
    pub fn unexpected_token(&mut self, expected: TokenKind, actual: &Token) {
        self.record(Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                actual: actual.kind,
            },
            actual.span.start.clone(),
        ));
    }

    pub fn record(&mut self, error: Error) {
        warn!("{}", error);
        self.errors.push(error);
    }

    /// Binding power of the lookahead, `Default` when it is not an infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Parses statements until EOF.
    ///
    /// Failed statements are left out of the program. The cursor is advanced
    /// after every statement, successful or not, so parsing always makes
    /// progress.
    pub fn parse_program(&mut self) -> Program {
        info!("Beginning parse phase");

        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        info!(
            "Parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Error messages in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Recorded errors with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        debug!("registering infix rule for {} at {:?}", kind, binding_power);
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix rule
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses everything a token source produces.
///
/// This is the main entry point for parsing. It creates a parser with the
/// baseline grammar and parses statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding any recorded errors
/// - The parsed Program, missing the statements that failed
pub fn parse(source: impl TokenSource + 'static) -> (Parser, Program) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (parser, program)
}
