use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map.insert("function", TokenKind::Function);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Integer,

    Assignment, // =
    Equals,     // ==
    Bang,       // !
    NotEquals,  // !=

    Less,
    Greater,

    Plus,
    Dash,
    Star,
    Slash,

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Var,
    Return,
    Function,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexical unit. Never changes once the lexer hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nliteral: {}}}", self.kind, self.literal)
    }
}

impl Token {
    /// Builds a token without source position, for hand-assembled streams.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span: Span::null(),
        }
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Illegal,
        ]) {
            println!("{} ({})", self.kind, self.literal);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
