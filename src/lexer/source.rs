use std::vec::IntoIter;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Anything the parser can pull tokens from.
///
/// Implementations must keep returning an EOF token once their input is
/// exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// A [`TokenSource`] over tokens that were produced ahead of time.
///
/// Everything after the first EOF token is ignored. A vector without an EOF
/// token behaves as if one followed its last element.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Option<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            eof: None,
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        let token = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::new(TokenKind::EOF, ""));

        if token.kind == TokenKind::EOF {
            self.eof = Some(token.clone());
        }

        token
    }
}
