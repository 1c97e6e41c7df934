//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! the token stream the parser pulls from. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser depends only on the [`source::TokenSource`] contract, so any
//! producer of tokens can stand in for [`lexer::Lexer`].

pub mod lexer;
pub mod source;
pub mod tokens;
