//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from a token source
//! and builds a [`crate::ast::ast::Program`]. Statements are dispatched on
//! the current token kind; expressions use a Pratt parser driven by NUD
//! (null denotation) and LED (left denotation) lookup tables with binding
//! powers for precedence.
//!
//! Syntax errors never abort a parse. They are recorded on the parser, the
//! offending statement is dropped, and parsing resumes at the next token.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
