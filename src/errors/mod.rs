//! Error types for the parser.
//!
//! Syntax errors are recorded by the parser rather than returned, so a
//! single parse can report many of them. This module defines:
//!
//! - Error structures with source position information
//! - The error variants the parser can record
//! - Error naming and suggestion text used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
