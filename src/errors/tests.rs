//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.imp".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            actual: TokenKind::Semicolon,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            actual: TokenKind::Integer,
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got Integer instead"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "123456789012345678901".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("123456789012345678901")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unexpected_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            actual: TokenKind::Integer,
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(
        ErrorTip::Suggestion("did you mean `=`?".to_string()).to_string(),
        "did you mean `=`?"
    );
}

#[test]
fn test_error_kind_accessor() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            actual: TokenKind::EOF,
        },
        Position::null(),
    );

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            actual: TokenKind::EOF,
        }
    );
}
