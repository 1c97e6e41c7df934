use log::debug;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop. Starts on the first token of the expression and stops on its
/// last token.
///
/// Returns `None` when the current token cannot start an expression or a
/// handler failed; handlers record their own errors.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        debug!("no prefix rule for {}", token_kind);
        return None;
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, fold it into lhs
    while parser.peek_binding_power() > bp {
        let token_kind = parser.peek_token_kind();
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Some(left);
        };
        let operator_bp = parser.peek_binding_power();

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::from_token(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match parse_integer_literal(&token.literal) {
        Some(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        None => {
            parser.record(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.literal.clone(),
                },
                token.span.start.clone(),
            ));
            None
        }
    }
}

/// Converts integer literal text to an `i64`.
///
/// The prefix picks the radix: `0x`, `0o` and `0b` select hex, octal and
/// binary, any other leading `0` selects octal, everything else is decimal.
/// Underscores may only sit between digits (or right after a prefix).
pub fn parse_integer_literal(literal: &str) -> Option<i64> {
    if !underscores_separate_digits(literal) {
        return None;
    }

    let (sign, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => ("-", &literal[1..]),
        Some(b'+') => ("", &literal[1..]),
        _ => ("", literal),
    };

    let prefix = unsigned.get(..2).map(|p| p.to_ascii_lowercase());
    let (radix, digits) = match prefix.as_deref() {
        Some("0x") if unsigned.len() > 2 => (16, &unsigned[2..]),
        Some("0o") if unsigned.len() > 2 => (8, &unsigned[2..]),
        Some("0b") if unsigned.len() > 2 => (2, &unsigned[2..]),
        _ if unsigned.starts_with('0') => (8, unsigned),
        _ => (10, unsigned),
    };

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    // from_str_radix accepts its own sign, which must not follow a prefix
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    i64::from_str_radix(&format!("{}{}", sign, digits), radix).ok()
}

#[derive(PartialEq)]
enum Seen {
    Start,
    Digit,
    Underscore,
    Other,
}

fn underscores_separate_digits(literal: &str) -> bool {
    if !literal.contains('_') {
        return true;
    }

    let unsigned = literal
        .strip_prefix('-')
        .or_else(|| literal.strip_prefix('+'))
        .unwrap_or(literal);
    let bytes = unsigned.as_bytes();

    let mut seen = Seen::Start;
    let mut hex = false;
    let mut start = 0;

    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        // A base prefix counts as a digit
        seen = Seen::Digit;
        hex = bytes[1].to_ascii_lowercase() == b'x';
        start = 2;
    }

    for &byte in &bytes[start..] {
        if byte.is_ascii_digit() || (hex && byte.is_ascii_hexdigit()) {
            seen = Seen::Digit;
        } else if byte == b'_' {
            if seen != Seen::Digit {
                return false;
            }
            seen = Seen::Underscore;
        } else if seen == Seen::Underscore {
            return false;
        } else {
            seen = Seen::Other;
        }
    }

    seen != Seen::Underscore
}

/// Binary operator rule. Starts on the operator token; the right operand is
/// parsed at the operator's own binding power, so equal-precedence chains
/// group to the left.
pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
