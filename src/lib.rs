#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source file, paired with the file's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the full line text and the column of
/// `position` inside that line, or `None` when the offset lies past the end
/// of `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // EOF diagnostics point one past the last character.
    let last_line = source.split_inclusive('\n').next_back().unwrap_or("");
    if last_line.ends_with('\n') || source.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last_line.to_string(), last_line.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("var x = 5", 9).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "var x = 5");
        assert_eq!(line_pos, 9);

        assert!(super::get_line_at_position("abc", 10).is_none());
    }

    #[test]
    fn test_render_error() {
        let source = "var x = 1;\n  var y 5;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assignment,
                actual: TokenKind::Integer,
            },
            Position(19, Rc::new("test.imp".to_string())),
        );

        let rendered = super::render_error(&error, source, "test.imp");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken (expected next token to be Assignment, got Integer instead)"
        );
        assert_eq!(lines[1], "-> test.imp");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | var y 5;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_error_with_tip() {
        let source = "09;\n";
        let error = Error::new(
            ErrorImpl::NumberParseError {
                token: "09".to_string(),
            },
            Position(0, Rc::new("test.imp".to_string())),
        );

        let rendered = super::render_error(&error, source, "test.imp");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: NumberParseError (Invalid number: `09`, is it malformed or above the integer limit?)"
        );
        assert_eq!(lines[3], "1 | 09;");
        assert_eq!(lines[4], "  | ^");
    }
}

/// Renders a diagnostic against the source it was produced from.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be Assignment, got Integer instead)
/// -> main.imp
///   |
/// 2 | var y 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    // Errors without a tip explain themselves through their message
    let header = match error.get_tip() {
        ErrorTip::None => error.to_string(),
        tip => tip.to_string(),
    };
    out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), header));
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
