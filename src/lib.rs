#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod environment;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use interpreter::interpreter::{interpret, run_file, Options};

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of that line, and the 0-based
/// column of `position` within `source`. Positions at or past the end of the
/// source resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.trim_end_matches('\n').to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // Only reached when `pos` is the end of the source.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

/// Renders the single-line diagnostic for `error`:
///
/// ```text
/// Error: UndefinedVariable (Variable `y` is not defined) at script.js:3:9
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let mut message = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    let position = error.get_position();
    if !position.is_null() {
        let (line, _, column) = get_line_at_position(source, position.0);
        message.push_str(&format!(" at {}:{}:{}", position.1, line, column + 1));
    }

    message
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "let a = 1;\nlet b = 2;\n\nconsole.log(c);\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a = 1;");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 35);
        assert_eq!(line_number, 4);
        assert_eq!(line, "console.log(c);");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 +\n(2", 6);
        assert_eq!(line_number, 2);
        assert_eq!(line, "(2");
        assert_eq!(line_pos, 2);

        let (line_number, _, line_pos) = super::get_line_at_position("1;\n", 3);
        assert_eq!(line_number, 2);
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_display_error_with_position() {
        let error = Error::new(
            ErrorImpl::UndefinedVariable {
                variable: "y".to_string(),
            },
            Position(19, Rc::new("script.js".to_string())),
        );

        assert_eq!(
            super::display_error(&error, "let x = 1;\nlet z = y;"),
            "Error: UndefinedVariable (Variable `y` is not defined) at script.js:2:9"
        );
    }

    #[test]
    fn test_display_error_without_position() {
        let error = Error::without_position(ErrorImpl::IOError {
            path: "missing.js".to_string(),
            message: "No such file or directory".to_string(),
        });

        assert_eq!(
            super::display_error(&error, ""),
            "Error: IOError (Cannot access `missing.js`: No such file or directory)"
        );
    }
}
