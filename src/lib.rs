#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;

/// Byte offset into a source, plus the source's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Converts a cursor into a `Position` offset, saturating at `u32::MAX`.
pub fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns `(line number, line text, offset within line)` for a byte
/// offset. An offset at or past the end maps to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
        last_line = line;
    }

    if last_line.is_empty() || last_line.ends_with('\n') {
        (line_number, String::new(), 0)
    } else {
        (line_number - 1, last_line.to_string(), last_line.len())
    }
}

/// Renders an error as a caret diagnostic:
///
/// ```text
/// Error: MalformedDigitRun (expected at least one digit in state FractionStart)
/// -> shell
///   |
/// 1 | x < 3.
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::tokenize;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nif x\n  then y\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 34);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(offset(0), 0);
        assert_eq!(offset(4096), 4096);
        assert_eq!(offset(u32::MAX as usize), u32::MAX);
        assert_eq!(offset(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        assert_eq!(get_line_at_position("x < 3.", 6), (1, "x < 3.".to_string(), 6));
        assert_eq!(get_line_at_position("a\nb\n", 4), (3, String::new(), 0));
        assert_eq!(get_line_at_position("", 0), (1, String::new(), 0));
    }

    #[test]
    fn test_render_error_points_at_offending_column() {
        let source = "x < 3.";
        let error = tokenize(source.to_string(), None).unwrap_err();

        let rendered = render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: MalformedDigitRun (expected at least one digit in state FractionStart)"
        );
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | x < 3.");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_error_without_tip() {
        let source = "  a ? b";
        let error = tokenize(source.to_string(), Some("cond.txt".to_string())).unwrap_err();

        let rendered = render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedCharacter");
        assert_eq!(lines[1], "-> cond.txt");
        assert_eq!(lines[3], "1 | a ? b");
        assert_eq!(lines[4], "  | --^");
    }
}
