//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the scanners:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two cursor positions
//!
//! These macros reduce boilerplate in the scanner implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering `$start..$end` in the lexer's source.
///
/// # Arguments
///
/// * `$lexer` - The lexer owning the source name
/// * `$start` - Byte offset of the first lexeme byte
/// * `$end` - Byte offset one past the last lexeme byte
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $start:expr, $end:expr) => {
        Span {
            start: Position($crate::offset($start), Rc::clone(&$lexer.file)),
            end: Position($crate::offset($end), Rc::clone(&$lexer.file)),
        }
    };
}
