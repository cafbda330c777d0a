use std::{iter::FusedIterator, rc::Rc};

use log::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, offset, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{RelOp, Token, TokenKind, RESERVED_LOOKUP};

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alnum(c: u8) -> bool {
    is_letter(c) || is_digit(c)
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n')
}

/// Where the dispatcher hands control next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    Done,
    Relop,
    Identifier,
    Number,
}

/// Single-pass scanner over an in-memory source.
///
/// The cursor (`pos`) always points at the first unconsumed byte and only
/// ever moves forward. Tokens are produced one at a time through
/// [`Lexer::next_token`] or the `Iterator` impl; nothing is buffered.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    pub(crate) file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(crate) fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    pub(crate) fn at(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    /// Decoded character at `pos`, for diagnostics. `'\0'` at end of input.
    pub(crate) fn char_at(&self, pos: usize) -> char {
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Length of the run of bytes starting at `from` that satisfy `pred`.
    pub(crate) fn run_length(&self, from: usize, pred: fn(u8) -> bool) -> usize {
        self.source
            .as_bytes()
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|c| pred(**c)).count())
    }

    pub(crate) fn error(&self, error_impl: ErrorImpl, pos: usize) -> Error {
        Error::new(error_impl, Position(offset(pos), Rc::clone(&self.file)))
    }

    /// Skips whitespace and decides which scanner owns the next character.
    fn initial(&mut self) -> Result<Dispatch, Error> {
        loop {
            let dispatch = match self.at() {
                None => Dispatch::Done,
                Some(c) if is_whitespace(c) => {
                    self.pos += 1;
                    continue;
                }
                Some(b'<' | b'=' | b'>') => Dispatch::Relop,
                Some(c) if is_letter(c) => Dispatch::Identifier,
                Some(c) if is_digit(c) => Dispatch::Number,
                Some(_) => {
                    return Err(self.error(
                        ErrorImpl::UnrecognisedCharacter { character: self.char_at(self.pos) },
                        self.pos,
                    ));
                }
            };

            debug!("dispatch {:?} at {}", dispatch, self.pos);
            return Ok(dispatch);
        }
    }

    /// Scans the next token, or returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let token = match self.initial()? {
            Dispatch::Done => return Ok(None),
            Dispatch::Relop => self.relop()?,
            Dispatch::Identifier => self.identifier(),
            Dispatch::Number => self.number()?,
        };

        trace!("{} {:?} [{}..{}]", token.kind, token.value, token.span.start.0, token.span.end.0);
        Ok(Some(token))
    }

    /// Maximal munch over `<`, `<=`, `<>`, `>`, `>=`, `=` with one byte of
    /// lookahead. The lookahead is only consumed when it completes a
    /// two-character operator.
    pub(crate) fn relop(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let (op, width) = match (self.at(), self.byte_at(start + 1)) {
            (Some(b'='), _) => (RelOp::Eq, 1),
            (Some(b'<'), Some(b'=')) => (RelOp::Le, 2),
            (Some(b'<'), Some(b'>')) => (RelOp::Ne, 2),
            (Some(b'<'), _) => (RelOp::Lt, 1),
            (Some(b'>'), Some(b'=')) => (RelOp::Ge, 2),
            (Some(b'>'), _) => (RelOp::Gt, 1),
            _ => {
                return Err(self.error(
                    ErrorImpl::InvalidRelopContinuation { character: self.char_at(start) },
                    start,
                ));
            }
        };

        self.pos += width;
        Ok(MK_TOKEN!(
            TokenKind::RelOp(op),
            String::from(op.spelling()),
            MK_SPAN!(self, start, self.pos)
        ))
    }

    /// Consumes `letter (letter | digit)*`; the first byte is already known
    /// to be a letter.
    pub(crate) fn identifier(&mut self) -> Token {
        let start = self.pos;
        let end = start + 1 + self.run_length(start + 1, is_alnum);
        let value = String::from(&self.source[start..end]);

        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.pos = end;
        MK_TOKEN!(kind, value, MK_SPAN!(self, start, end))
    }

    /// Consumes a numeric literal starting at the cursor.
    pub(crate) fn number(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let end = self.scan_number(start)?;
        let value = String::from(&self.source[start..end]);

        self.pos = end;
        Ok(MK_TOKEN!(TokenKind::Number, value, MK_SPAN!(self, start, end)))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer {}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).collect()
}
