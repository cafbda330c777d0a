use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::number::NumberState, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidRelopContinuation { .. } => "InvalidRelopContinuation",
            ErrorImpl::InvalidNumericTransition { .. } => "InvalidNumericTransition",
            ErrorImpl::MalformedDigitRun { .. } => "MalformedDigitRun",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidRelopContinuation { character } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a relational operator",
                character
            )),
            ErrorImpl::InvalidNumericTransition { character, state } => {
                ErrorTip::Suggestion(format!(
                    "`{}` is not allowed in a number while in state {}",
                    character, state
                ))
            }
            ErrorImpl::MalformedDigitRun { state } => ErrorTip::Suggestion(format!(
                "expected at least one digit in state {}",
                state
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unknown relop character {character:?}")]
    InvalidRelopContinuation { character: char },
    #[error("{character:?} not allowed in state {state}")]
    InvalidNumericTransition { character: char, state: NumberState },
    #[error("at least one digit needed in state {state}")]
    MalformedDigitRun { state: NumberState },
}
