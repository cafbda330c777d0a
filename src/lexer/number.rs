//! Numeric literal scanning.
//!
//! Recognises `digits ( . digits )? ( E [+-]? digits )?` with an explicit
//! automaton. Each step consumes one maximal run of digits, checks it
//! against what the current state requires, then looks at the following
//! byte to pick the next state or stop.
//!
//! ```text
//! IntegerDone --.--> FractionStart --digits--> FractionDone
//!     |                                            |
//!     +-----------------E-----------+--------E-----+
//!                                   v
//!                             ExponentSign --digits--> ExponentDone
//!                                   |                      ^
//!                                 [+-]                     |
//!                                   v                      |
//!                       ExponentDigitsRequired --digits----+
//! ```

use std::fmt::Display;

use log::trace;

use crate::errors::errors::{Error, ErrorImpl};

use super::lexer::{is_digit, Lexer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberState {
    /// After the mandatory leading digits. Accepting.
    IntegerDone,
    /// After `.`; fractional digits required.
    FractionStart,
    /// After the fractional digits. Accepting.
    FractionDone,
    /// After `E`; a sign or digits must follow.
    ExponentSign,
    /// After the exponent sign; digits required.
    ExponentDigitsRequired,
    /// After the exponent digits. Accepting.
    ExponentDone,
}

impl NumberState {
    pub fn is_accepting(&self) -> bool {
        matches!(
            self,
            NumberState::IntegerDone | NumberState::FractionDone | NumberState::ExponentDone
        )
    }

    /// Applies a run of `ndigits` digits to the state.
    pub fn after_digits(self, ndigits: usize) -> Result<NumberState, ErrorImpl> {
        match self {
            NumberState::FractionStart | NumberState::ExponentDigitsRequired if ndigits == 0 => {
                Err(ErrorImpl::MalformedDigitRun { state: self })
            }
            NumberState::FractionStart => Ok(NumberState::FractionDone),
            NumberState::ExponentSign | NumberState::ExponentDigitsRequired if ndigits > 0 => {
                Ok(NumberState::ExponentDone)
            }
            state => Ok(state),
        }
    }

    /// Transition on one of the number symbols `.`, `E`, `+`, `-`.
    pub fn on_symbol(self, c: u8) -> Option<NumberState> {
        match (self, c) {
            (NumberState::IntegerDone, b'.') => Some(NumberState::FractionStart),
            (NumberState::IntegerDone | NumberState::FractionDone, b'E') => {
                Some(NumberState::ExponentSign)
            }
            (NumberState::ExponentSign, b'+' | b'-') => Some(NumberState::ExponentDigitsRequired),
            _ => None,
        }
    }
}

impl Display for NumberState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Lexer {
    /// Number of consecutive digits starting at `from`.
    pub fn natscan(&self, from: usize) -> usize {
        self.run_length(from, is_digit)
    }

    /// Runs the numeric automaton from `start` and returns the offset one
    /// past the end of the literal. Does not move the cursor.
    pub fn scan_number(&self, start: usize) -> Result<usize, Error> {
        let mut state = NumberState::IntegerDone;
        let mut f = start;

        loop {
            let ndigits = self.natscan(f);
            f += ndigits;
            state = state
                .after_digits(ndigits)
                .map_err(|error_impl| self.error(error_impl, f))?;

            match self.byte_at(f) {
                Some(c @ (b'.' | b'E' | b'+' | b'-')) => match state.on_symbol(c) {
                    Some(next) => {
                        trace!("number {:?} --{}--> {:?}", state, c as char, next);
                        state = next;
                        f += 1;
                    }
                    // a sign outside an exponent ends the literal
                    None if matches!(c, b'+' | b'-') && state.is_accepting() => return Ok(f),
                    None => {
                        return Err(self.error(
                            ErrorImpl::InvalidNumericTransition { character: c as char, state },
                            f,
                        ));
                    }
                },
                _ if state.is_accepting() => return Ok(f),
                _ => return Err(self.error(ErrorImpl::MalformedDigitRun { state }, f)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumberState::*;
    use super::*;
    use crate::errors::errors::ErrorImpl;

    fn scan(source: &str) -> Result<usize, ErrorImpl> {
        let lexer = Lexer::new(source.to_string(), None);
        lexer.scan_number(0).map_err(|e| e.get_kind().clone())
    }

    #[test]
    fn test_accepting_states() {
        assert!(IntegerDone.is_accepting());
        assert!(FractionDone.is_accepting());
        assert!(ExponentDone.is_accepting());
        assert!(!FractionStart.is_accepting());
        assert!(!ExponentSign.is_accepting());
        assert!(!ExponentDigitsRequired.is_accepting());
    }

    #[test]
    fn test_symbol_transitions() {
        assert_eq!(IntegerDone.on_symbol(b'.'), Some(FractionStart));
        assert_eq!(IntegerDone.on_symbol(b'E'), Some(ExponentSign));
        assert_eq!(FractionDone.on_symbol(b'E'), Some(ExponentSign));
        assert_eq!(ExponentSign.on_symbol(b'+'), Some(ExponentDigitsRequired));
        assert_eq!(ExponentSign.on_symbol(b'-'), Some(ExponentDigitsRequired));

        assert_eq!(FractionDone.on_symbol(b'.'), None);
        assert_eq!(ExponentDone.on_symbol(b'E'), None);
        assert_eq!(IntegerDone.on_symbol(b'+'), None);
        assert_eq!(ExponentSign.on_symbol(b'E'), None);
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(FractionStart.after_digits(3), Ok(FractionDone));
        assert_eq!(ExponentSign.after_digits(1), Ok(ExponentDone));
        assert_eq!(ExponentSign.after_digits(0), Ok(ExponentSign));
        assert_eq!(ExponentDigitsRequired.after_digits(2), Ok(ExponentDone));
        assert_eq!(
            FractionStart.after_digits(0),
            Err(ErrorImpl::MalformedDigitRun { state: FractionStart })
        );
        assert_eq!(
            ExponentDigitsRequired.after_digits(0),
            Err(ErrorImpl::MalformedDigitRun { state: ExponentDigitsRequired })
        );
    }

    #[test]
    fn test_natscan() {
        let lexer = Lexer::new("12a345".to_string(), None);
        assert_eq!(lexer.natscan(0), 2);
        assert_eq!(lexer.natscan(2), 0);
        assert_eq!(lexer.natscan(3), 3);
        assert_eq!(lexer.natscan(6), 0);
        assert_eq!(lexer.natscan(100), 0);
    }

    #[test]
    fn test_scan_number_end_offsets() {
        assert_eq!(scan("7"), Ok(1));
        assert_eq!(scan("42 "), Ok(2));
        assert_eq!(scan("3.14"), Ok(4));
        assert_eq!(scan("3.14E+10"), Ok(8));
        assert_eq!(scan("6E23"), Ok(4));
        assert_eq!(scan("6E-23x"), Ok(5));
        assert_eq!(scan("1.5E7<"), Ok(5));
        assert_eq!(scan("12abc"), Ok(2));
    }

    #[test]
    fn test_sign_outside_exponent_ends_number() {
        assert_eq!(scan("3+4"), Ok(1));
        assert_eq!(scan("3.5-4"), Ok(3));
        assert_eq!(scan("1E5+2"), Ok(3));
    }

    #[test]
    fn test_lowercase_e_is_not_an_exponent() {
        assert_eq!(scan("2e10"), Ok(1));
    }

    #[test]
    fn test_missing_digits() {
        assert_eq!(scan("3."), Err(ErrorImpl::MalformedDigitRun { state: FractionStart }));
        assert_eq!(scan("3.x"), Err(ErrorImpl::MalformedDigitRun { state: FractionStart }));
        assert_eq!(scan("3E"), Err(ErrorImpl::MalformedDigitRun { state: ExponentSign }));
        assert_eq!(scan("3E x"), Err(ErrorImpl::MalformedDigitRun { state: ExponentSign }));
        assert_eq!(
            scan("3E+"),
            Err(ErrorImpl::MalformedDigitRun { state: ExponentDigitsRequired })
        );
        assert_eq!(
            scan("3.1E-+2"),
            Err(ErrorImpl::MalformedDigitRun { state: ExponentDigitsRequired })
        );
    }

    #[test]
    fn test_invalid_transitions() {
        assert_eq!(
            scan("1.2.3"),
            Err(ErrorImpl::InvalidNumericTransition { character: '.', state: FractionDone })
        );
        assert_eq!(
            scan("1E5E2"),
            Err(ErrorImpl::InvalidNumericTransition { character: 'E', state: ExponentDone })
        );
        assert_eq!(
            scan("1E5.2"),
            Err(ErrorImpl::InvalidNumericTransition { character: '.', state: ExponentDone })
        );
        assert_eq!(
            scan("1EE"),
            Err(ErrorImpl::InvalidNumericTransition { character: 'E', state: ExponentSign })
        );
    }

    #[test]
    fn test_error_position_points_at_offending_byte() {
        let lexer = Lexer::new("1.2.3".to_string(), None);
        assert_eq!(lexer.scan_number(0).unwrap_err().get_position().0, 3);

        let lexer = Lexer::new("x 3E+".to_string(), None);
        assert_eq!(lexer.scan_number(2).unwrap_err().get_position().0, 5);
    }
}
