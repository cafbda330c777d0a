//! Lexical analysis module.
//!
//! This module contains the lexer that converts an input string into a
//! stream of tokens for the conditional-expression grammar. It handles:
//!
//! - Dispatch on the first character of each token
//! - Relational operators with one character of lookahead
//! - Identifiers and the reserved words `if`, `then`, `else`
//! - Numeric literals via an explicit state automaton
//! - Token position tracking for error reporting

pub mod lexer;
pub mod number;
pub mod tokens;
