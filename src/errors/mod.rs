//! Error types and error handling for the lexer.
//!
//! This module defines the errors a scan can fail with. It includes:
//!
//! - Error structures with source position information
//! - One variant per kind of lexical failure
//! - Error names and suggestions used by the diagnostic renderer
//!
//! Every lexical error is fatal: the scan stops at the first one.

pub mod errors;
