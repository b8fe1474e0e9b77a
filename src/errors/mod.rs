//! Error types and error handling for the parser.
//!
//! This module defines the errors recorded while parsing. It includes:
//!
//! - `ParserError`, pairing an error kind with the offending token
//! - Specific error variants for each parse failure
//! - Error formatting and suggestions used by diagnostics

pub mod errors;
