//! Error types and error handling for the front-end.
//!
//! This module defines the diagnostics produced while tokenizing and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, grammar and node construction
//! - Helpful error messages and suggestions

pub mod errors;
