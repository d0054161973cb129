//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, type names, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser does not read the token vector directly. It pulls tokens one
//! at a time through the [`stream::TokenStream`] trait, which
//! [`stream::TokenCursor`] implements over the output of [`lexer::tokenize`].

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
