//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens one
//! at a time from a [`crate::lexer::stream::TokenStream`] and builds a
//! [`crate::ast::declarations::Program`]. It handles:
//!
//! - Declaration parsing (variables, functions, parameter lists)
//! - Statement parsing (blocks, returns, expression statements)
//! - Expression parsing (binary ops, calls, spawned calls, literals)
//! - Error recovery at declaration and statement boundaries
//!
//! Binary operators are parsed by precedence climbing, using a binding
//! power per operator token.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
