use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A diagnostic together with the source position it refers to.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
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

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Stable variant name, convenient for matching in tests and tooling.
    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::VoidVariableType => "VoidVariableType",
            ErrorImpl::MissingTypeAnnotation { .. } => "MissingTypeAnnotation",
            ErrorImpl::MissingClosingBrace => "MissingClosingBrace",
            ErrorImpl::UnsupportedNestedDeclaration { .. } => "UnsupportedNestedDeclaration",
            ErrorImpl::IncompleteNode { .. } => "IncompleteNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended while expecting {}", expected))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::VoidVariableType => {
                ErrorTip::Suggestion(String::from("void is not a valid variable type"))
            }
            ErrorImpl::MissingTypeAnnotation { name } => ErrorTip::Suggestion(format!(
                "Declaration of `{}` needs a `: type` annotation",
                name
            )),
            ErrorImpl::MissingClosingBrace => {
                ErrorTip::Suggestion(String::from("Expected `}` to close the block"))
            }
            ErrorImpl::UnsupportedNestedDeclaration { function } => ErrorTip::Suggestion(format!(
                "Function `{}` cannot be declared inside a block, move it to the top level",
                function
            )),
            ErrorImpl::IncompleteNode { kind } => ErrorTip::Suggestion(format!(
                "A `{}` node is missing one of its required children",
                kind
            )),
        }
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

/// Everything the lexer, the parser and the node constructors can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("void is not a valid variable type")]
    VoidVariableType,
    #[error("missing type annotation for {name:?}")]
    MissingTypeAnnotation { name: String },
    #[error("expected `}}` to close block")]
    MissingClosingBrace,
    #[error("unsupported nested declaration of function {function:?}")]
    UnsupportedNestedDeclaration { function: String },
    #[error("{kind} node is missing a required child")]
    IncompleteNode { kind: String },
}
