use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("spawn", TokenKind::Spawn);
        map.insert("int", TokenKind::Type);
        map.insert("string", TokenKind::Type);
        map.insert("void", TokenKind::Type);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Type,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Var,
    Fn,
    Return,
    Spawn,
}

impl TokenKind {
    /// Whether this token can open a top-level declaration.
    pub fn starts_declaration(&self) -> bool {
        matches!(self, TokenKind::Var | TokenKind::Fn)
    }

    /// Whether this token can open a statement inside a block.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Var | TokenKind::Fn | TokenKind::Return | TokenKind::Spawn
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}
