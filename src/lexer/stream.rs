//! Pull-based token stream consumed by the parser.
//!
//! The parser only ever sees one token at a time. Anything that needs to
//! look further ahead, such as resolving the declared type of a `var` or
//! `fn`, is done here at cursor construction so the parser never peeks.

use std::rc::Rc;

use crate::{ast::types::DeclaredType, errors::errors::Error, Position};

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

/// The lexer interface the parser is written against.
pub trait TokenStream {
    /// Consumes the next token and returns its kind. Sticky at `EOF`.
    fn next_token(&mut self) -> TokenKind;
    /// Literal text of the current token.
    fn current_str(&self) -> &str;
    /// Declared type associated with the current token, if any.
    fn current_type(&self) -> Option<DeclaredType>;
    /// Source location of the current token.
    fn current_location(&self) -> Position;
}

pub struct TokenCursor {
    tokens: Vec<Token>,
    declared_types: Vec<Option<DeclaredType>>,
    current: Option<usize>,
    file: Rc<String>,
}

impl TokenCursor {
    /// Wraps a token vector. An `EOF` token is appended if missing.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: crate::Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        let declared_types = (0..tokens.len())
            .map(|index| resolve_declared_type(&tokens, index))
            .collect();

        TokenCursor {
            tokens,
            declared_types,
            current: None,
            file,
        }
    }

    /// Tokenizes `source` and wraps the result.
    pub fn from_source(source: &str, file: Option<String>) -> Result<Self, Error> {
        let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
        let tokens = tokenize(source.to_string(), file)?;

        Ok(TokenCursor::new(tokens, file_name))
    }

    fn current_token(&self) -> Option<&Token> {
        self.current.and_then(|index| self.tokens.get(index))
    }
}

impl TokenStream for TokenCursor {
    fn next_token(&mut self) -> TokenKind {
        let last = self.tokens.len() - 1;
        let next = match self.current {
            Some(index) => (index + 1).min(last),
            None => 0,
        };

        self.current = Some(next);
        self.tokens[next].kind
    }

    fn current_str(&self) -> &str {
        self.current_token()
            .map(|token| token.value.as_str())
            .unwrap_or("")
    }

    fn current_type(&self) -> Option<DeclaredType> {
        self.current
            .and_then(|index| self.declared_types.get(index).copied().flatten())
    }

    fn current_location(&self) -> Position {
        self.current_token()
            .map(|token| token.span.start.clone())
            .unwrap_or_else(|| Position(0, Rc::clone(&self.file)))
    }
}

fn kind_at(tokens: &[Token], index: usize) -> Option<TokenKind> {
    tokens.get(index).map(|token| token.kind)
}

fn type_at(tokens: &[Token], index: usize) -> Option<DeclaredType> {
    match tokens.get(index) {
        Some(token) if token.kind == TokenKind::Type => token.value.parse().ok(),
        _ => None,
    }
}

/// Declared type carried by the token at `index`.
///
/// - `Type`: the type it names
/// - `var NAME : TYPE`: that type, none when the annotation is absent
/// - `fn NAME ( ... ) : TYPE`: that type, `void` when the annotation is absent
fn resolve_declared_type(tokens: &[Token], index: usize) -> Option<DeclaredType> {
    match kind_at(tokens, index)? {
        TokenKind::Type => type_at(tokens, index),
        TokenKind::Var => {
            if kind_at(tokens, index + 1) == Some(TokenKind::Identifier)
                && kind_at(tokens, index + 2) == Some(TokenKind::Colon)
            {
                type_at(tokens, index + 3)
            } else {
                None
            }
        }
        TokenKind::Fn => {
            if kind_at(tokens, index + 2) != Some(TokenKind::OpenParen) {
                return Some(DeclaredType::Void);
            }

            let mut depth = 0usize;
            let mut cursor = index + 2;
            while let Some(kind) = kind_at(tokens, cursor) {
                match kind {
                    TokenKind::OpenParen => depth += 1,
                    TokenKind::CloseParen => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    TokenKind::OpenCurly | TokenKind::CloseCurly | TokenKind::EOF => {
                        return Some(DeclaredType::Void)
                    }
                    _ => {}
                }
                cursor += 1;
            }

            if kind_at(tokens, cursor + 1) == Some(TokenKind::Colon) {
                type_at(tokens, cursor + 2).or(Some(DeclaredType::Void))
            } else {
                Some(DeclaredType::Void)
            }
        }
        _ => None,
    }
}
