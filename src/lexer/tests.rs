//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization and the token cursor:
//! - Keywords, type names and identifiers
//! - Integer and string literals, including escapes
//! - Operators, punctuation and comments
//! - Declared type resolution and end-of-input behaviour
//! - Error cases

use crate::ast::types::DeclaredType;

use super::{
    lexer::tokenize,
    stream::{TokenCursor, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

fn cursor(source: &str) -> TokenCursor {
    TokenCursor::from_source(source, Some("test.lang".to_string())).unwrap()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("var fn return spawn"),
        vec![
            TokenKind::Var,
            TokenKind::Fn,
            TokenKind::Return,
            TokenKind::Spawn,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_type_names() {
    let tokens = tokenize("int string void".to_string(), None).unwrap();

    assert!(tokens[..3].iter().all(|token| token.kind == TokenKind::Type));
    assert_eq!(tokens[1].value, "string");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase variable".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    // Keyword prefixes do not split identifiers
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "variable");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 100".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words""#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"test""#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "quote\"test");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = && ||"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ; :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("var // the rest is ignored ;\nx"),
        vec![TokenKind::Var, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("var  x".to_string(), Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.lang");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("var x @ 1".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("\"open".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_cursor_pulls_one_token_at_a_time() {
    let mut stream = cursor("var x");

    assert_eq!(stream.current_str(), "");
    assert_eq!(stream.next_token(), TokenKind::Var);
    assert_eq!(stream.current_str(), "var");
    assert_eq!(stream.next_token(), TokenKind::Identifier);
    assert_eq!(stream.current_str(), "x");
    assert_eq!(stream.current_location().0, 4);
}

#[test]
fn test_cursor_is_sticky_at_eof() {
    let mut stream = cursor("x");

    assert_eq!(stream.next_token(), TokenKind::Identifier);
    assert_eq!(stream.next_token(), TokenKind::EOF);
    assert_eq!(stream.next_token(), TokenKind::EOF);
    assert_eq!(stream.next_token(), TokenKind::EOF);
}

#[test]
fn test_cursor_resolves_var_type() {
    let mut stream = cursor("var x : int = 5;");

    stream.next_token();
    assert_eq!(stream.current_type(), Some(DeclaredType::Int));
    stream.next_token();
    assert_eq!(stream.current_type(), None);
}

#[test]
fn test_cursor_var_without_annotation_has_no_type() {
    let mut stream = cursor("var x = 5;");

    stream.next_token();
    assert_eq!(stream.current_type(), None);
}

#[test]
fn test_cursor_resolves_function_return_type() {
    let mut stream = cursor("fn add(a : int, b : int) : string { }");

    stream.next_token();
    assert_eq!(stream.current_type(), Some(DeclaredType::Str));
}

#[test]
fn test_cursor_function_defaults_to_void() {
    let mut stream = cursor("fn main() { }");

    stream.next_token();
    assert_eq!(stream.current_type(), Some(DeclaredType::Void));
}

#[test]
fn test_cursor_type_token_resolves_to_itself() {
    let mut stream = cursor("void");

    assert_eq!(stream.next_token(), TokenKind::Type);
    assert_eq!(stream.current_type(), Some(DeclaredType::Void));
}

#[test]
fn test_cursor_appends_missing_eof() {
    let mut tokens = tokenize("x".to_string(), None).unwrap();
    tokens.pop();

    let mut stream = TokenCursor::new(tokens, std::rc::Rc::new("test.lang".to_string()));

    assert_eq!(stream.next_token(), TokenKind::Identifier);
    assert_eq!(stream.next_token(), TokenKind::EOF);
}
