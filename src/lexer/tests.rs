//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and numeric literals
//! - Operators, with longer operators winning over their prefixes
//! - Line breaks and line tracking
//! - Comments and whitespace
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::lexer::tokens::Lexeme;

fn kinds(lexemes: &[Lexeme]) -> Vec<TokenKind> {
    lexemes.iter().map(|lexeme| lexeme.kind).collect()
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value.as_deref(), Some("foo"));
    assert_eq!(tokens[2].value.as_deref(), Some("baz_123"));
    assert_eq!(tokens[3].value.as_deref(), Some("_underscore"));
    assert_eq!(tokens[4].value.as_deref(), Some("CamelCase"));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Number; 4]);
    assert_eq!(tokens[0].value.as_deref(), Some("42"));
    assert_eq!(tokens[1].value.as_deref(), Some("3.14"));
    assert_eq!(tokens[2].value.as_deref(), Some("0"));
    assert_eq!(tokens[3].value.as_deref(), Some("100.5"));
}

#[test]
fn test_tokenize_operators() {
    let source = "|| && | ^ & == != <= < >= > << >> + - * / % ** ! ~ ++ -- =".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Or,
            TokenKind::And,
            TokenKind::Pipe,
            TokenKind::Caret,
            TokenKind::Ampersand,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::ShiftLeft,
            TokenKind::ShiftRight,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Power,
            TokenKind::Not,
            TokenKind::Tilde,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Assignment,
        ]
    );
    assert!(tokens.iter().all(|t| t.value.is_none()));
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } ;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    let source = "a=b**-c<<2;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Power,
            TokenKind::Dash,
            TokenKind::Identifier,
            TokenKind::ShiftLeft,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_newlines_and_lines() {
    let source = "a = 1;\nb = 2;\r\n\nc;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[4].line, 1);
    assert_eq!(tokens[5].line, 2);
    assert_eq!(tokens[10].line, 3);
    assert_eq!(tokens[11].line, 4);
}

#[test]
fn test_tokenize_comments() {
    let source = "x = 5; // this is a comment\ny = 10;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[5].value.as_deref(), Some("y"));
    assert_eq!(tokens[5].line, 2);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  x \t =   42  ".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Assignment, TokenKind::Number]
    );
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "x = 1;\ny = @;".to_string();
    let error = tokenize(source, Some("test.lang".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), Some(2));
    assert_eq!(error.get_position().map(|p| p.1.as_str()), Some("test.lang"));
}

#[test]
fn test_tokenize_default_file_name() {
    let error = tokenize("$".to_string(), None).unwrap_err();
    assert_eq!(error.get_position().map(|p| p.1.as_str()), Some("shell"));
}

#[test]
fn test_lexeme_display() {
    let tokens = tokenize("abc +".to_string(), None).unwrap();

    assert_eq!(tokens[0].to_string(), "Identifier (abc) @ 1");
    assert_eq!(tokens[1].to_string(), "Plus @ 1");
    assert_eq!(tokens[0].value_str(), "abc");
    assert_eq!(tokens[1].value_str(), "");
}
