//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, lenient number scanning, operators and
//! punctuation, spans, and error cases.

use super::{
    lexer::{parse_number, tokenize, Lexer},
    tokens::TokenKind,
};
use crate::errors::errors::ErrorImpl;

#[test]
fn test_tokenize_keyword_and_identifiers() {
    let source = "let x console log Let lets abc123".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "console");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "log");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "Let");
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "lets");
    assert_eq!(tokens[6].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].value, "abc123");
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5 1.2.3 7.".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    let values: Vec<&str> = tokens[..6].iter().map(|t| t.value.as_str()).collect();
    assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::Number));
    assert_eq!(values, vec!["42", "3.14", "0", "100.5", "1.2.3", "7."]);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_number_followed_by_letters_splits() {
    let tokens = tokenize("12ab".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "ab");
}

#[test]
fn test_tokenize_operators_and_punctuation() {
    let source = "+ - * / ( ) = ; , .".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Assignment,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let x = 42;".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_console_log_without_spaces() {
    let tokens = tokenize("console.log(1+2);".to_string(), None).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let \t x \r\n  =\x0B\x0C 42  ".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  abc = 1".to_string(), Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.js");
    assert_eq!(tokens[4].span.start.0, 12);
}

#[test]
fn test_unrecognized_character() {
    let result = tokenize("let x = @".to_string(), Some("test.js".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedCharacter { character: '@' });
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_underscore_is_not_an_identifier_character() {
    let result = tokenize("my_var".to_string(), None);

    assert_eq!(
        result.unwrap_err().get_kind(),
        &ErrorImpl::UnexpectedCharacter { character: '_' }
    );
}

#[test]
fn test_non_ascii_character_is_rejected() {
    let result = tokenize("1 + é".to_string(), None);

    assert_eq!(
        result.unwrap_err().get_kind(),
        &ErrorImpl::UnexpectedCharacter { character: 'é' }
    );
}

#[test]
fn test_lexer_scans_on_demand() {
    // The bad character is only reported once the cursor reaches it.
    let mut lexer = Lexer::new("1 + 2 # 3".to_string(), None);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Plus);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
    assert!(lexer.next_token().is_err());
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("  ".to_string(), None);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_parse_number_is_lenient() {
    assert_eq!(parse_number("42"), Some(42.0));
    assert_eq!(parse_number("3.25"), Some(3.25));
    assert_eq!(parse_number("1.2.3"), Some(1.2));
    assert_eq!(parse_number("7."), Some(7.0));
    assert_eq!(parse_number("5..1"), Some(5.0));
}
