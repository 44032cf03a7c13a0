//! Unit tests for JSON serialization of the token stream.

use serde_json::Value;

use crate::lexer::tokens::{Token, TokenKind};
use crate::output::output::to_json;

#[test]
fn test_token_fields() {
    let tokens = vec![Token::new(TokenKind::Keyword, "int".to_string(), 3)];
    let json = to_json(&tokens).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed[0]["type"], "keyword");
    assert_eq!(parsed[0]["value"], "int");
    assert_eq!(parsed[0]["line"], 3);
}

#[test]
fn test_error_field_omitted_when_absent() {
    let tokens = vec![Token::new(TokenKind::Number, "42".to_string(), 1)];
    let json = to_json(&tokens).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    assert!(parsed[0].get("error").is_none());
}

#[test]
fn test_error_field_present_when_set() {
    let tokens = vec![Token::with_error(
        TokenKind::Unknown,
        "#".to_string(),
        2,
        "Invalid token: \"#\"".to_string(),
    )];
    let json = to_json(&tokens).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed[0]["type"], "unknown");
    assert_eq!(parsed[0]["error"], "Invalid token: \"#\"");
}

#[test]
fn test_kind_names() {
    let tokens = vec![
        Token::new(TokenKind::Keyword, "class".to_string(), 1),
        Token::new(TokenKind::Identifier, "Foo".to_string(), 1),
        Token::new(TokenKind::Operator, "=".to_string(), 1),
        Token::new(TokenKind::Separator, ";".to_string(), 1),
        Token::new(TokenKind::Number, "1".to_string(), 1),
        Token::new(TokenKind::StringLiteral, "\"hi\"".to_string(), 1),
        Token::new(TokenKind::Unknown, "#".to_string(), 1),
    ];
    let json = to_json(&tokens).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    let kinds: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|token| token["type"].as_str().unwrap())
        .collect();

    assert_eq!(
        kinds,
        vec![
            "keyword",
            "identifier",
            "operator",
            "separator",
            "number",
            "literal",
            "unknown"
        ]
    );
}

#[test]
fn test_order_preserved() {
    let tokens = vec![
        Token::new(TokenKind::Identifier, "x".to_string(), 1),
        Token::new(TokenKind::Operator, "=".to_string(), 1),
        Token::new(TokenKind::Separator, ";".to_string(), 1),
        Token::new(TokenKind::StringLiteral, "\"s\"".to_string(), 1),
    ];
    let json = to_json(&tokens).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    let values: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|token| token["value"].as_str().unwrap())
        .collect();

    assert_eq!(values, vec!["x", "=", ";", "\"s\""]);
}
