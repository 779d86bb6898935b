//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: "IDENT(x)".to_string(),
            expected: TokenKind::Semicolon,
        },
        Position::new(3, 42),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: "}".to_string(),
            expected: TokenKind::Semicolon,
        },
        Position::new(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(
        error.to_string(),
        "unexpected token: }; wanted: ; at 1:1"
    );
}

#[test]
fn test_unexpected_token_detailed_is_syntax() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            found: "return".to_string(),
            message: "expected declaration".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(error.get_kind(), ErrorKind::Syntax);
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "foo".to_string(),
        },
        Position::new(1, 8),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(error.get_kind(), ErrorKind::Type);
    assert_eq!(error.to_string(), "unknown type: foo at 1:8");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '@' },
        Position::new(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: "}".to_string(),
            expected: TokenKind::RParen,
        },
        Position::new(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("wanted `)`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
