//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            found: String::from("Token('}')"),
            message: String::from("Expect a ';'"),
        },
        3,
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_line(), 3);
    assert_eq!(error.to_string(), "SyntaxError: Expect a ';' on line 3.");
}

#[test]
fn test_already_declared_error() {
    let error = Error::new(
        ErrorImpl::AlreadyDeclared {
            name: String::from("x"),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "AlreadyDeclared");
    assert_eq!(error.to_string(), "SyntaxError: Id `x` was defined on line 1.");
}

#[test]
fn test_undeclared_identifier_error() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            name: String::from("foo"),
        },
        12,
    );

    assert_eq!(error.get_error_name(), "UndeclaredIdentifier");
    assert_eq!(error.to_string(), "SyntaxError: Id `foo` not found on line 12.");
}

#[test]
fn test_unreadable_source_error() {
    let error = Error::new(
        ErrorImpl::UnreadableSource {
            source_name: String::from("missing.tg"),
            reason: String::from("No such file or directory"),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "UnreadableSource");
    assert_eq!(
        error.to_string(),
        "SyntaxError: Cannot read missing.tg: No such file or directory on line 1."
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Identifier,
            found: String::from("Token(';')"),
            message: String::from("Expect a id after a type"),
        },
        1,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected Identifier, found `Token(';')`"),
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

#[test]
fn test_error_source_is_inner_kind() {
    let error = Error::new(
        ErrorImpl::UndeclaredIdentifier {
            name: String::from("y"),
        },
        2,
    );

    let source = std::error::Error::source(&error).map(|e| e.to_string());
    assert_eq!(source.as_deref(), Some("Id `y` not found"));
    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UndeclaredIdentifier { name } if name == "y"
    ));
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, 7);

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "SyntaxError: Blocks nested deeper than 256 on line 7.");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_declaration_outside_block_error() {
    let error = Error::new(
        ErrorImpl::DeclarationOutsideBlock {
            name: String::from("x"),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "DeclarationOutsideBlock");
    assert_eq!(
        error.to_string(),
        "SyntaxError: Id `x` declared outside of any block on line 1."
    );
}
