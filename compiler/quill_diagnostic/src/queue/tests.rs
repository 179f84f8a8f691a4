use pretty_assertions::assert_eq;
use quill_ir::{Position, Span, Token, TokenKind};

use super::*;
use crate::{ErrorCode, Severity};

fn token(kind: TokenKind, lexeme: &str, line: u32, column: u32, offset: u32) -> Token {
    Token::new(
        kind,
        lexeme,
        Span::new(offset, offset + 1),
        Position::new(line, column),
    )
}

#[test]
fn test_flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::new();
    queue.add(Diagnostic::new(ErrorCode::E1002).at_token(&token(TokenKind::Ident, "b", 3, 1, 20)));
    queue.add(Diagnostic::new(ErrorCode::E1001).at_token(&token(TokenKind::Ident, "a", 1, 4, 3)));
    queue.add(Diagnostic::new(ErrorCode::E0001).at_token(&token(TokenKind::Error, "@", 1, 2, 1)));
    let codes: Vec<ErrorCode> = queue.flush().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0001, ErrorCode::E1001, ErrorCode::E1002]);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn test_follow_on_parser_errors_on_invalid_tokens_are_dropped() {
    let bad = token(TokenKind::Error, "@", 1, 2, 1);
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(Diagnostic::new(ErrorCode::E0001).at_token(&bad)));
    assert!(!queue.add(Diagnostic::new(ErrorCode::E1003).at_token(&bad)));
    assert_eq!(queue.len(), 1);

    let mut unfiltered = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    unfiltered.add(Diagnostic::new(ErrorCode::E0001).at_token(&bad));
    unfiltered.add(Diagnostic::new(ErrorCode::E1003).at_token(&bad));
    assert_eq!(unfiltered.len(), 2);
}

#[test]
fn test_exact_duplicates_are_dropped() {
    let t = token(TokenKind::Semicolon, ";", 1, 1, 0);
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(Diagnostic::new(ErrorCode::E1001).at_token(&t)));
    assert!(!queue.add(Diagnostic::new(ErrorCode::E1001).at_token(&t)));
    assert!(queue.add(Diagnostic::new(ErrorCode::E1003).at_token(&t)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit_keeps_fatal() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        filter_follow_on: true,
    });
    assert!(queue.add(Diagnostic::new(ErrorCode::E1001).with_span(Span::new(0, 1), Position::new(1, 1))));
    assert!(queue.limit_reached());
    assert!(!queue.add(Diagnostic::new(ErrorCode::E1001).with_span(Span::new(2, 3), Position::new(1, 3))));
    assert!(queue.add(Diagnostic::new(ErrorCode::E1006).with_span(Span::new(4, 4), Position::new(1, 5))));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_warnings_are_counted_separately() {
    let mut queue = DiagnosticQueue::new();
    queue.add(Diagnostic::new(ErrorCode::E1003).with_severity(Severity::Warning));
    assert_eq!(queue.warning_count(), 1);
    assert!(!queue.has_errors());
}
