//! Parser tests.
//!
//! - `parser`: clean parses, tree shape and spans
//! - `recovery`: diagnostics, insertion, skipping and synchronization

mod recovery;

use quill_diagnostic::ErrorCode;
use quill_ir::{TokenKind, TokenList};

use crate::{parse_tokens, ParseOutput};

/// Token kinds from a space-separated program sketch.
///
/// Words are keywords or punctuation; anything else starting with a digit
/// is an integer, `?` is an invalid token, and any other word is an
/// identifier.
pub(super) fn kinds(sketch: &str) -> Vec<TokenKind> {
    sketch
        .split_whitespace()
        .map(|word| match word {
            "program" => TokenKind::Program,
            "var" => TokenKind::Var,
            "number" => TokenKind::NumberType,
            "boolean" => TokenKind::BooleanType,
            "function" => TokenKind::Function,
            "main" => TokenKind::Main,
            ":" => TokenKind::Colon,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "?" => TokenKind::Error,
            w if w.starts_with(|c: char| c.is_ascii_digit()) => TokenKind::Int,
            _ => TokenKind::Ident,
        })
        .collect()
}

pub(super) fn tokens(sketch: &str) -> TokenList {
    TokenList::from_kinds(&kinds(sketch))
}

pub(super) fn parse_sketch(sketch: &str) -> (TokenList, ParseOutput) {
    let tokens = tokens(sketch);
    let out = parse_tokens(&tokens);
    (tokens, out)
}

pub(super) fn codes(out: &ParseOutput) -> Vec<ErrorCode> {
    out.diagnostics.iter().map(|d| d.code).collect()
}

/// Every token is either a consumed terminal in the tree or skipped.
pub(super) fn assert_accounted(tokens: &TokenList, out: &ParseOutput) {
    assert_eq!(out.consumed, tokens.len());
    assert_eq!(out.tree.terminals().len() + out.skipped.len(), tokens.len());
}
