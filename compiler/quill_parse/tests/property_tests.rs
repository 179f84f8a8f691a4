//! Property-based tests for the parser.
//!
//! Arbitrary token streams check the accounting and termination guarantees
//! that hold for any input; generated well-formed programs check that valid
//! input parses cleanly and maps one-to-one onto its tokens.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use quill_diagnostic::ErrorCode;
use quill_ir::{TokenKind, TokenList};
use quill_parse::parse_tokens;

// -- Token Stream Strategies --

/// Any token kind the lexer can produce, except the `Eof` sentinel.
fn kind_strategy() -> impl Strategy<Value = TokenKind> {
    let kinds: Vec<TokenKind> = TokenKind::ALL
        .into_iter()
        .filter(|&k| k != TokenKind::Eof)
        .collect();
    prop::sample::select(kinds)
}

fn token_stream_strategy() -> impl Strategy<Value = TokenList> {
    prop::collection::vec(kind_strategy(), 0..60).prop_map(|kinds| TokenList::from_kinds(&kinds))
}

/// A stream that starts like a real program, so the interesting rules get
/// reached more often than with uniform noise.
fn program_like_stream_strategy() -> impl Strategy<Value = TokenList> {
    prop::collection::vec(kind_strategy(), 0..40).prop_map(|tail| {
        let mut kinds = vec![TokenKind::Program, TokenKind::Ident, TokenKind::Colon];
        kinds.extend(tail);
        TokenList::from_kinds(&kinds)
    })
}

// -- Program Generation Strategies --

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "program" | "var" | "number" | "boolean" | "function" | "main"
    )
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn basic_type_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("number"), Just("boolean")]
}

fn var_decl_strategy() -> impl Strategy<Value = String> {
    (
        basic_type_strategy(),
        prop::collection::vec(1u32..100, 0..=2),
        prop::collection::vec(identifier_strategy(), 1..4),
    )
        .prop_map(|(ty, dims, names)| {
            let dims: String = dims.iter().map(|d| format!("[{d}]")).collect();
            format!("var {ty} {dims} {};", names.join(", "))
        })
}

fn block_strategy() -> impl Strategy<Value = String> {
    (0usize..4).prop_map(|n| format!("{{ {}}}", "; ".repeat(n)))
}

fn function_strategy() -> impl Strategy<Value = String> {
    (
        identifier_strategy(),
        prop::collection::vec((basic_type_strategy(), identifier_strategy()), 0..4),
        prop::collection::vec(var_decl_strategy(), 0..3),
        block_strategy(),
    )
        .prop_map(|(name, params, locals, body)| {
            let params: Vec<String> = params
                .iter()
                .map(|(ty, id)| format!("{ty} {id}"))
                .collect();
            format!(
                "function {name} ({})\n    {}\n{body}",
                params.join(", "),
                locals.join("\n    ")
            )
        })
}

fn program_strategy() -> impl Strategy<Value = String> {
    (
        identifier_strategy(),
        prop::collection::vec(var_decl_strategy(), 0..4),
        prop::collection::vec(function_strategy(), 0..3),
        block_strategy(),
    )
        .prop_map(|(name, globals, functions, main)| {
            format!(
                "program {name} :\n{}\n{}\nmain {main}\n",
                globals.join("\n"),
                functions.join("\n\n")
            )
        })
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_token_is_accounted_for(tokens in token_stream_strategy()) {
        let out = parse_tokens(&tokens);
        prop_assert_eq!(out.consumed, tokens.len());
        prop_assert_eq!(out.tree.terminals().len() + out.skipped.len(), tokens.len());
        prop_assert!(out.tree.eof.kind == TokenKind::Eof && !out.tree.eof.missing);
    }

    #[test]
    fn fatal_error_is_unique_and_last(tokens in program_like_stream_strategy()) {
        let out = parse_tokens(&tokens);
        let fatal: Vec<usize> = out
            .diagnostics
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_fatal())
            .map(|(i, _)| i)
            .collect();
        prop_assert!(fatal.len() <= 1);
        if let Some(&i) = fatal.first() {
            prop_assert_eq!(i, out.diagnostics.len() - 1);
            prop_assert_eq!(out.diagnostics[i].code, ErrorCode::E1006);
        }
    }

    #[test]
    fn accounting_holds_for_program_like_input(tokens in program_like_stream_strategy()) {
        let out = parse_tokens(&tokens);
        prop_assert_eq!(out.consumed, tokens.len());
        prop_assert_eq!(out.tree.terminals().len() + out.skipped.len(), tokens.len());
    }

    #[test]
    fn parsing_is_deterministic(tokens in program_like_stream_strategy()) {
        prop_assert_eq!(parse_tokens(&tokens), parse_tokens(&tokens));
    }

    #[test]
    fn skipping_implies_an_error(tokens in token_stream_strategy()) {
        let out = parse_tokens(&tokens);
        if !out.skipped.is_empty() {
            prop_assert!(out.has_errors());
        }
        if out.diagnostics.is_empty() {
            prop_assert_eq!(out.tree.terminals().len(), tokens.len());
        }
    }

    #[test]
    fn valid_programs_parse_cleanly(source in program_strategy()) {
        let lexed = quill_lexer::lex(&source).unwrap();
        prop_assert!(lexed.diagnostics.is_empty());
        let out = parse_tokens(&lexed.tokens);
        prop_assert!(out.is_clean(), "{}\n{:?}", source, out.diagnostics);
        prop_assert!(out.skipped.is_empty());

        let terminals: Vec<(TokenKind, &str)> = out
            .tree
            .terminals()
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect();
        let tokens: Vec<(TokenKind, &str)> = lexed
            .tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect();
        prop_assert_eq!(terminals, tokens);
    }
}
