use pretty_assertions::assert_eq;
use quill_diagnostic::{ErrorCode, Severity};
use quill_ir::{Span, TokenKind};

use super::{assert_accounted, codes, parse_sketch};

fn skipped_kinds(out: &crate::ParseOutput) -> Vec<TokenKind> {
    out.skipped.iter().map(|t| t.kind).collect()
}

#[test]
fn test_missing_semicolon_is_inserted_before_function() {
    let (tokens, out) = parse_sketch("program P : var number a function f ( ) { } main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    let diag = &out.diagnostics[0];
    let function = &tokens[6];
    assert_eq!(function.kind, TokenKind::Function);
    assert_eq!(diag.position, function.position);
    assert_eq!(diag.span, Span::point(function.span.start));
    assert_eq!(diag.message, "missing `;`");
    assert_eq!(diag.severity, Severity::Error);
    assert!(out.tree.global_vars.decls[0].semicolon.missing);
    assert_eq!(out.tree.functions.decls.len(), 1);
    assert!(!out.tree.main.main_kw.missing);
    assert!(out.skipped.is_empty());
    assert_accounted(&tokens, &out);
}

#[test]
fn test_third_dimension_syncs_at_semicolon() {
    let (tokens, out) = parse_sketch("program P : var number [ 1 ] [ 2 ] [ 3 ] a ; main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
    assert_eq!(out.diagnostics[0].message, "too many array dimensions");
    assert_eq!(out.diagnostics[0].span, tokens[11].span);
    assert_eq!(
        skipped_kinds(&out),
        vec![
            TokenKind::LBracket,
            TokenKind::Int,
            TokenKind::RBracket,
            TokenKind::Ident,
        ]
    );
    let decl = &out.tree.global_vars.decls[0];
    assert!(decl.ty.dim_2.is_some());
    assert!(!decl.semicolon.missing);
    assert!(!out.is_fatal());
    assert_accounted(&tokens, &out);
}

#[test]
fn test_unexpected_tokens_at_repetition_are_reported_once() {
    let (tokens, out) = parse_sketch("program P : var number a ; 42 ; x main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert_eq!(
        skipped_kinds(&out),
        vec![TokenKind::Int, TokenKind::Semicolon, TokenKind::Ident]
    );
    assert_eq!(
        out.diagnostics[0].expected.as_deref(),
        Some("`var`")
    );
    assert_accounted(&tokens, &out);
}

#[test]
fn test_garbage_in_block_is_skipped() {
    let (tokens, out) = parse_sketch("program P : main { x ; ; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert_eq!(out.tree.main.block.statements.len(), 2);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_eof_while_synchronizing_is_fatal() {
    let (tokens, out) = parse_sketch("program P : var number a b c");
    assert_eq!(codes(&out), vec![ErrorCode::E1001, ErrorCode::E1006]);
    assert!(out.is_fatal());
    let last = out.diagnostics.last().map(|d| d.severity);
    assert_eq!(last, Some(Severity::Fatal));
    assert_eq!(skipped_kinds(&out), vec![TokenKind::Ident, TokenKind::Ident]);
    assert!(out.tree.main.main_kw.missing);
    assert!(!out.tree.eof.missing);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_empty_input() {
    let (tokens, out) = parse_sketch("");
    assert_eq!(codes(&out), vec![ErrorCode::E1001, ErrorCode::E1006]);
    assert_eq!(out.diagnostics[0].message, "unexpected end of input");
    assert_accounted(&tokens, &out);
}

#[test]
fn test_missing_main_at_end_of_input() {
    let (tokens, out) = parse_sketch("program P : var number a ;");
    assert_eq!(codes(&out), vec![ErrorCode::E1001, ErrorCode::E1006]);
    assert_eq!(out.diagnostics[0].expected.as_deref(), Some("`main`"));
    assert!(out.is_fatal());
    assert!(out.tree.main.main_kw.missing);
    assert!(!out.tree.eof.missing);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_truncation_before_and_after_main_keyword_both_fatal() {
    for sketch in ["program P :", "program P : main"] {
        let (tokens, out) = parse_sketch(sketch);
        assert!(out.is_fatal(), "{sketch}: {:?}", out.diagnostics);
        assert_eq!(
            out.diagnostics.last().map(|d| d.code),
            Some(ErrorCode::E1006),
            "{sketch}"
        );
        assert_accounted(&tokens, &out);
    }
}

#[test]
fn test_missing_main_keyword_is_inserted() {
    let (tokens, out) = parse_sketch("program P : { ; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    assert!(out.tree.main.main_kw.missing);
    assert_eq!(out.tree.main.block.statements.len(), 1);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_missing_close_brace_at_end_of_input() {
    let (tokens, out) = parse_sketch("program P : main { ;");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    assert!(out.tree.main.block.rbrace.missing);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_missing_close_brace_before_next_function() {
    let (tokens, out) =
        parse_sketch("program P : function f ( ) { ; function g ( ) { } main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    assert_eq!(out.diagnostics[0].message, "missing `}`");
    assert_eq!(out.tree.functions.decls.len(), 2);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_trailing_input_after_main() {
    let (tokens, out) = parse_sketch("program P : main { } main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1005]);
    assert_eq!(out.skipped.len(), 3);
    assert!(!out.is_fatal());
    assert_accounted(&tokens, &out);
}

#[test]
fn test_bad_parameter_syncs_at_close_paren() {
    let (tokens, out) = parse_sketch("program P : function f ( number x , y ) { } main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1001]);
    assert_eq!(
        out.diagnostics[0].expected.as_deref(),
        Some("`number` or `boolean`")
    );
    assert_eq!(skipped_kinds(&out), vec![TokenKind::Ident]);
    let f = &out.tree.functions.decls[0];
    assert_eq!(f.param_slice().len(), 2);
    assert!(!f.rparen.missing);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_missing_close_paren_is_inserted() {
    let (tokens, out) = parse_sketch("program P : function f ( number x { } main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    assert!(out.tree.functions.decls[0].rparen.missing);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_header_errors() {
    let (_, missing_keyword) = parse_sketch("P : main { }");
    assert_eq!(codes(&missing_keyword), vec![ErrorCode::E1002]);
    assert!(missing_keyword.tree.program_kw.missing);
    assert_eq!(missing_keyword.tree.name.lexeme, "x");

    let (tokens, garbage) = parse_sketch("program P 42 main { }");
    assert_eq!(codes(&garbage), vec![ErrorCode::E1001]);
    assert_eq!(garbage.skipped.len(), 1);
    assert!(garbage.tree.colon.missing);
    assert_accounted(&tokens, &garbage);
}

#[test]
fn test_block_without_open_brace_syncs_at_close() {
    let (tokens, out) = parse_sketch("program P : main x ; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1001]);
    assert!(!out.tree.main.block.rbrace.missing);
    assert!(out.tree.main.block.lbrace.missing);
    assert_eq!(out.skipped.len(), 2);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_function_without_block_before_main() {
    let (tokens, out) = parse_sketch("program P : function f ( ) main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1001]);
    assert!(out.skipped.is_empty());
    assert!(!out.tree.main.main_kw.missing);
    assert_accounted(&tokens, &out);
}

#[test]
fn test_invalid_tokens_are_skipped() {
    let (tokens, out) = parse_sketch("program P : ? main { }");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert_eq!(skipped_kinds(&out), vec![TokenKind::Error]);
    assert_accounted(&tokens, &out);
}
