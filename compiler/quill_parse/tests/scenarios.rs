//! End-to-end parses of Quill source text.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use quill_diagnostic::ErrorCode;
use quill_ir::{Position, TokenKind, TokenList};
use quill_parse::{parse_tokens, ParseOutput};

fn parse_source(source: &str) -> (TokenList, ParseOutput) {
    let lexed = quill_lexer::lex(source).unwrap();
    assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);
    let out = parse_tokens(&lexed.tokens);
    (lexed.tokens, out)
}

fn lexemes(names: &[quill_ir::Terminal]) -> Vec<&str> {
    names.iter().map(|t| t.lexeme.as_str()).collect()
}

#[test]
fn complete_program_parses_into_expected_tree() {
    let (tokens, out) =
        parse_source("program P : var number a ; function f ( number x ) { } main { }");
    assert!(out.is_clean(), "{:?}", out.diagnostics);
    assert_eq!(out.consumed, tokens.len());

    let tree = &out.tree;
    assert_eq!(tree.name.lexeme, "P");

    assert_eq!(tree.global_vars.decls.len(), 1);
    let a = &tree.global_vars.decls[0];
    assert_eq!(a.ty.basic.keyword.kind, TokenKind::NumberType);
    assert!(a.ty.dim_1.is_none());
    assert_eq!(lexemes(&a.names), vec!["a"]);

    assert_eq!(tree.functions.decls.len(), 1);
    let f = &tree.functions.decls[0];
    assert_eq!(f.name.lexeme, "f");
    let params: Vec<(TokenKind, &str)> = f
        .param_slice()
        .iter()
        .map(|p| (p.ty.keyword.kind, p.name.lexeme.as_str()))
        .collect();
    assert_eq!(params, vec![(TokenKind::NumberType, "x")]);
    assert!(f.local_vars.decls.is_empty());
    assert!(f.body.statements.is_empty());

    assert!(tree.main.block.statements.is_empty());
}

#[test]
fn missing_semicolon_recovers_at_function() {
    let source = "program P : var number a function f ( ) { } main { }";
    let (tokens, out) = parse_source(source);
    assert_eq!(out.diagnostics.len(), 1);
    let diag = &out.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E1002);
    assert!(!diag.is_fatal());
    let function = tokens.iter().find(|t| t.kind == TokenKind::Function).unwrap();
    assert_eq!(diag.position, function.position);
    assert_eq!(diag.position, Position::new(1, 26));

    assert_eq!(out.tree.functions.decls.len(), 1);
    assert_eq!(out.tree.functions.decls[0].name.lexeme, "f");
    assert!(!out.tree.main.block.lbrace.missing);
    assert!(!out.tree.main.block.rbrace.missing);
}

#[test]
fn two_dimensional_arrays_and_locals() {
    let source = "\
program Grid :
    var boolean [4][2] cells, spare;

    function step (number n, boolean wrap)
        var number i;
        var number [8] row;
    { ; ; }

    main { ; }
";
    let (_, out) = parse_source(source);
    assert!(out.is_clean(), "{:?}", out.diagnostics);
    let cells = &out.tree.global_vars.decls[0];
    assert_eq!(cells.ty.dimensions(), vec!["4", "2"]);
    assert_eq!(lexemes(&cells.names), vec!["cells", "spare"]);
    let step = &out.tree.functions.decls[0];
    assert_eq!(step.local_vars.decls.len(), 2);
    assert_eq!(step.local_vars.decls[1].ty.dimensions(), vec!["8"]);
    assert_eq!(step.body.statements.len(), 2);
}

#[test]
fn comments_do_not_reach_the_parser() {
    let source = "program P : // globals follow\n// none\nmain { ; } // done\n";
    let (_, out) = parse_source(source);
    assert!(out.is_clean());
}

#[test]
fn third_dimension_reports_and_continues() {
    let source = "program P :\n  var number [1][2][3] a;\n  var number b;\n  main { }";
    let (_, out) = parse_source(source);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].code, ErrorCode::E1004);
    assert_eq!(out.diagnostics[0].position, Position::new(2, 20));
    assert_eq!(out.tree.global_vars.decls.len(), 2);
    assert_eq!(lexemes(&out.tree.global_vars.decls[1].names), vec!["b"]);
}

#[test]
fn truncated_declaration_is_fatal_with_partial_tree() {
    let (tokens, out) = parse_source("program P : var number a b");
    assert!(out.is_fatal());
    assert_eq!(out.diagnostics.last().unwrap().code, ErrorCode::E1006);
    assert_eq!(out.consumed, tokens.len());
    assert_eq!(out.tree.name.lexeme, "P");
    assert_eq!(lexemes(&out.tree.global_vars.decls[0].names), vec!["a"]);
}

#[test]
fn reparsing_gives_identical_results() {
    let source = "program P : var number a function f ( number ) { x } main { ; } extra";
    let lexed = quill_lexer::lex(source).unwrap();
    let first = parse_tokens(&lexed.tokens);
    let second = parse_tokens(&lexed.tokens);
    assert!(first.has_errors());
    assert_eq!(first, second);
}
