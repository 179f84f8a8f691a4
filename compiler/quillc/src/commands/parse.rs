//! The `parse` command: parse a file and describe the result.

use std::fmt::Write;

use quill_ir::tree::{Element, NodeRef};
use quill_ir::Start;
use quill_parse::ParseOutput;
use tracing::debug;

use super::{analyze_file, read_file, render_diagnostics, write_stderr, Status};
use crate::{DriverError, Options};

/// Parse a file, print a summary (and the tree with `--tree`), and report
/// diagnostics.
pub fn parse_file(options: &Options) -> Result<Status, DriverError> {
    let path = options.single_file("parse")?;
    let source = read_file(path)?;
    let analysis = analyze_file(path, &source)?;
    debug!(
        path,
        tokens = analysis.tokens.len(),
        diagnostics = analysis.diagnostics.len(),
        "parsed"
    );

    if !options.quiet {
        print!("{}", summary(path, &analysis.parse));
        if options.tree {
            println!();
            print!("{}", render_tree(&analysis.parse.tree));
        }
    }

    write_stderr(&render_diagnostics(
        path,
        &source,
        &analysis.diagnostics,
        (analysis.error_count, analysis.warning_count),
        options.use_colors(),
    ));
    Ok(analysis.status())
}

/// Counts of what was declared, plus how the parse went.
pub fn summary(path: &str, out: &ParseOutput) -> String {
    let tree = &out.tree;
    let mut s = format!("Parse result for '{path}':\n");
    let _ = writeln!(s, "  Program: {}", tree.name.text().unwrap_or("<missing>"));

    let globals: usize = tree.global_vars.decls.iter().map(|d| d.names.len()).sum();
    let _ = writeln!(
        s,
        "  Globals: {} declarations ({globals} variables)",
        tree.global_vars.decls.len()
    );

    let names: Vec<String> = tree
        .functions
        .decls
        .iter()
        .map(|f| {
            let params: Vec<&str> = f
                .param_slice()
                .iter()
                .map(|p| p.name.text().unwrap_or("_"))
                .collect();
            format!("{}({})", f.name.text().unwrap_or("_"), params.join(", "))
        })
        .collect();
    if names.is_empty() {
        let _ = writeln!(s, "  Functions: none");
    } else {
        let _ = writeln!(s, "  Functions: {}", names.join(", "));
    }
    let _ = writeln!(s, "  Main statements: {}", tree.main.block.statements.len());
    let _ = writeln!(s, "  Tokens: {} ({} skipped)", out.consumed, out.skipped.len());

    let status = if out.is_fatal() {
        "stopped at an unrecoverable error"
    } else if out.has_errors() {
        "completed with errors"
    } else {
        "completed"
    };
    let _ = writeln!(s, "  Status: {status}");
    let _ = writeln!(
        s,
        "note: statements are bare `;`; expressions are always empty"
    );
    s
}

/// Indented outline of the tree: one line per node (`rule span`) and per
/// terminal (`Kind lexeme @ line:col`).
pub fn render_tree(tree: &Start) -> String {
    let mut out = String::new();
    write_node(&mut out, tree.as_node(), 0);
    out
}

fn write_node(out: &mut String, node: NodeRef<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{indent}{} {}", node.rule().name(), node.span());
    for child in node.children() {
        match child {
            Element::Node(child) => write_node(out, child, depth + 1),
            Element::Terminal(t) if t.missing => {
                let _ = writeln!(out, "{indent}  <missing {}>", t.kind.display_name());
            }
            Element::Terminal(t) => {
                let _ = writeln!(
                    out,
                    "{indent}  {:?} {:?} @ {}",
                    t.kind, t.lexeme, t.position
                );
            }
        }
    }
}
