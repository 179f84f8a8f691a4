//! Command handlers for the `quill` CLI.
//!
//! Each submodule implements one command. The shared front-end pipeline
//! (`analyze`) and diagnostic rendering live here.

use std::io::Write;

use quill_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use quill_diagnostic::{Diagnostic, DiagnosticQueue};
use quill_ir::{SpanError, TokenList};
use quill_parse::{parse_tokens, ParseOutput};

use crate::DriverError;

mod check;
mod lex;
mod parse;

pub use check::check_files;
pub use lex::{format_tokens, lex_file};
pub use parse::{parse_file, render_tree, summary};

/// How a command finished, when the driver itself did not fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// The input has error diagnostics.
    Failed,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Clean => 0,
            Status::Failed => 1,
        }
    }

    fn from_errors(has_errors: bool) -> Self {
        if has_errors {
            Status::Failed
        } else {
            Status::Clean
        }
    }
}

/// Lexer and parser results for one source text.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: TokenList,
    pub parse: ParseOutput,
    /// Lexer and parser diagnostics merged, deduplicated and sorted.
    pub diagnostics: Vec<Diagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl Analysis {
    pub fn status(&self) -> Status {
        Status::from_errors(self.error_count > 0)
    }
}

/// Run the front end (lex, then parse) over `source`.
///
/// Parser diagnostics caused by an invalid character are dropped by the
/// queue; the lexer has already reported the character.
pub fn analyze(source: &str) -> Result<Analysis, SpanError> {
    let lexed = quill_lexer::lex(source)?;
    let parse = parse_tokens(&lexed.tokens);

    let mut queue = DiagnosticQueue::new();
    queue.extend(lexed.diagnostics);
    queue.extend(parse.diagnostics.iter().cloned());
    let error_count = queue.error_count();
    let warning_count = queue.warning_count();

    Ok(Analysis {
        tokens: lexed.tokens,
        parse,
        diagnostics: queue.flush(),
        error_count,
        warning_count,
    })
}

/// Read a source file, naming it in any error.
pub(crate) fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::read(path, e))
}

pub(crate) fn analyze_file(path: &str, source: &str) -> Result<Analysis, DriverError> {
    analyze(source).map_err(|source| DriverError::TooLarge {
        path: path.to_string(),
        source,
    })
}

/// Render diagnostics with source snippets and a summary line.
///
/// Rendering goes to a buffer so parallel commands can print whole files
/// in order.
pub fn render_diagnostics(
    path: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    counts: (usize, usize),
    colors: bool,
) -> Vec<u8> {
    if diagnostics.is_empty() {
        return Vec::new();
    }
    let mut emitter = TerminalEmitter::new(Vec::new(), colors).with_source(path, source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(counts.0, counts.1);
    emitter.flush();
    emitter.into_inner()
}

fn write_stderr(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(bytes);
    let _ = stderr.flush();
}
