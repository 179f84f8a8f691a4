//! The `lex` command: dump the token stream.

use std::fmt::Write;

use quill_diagnostic::DiagnosticQueue;
use quill_ir::TokenList;
use tracing::debug;

use super::{read_file, render_diagnostics, write_stderr, Status};
use crate::{DriverError, Options};

/// Tokenize a file and print one token per line.
pub fn lex_file(options: &Options) -> Result<Status, DriverError> {
    let path = options.single_file("lex")?;
    let source = read_file(path)?;
    let lexed = quill_lexer::lex(&source).map_err(|e| DriverError::TooLarge {
        path: path.to_string(),
        source: e,
    })?;
    debug!(path, tokens = lexed.tokens.len(), "lexed");

    if !options.quiet {
        print!("{}", format_tokens(path, &lexed.tokens));
    }

    let mut queue = DiagnosticQueue::new();
    queue.extend(lexed.diagnostics);
    let counts = (queue.error_count(), queue.warning_count());
    let diagnostics = queue.flush();
    write_stderr(&render_diagnostics(
        path,
        &source,
        &diagnostics,
        counts,
        options.use_colors(),
    ));
    Ok(Status::from_errors(counts.0 > 0))
}

/// `line:col  Kind  lexeme` for every token, `Eof` included.
pub fn format_tokens(path: &str, tokens: &TokenList) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in tokens.iter() {
        let position = token.position.to_string();
        let kind = format!("{:?}", token.kind);
        let line = format!("  {position:<8} {kind:<12} {}", token.lexeme);
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
