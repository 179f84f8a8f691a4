//! Diagnostic queue for merging, filtering and sorting diagnostics.
//!
//! The driver feeds the lexer's and the parser's diagnostics for one file
//! through a queue before rendering them:
//! - Error limit to keep output bounded
//! - Follow-on filtering: a parser complaint about an invalid token the
//!   lexer already reported is dropped
//! - Exact duplicates (same code and span) are dropped
//! - Output is ordered by source position

use quill_ir::TokenKind;

use crate::Diagnostic;

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop parser diagnostics about tokens the lexer already rejected.
    pub filter_follow_on: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            filter_follow_on: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit and no filtering.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            filter_follow_on: false,
        }
    }
}

/// Queue for collecting, filtering and sorting diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was kept, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if diag.is_error() && self.limit_reached() && !diag.is_fatal() {
            return false;
        }
        if self.config.filter_follow_on && Self::is_follow_on(&diag) {
            return false;
        }
        if self
            .diagnostics
            .iter()
            .any(|d| d.code == diag.code && d.span == diag.span)
        {
            return false;
        }
        if diag.is_error() {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.add(diag);
        }
    }

    /// A parser diagnostic blaming a token the lexer produced as `Error`.
    fn is_follow_on(diag: &Diagnostic) -> bool {
        diag.code.is_parser_error()
            && diag
                .found
                .as_ref()
                .is_some_and(|token| token.kind == TokenKind::Error)
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take the diagnostics, ordered by position. Ties keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.diagnostics);
        out.sort_by_key(|d| (d.position.line, d.position.column));
        self.error_count = 0;
        self.warning_count = 0;
        out
    }
}

#[cfg(test)]
mod tests;
