//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and,
//! when the source text is attached, the offending line with a caret
//! underline.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::{plural_s, DiagnosticEmitter};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when writing to a TTY and `NO_COLOR` is not set.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean.
    ///
    /// For `Auto`, colors are used only when `is_tty` holds and `no_color`
    /// (the `NO_COLOR` environment convention) does not.
    pub fn should_use_colors(self, is_tty: bool, no_color: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty && !no_color,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text a diagnostic refers to.
struct SourceFile {
    path: String,
    text: String,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with resolved color choice.
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter {
            writer,
            colors,
            source: None,
        }
    }

    /// Attach the source text so diagnostics show `path:line:col` and the
    /// offending line.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.source = Some(SourceFile {
            path: path.into(),
            text: text.into(),
        });
        self
    }

    /// Recover the writer, e.g. a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Fatal | Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let head = format!("{}[{}]", diagnostic.severity, diagnostic.code.as_str());
        self.write_colored(&head, Self::severity_color(diagnostic.severity));
        if self.colors {
            let _ = writeln!(
                self.writer,
                "{}: {}{}",
                colors::BOLD,
                diagnostic.message,
                colors::RESET
            );
        } else {
            let _ = writeln!(self.writer, ": {}", diagnostic.message);
        }
    }

    /// `line | text` plus the caret line. Returns `false` if the line is
    /// not in the attached source.
    fn write_snippet(&mut self, diagnostic: &Diagnostic, gutter: usize) -> bool {
        let Some(source) = &self.source else {
            return false;
        };
        let line_no = diagnostic.position.line;
        let Some(line) = line_no
            .checked_sub(1)
            .and_then(|i| source.text.lines().nth(i as usize))
        else {
            return false;
        };
        let line = line.to_string();

        // Indent under the caret, preserving tabs so columns line up.
        let column = diagnostic.position.column.saturating_sub(1) as usize;
        let indent: String = line
            .chars()
            .take(column)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let width = source
            .text
            .get(diagnostic.span.to_range())
            .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count())
            .max(1);
        let carets = "^".repeat(width);
        let label = diagnostic.label();

        let pad = " ".repeat(gutter);
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{line_no:>gutter$} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {line}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = write!(self.writer, " {indent}");
        self.write_colored(&carets, Self::severity_color(diagnostic.severity));
        if let Some(label) = label {
            let _ = write!(self.writer, " ");
            self.write_colored(&label, Self::severity_color(diagnostic.severity));
        }
        let _ = writeln!(self.writer);
        true
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool, no_color: bool) -> Self {
        TerminalEmitter::new(io::stderr(), mode.should_use_colors(is_tty, no_color))
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_header(diagnostic);

        let gutter = diagnostic.position.line.to_string().len();
        let location = match &self.source {
            Some(source) => format!("{}:{}", source.path, diagnostic.position),
            None => diagnostic.position.to_string(),
        };
        let pad = " ".repeat(gutter);
        self.write_colored(&format!("{pad}-->"), colors::GUTTER);
        let _ = writeln!(self.writer, " {location}");

        if !self.write_snippet(diagnostic, gutter) {
            if let Some(label) = diagnostic.label() {
                self.write_colored(&format!("{pad} ="), colors::GUTTER);
                let _ = writeln!(self.writer, " {label}");
            }
        }

        for note in &diagnostic.notes {
            self.write_colored(&format!("{pad} ="), colors::GUTTER);
            let _ = write!(self.writer, " ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": {error_count} error{} and {warning_count} warning{} emitted",
                    plural_s(error_count),
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(
                    self.writer,
                    ": {error_count} error{} emitted",
                    plural_s(error_count)
                );
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
