//! The diagnostic record shared by the lexer, the parser and the driver.

use std::fmt;

use quill_ir::{Position, Span, Token};

use crate::ErrorCode;

/// Severity level for diagnostics.
///
/// Ordered from most to least severe.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    /// Parsing stopped; nothing after this diagnostic was examined.
    Fatal,
    /// Recoverable error; parsing continued.
    Error,
    Warning,
}

impl Severity {
    /// `true` for `Fatal` and `Error`.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Fatal | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "fatal error"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single syntax problem found in the input.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Where the problem is. Zero-width for missing tokens.
    pub span: Span,
    /// 1-based line/column of `span.start`.
    pub position: Position,
    /// Human-readable description of what would have been accepted.
    pub expected: Option<String>,
    /// The offending token, when there is one.
    pub found: Option<Token>,
    /// Context notes (e.g. "while parsing a variable declaration").
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with the code's default severity and an empty message.
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            message: String::new(),
            span: Span::DUMMY,
            position: Position::START,
            expected: None,
            found: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span, position: Position) -> Self {
        self.span = span;
        self.position = position;
        self
    }

    /// Locate the diagnostic at `token` and record it as the found token.
    #[must_use]
    pub fn at_token(mut self, token: &Token) -> Self {
        self.span = token.span;
        self.position = token.position;
        self.found = Some(token.clone());
        self
    }

    /// Locate the diagnostic just before `token` without blaming it.
    #[must_use]
    pub fn before_token(mut self, token: &Token) -> Self {
        self.span = Span::point(token.span.start);
        self.position = token.position;
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    /// Label text for the caret line: "expected X, found Y" or a subset.
    pub fn label(&self) -> Option<String> {
        let found = self.found.as_ref().map(Token::describe);
        match (&self.expected, found) {
            (Some(expected), Some(found)) => Some(format!("expected {expected}, found {found}")),
            (Some(expected), None) => Some(format!("expected {expected}")),
            (None, Some(found)) => Some(format!("found {found}")),
            (None, None) => None,
        }
    }
}

/// `E1002 at 3:17: missing `;``
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.position, self.message)
    }
}

/// "unexpected `x`" for a token that fits nowhere at this point.
pub fn unexpected_token(found: &Token, expected: impl Into<String>) -> Diagnostic {
    Diagnostic::new(ErrorCode::E1001)
        .with_message(format!("unexpected {}", found.describe()))
        .at_token(found)
        .with_expected(expected)
}
