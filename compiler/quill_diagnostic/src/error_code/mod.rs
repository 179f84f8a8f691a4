//! Error codes for all front-end diagnostics.

use std::fmt;

use crate::Severity;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing token (inserted by recovery)
    E1002,
    /// Unexpected token skipped at a repetition or option
    E1003,
    /// Too many array dimensions
    E1004,
    /// Unexpected input after the main block
    E1005,
    /// End of input reached while recovering
    E1006,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
        }
    }

    /// One-line summary, used by `quill explain`-style listings and tests.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "missing token",
            ErrorCode::E1003 => "unexpected token skipped",
            ErrorCode::E1004 => "too many array dimensions",
            ErrorCode::E1005 => "unexpected input after main block",
            ErrorCode::E1006 => "unrecoverable end of input",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001)
    }

    pub fn is_parser_error(&self) -> bool {
        !self.is_lexer_error()
    }

    /// Severity a diagnostic with this code gets unless overridden.
    pub fn default_severity(&self) -> Severity {
        match self {
            ErrorCode::E1006 => Severity::Fatal,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| format!("unknown error code: {s}"))
    }
}
