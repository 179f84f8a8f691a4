//! Diagnostic system for the Quill front end.
//!
//! Diagnostics are values: every stage records them and keeps going, and the
//! driver decides how to present them.
//! - Error codes for searchability (`E0xxx` lexer, `E1xxx` parser)
//! - A message saying what went wrong
//! - The offending span and its line/column position
//! - What was expected and which token was found instead
//! - Notes for context

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{unexpected_token, Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
