//! Core traits shared by tree nodes.

use super::Span;

/// Trait for types that cover a region of source text.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}
