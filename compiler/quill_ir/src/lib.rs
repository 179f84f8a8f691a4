//! Quill IR - front-end data types.
//!
//! This crate contains the data shared by every stage of the Quill front end:
//! - Spans and line/column positions for source locations
//! - Tokens and `TokenList` for lexer output
//! - `GrammarRule`, the static enumeration of the grammar's productions
//! - The parse tree (one node type per grammar rule) and its traversal
//!
//! The parse tree is pure data. It is built once by `quill_parse` and then
//! only read, either through the typed node structs or through the
//! rule-tagged [`NodeRef`] view and the [`visitor::Visitor`] trait.

mod rule;
mod span;
mod token;
mod traits;
pub mod tree;
pub mod visitor;

pub use rule::GrammarRule;
pub use span::{Position, Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use traits::Spanned;
pub use tree::{
    BasicType, Block, DimDecl, Element, Expression, FunctionDecl, Functions, GlobalVars,
    LocalVars, Main, NodeRef, Param, ParamList, Start, Statement, Terminal, Type, TypeDim1,
    TypeDim2, VarDecl,
};
