//! Token kinds for Quill.

use std::fmt;

/// Token kinds for Quill.
///
/// Kinds are fieldless; the matched text lives in [`super::Token::lexeme`].
/// The discriminant doubles as the bit index used by parser token sets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    Program,
    Var,
    NumberType, // number
    BooleanType, // boolean
    Function,
    Main,

    // Punctuation
    Colon,     // :
    Comma,     // ,
    Semicolon, // ;
    LBracket,  // [
    RBracket,  // ]
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    /// Identifier (`ID`)
    Ident,
    /// Integer constant (`NUM_CTE`)
    Int,

    /// Unrecognised input.
    Error,
    Eof,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 19;

    /// Every token kind, in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Program,
        TokenKind::Var,
        TokenKind::NumberType,
        TokenKind::BooleanType,
        TokenKind::Function,
        TokenKind::Main,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    /// Get a unique index for this token's discriminant (`0..COUNT`).
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`discriminant_index`](Self::discriminant_index).
    pub fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Whether this kind is a reserved word.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Program
                | TokenKind::Var
                | TokenKind::NumberType
                | TokenKind::BooleanType
                | TokenKind::Function
                | TokenKind::Main
        )
    }

    /// Short name used in "expected ..." messages.
    ///
    /// Fixed-spelling tokens show their spelling, the rest a category name.
    pub const fn friendly_name(self) -> &'static str {
        match self {
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::NumberType => "number",
            TokenKind::BooleanType => "boolean",
            TokenKind::Function => "function",
            TokenKind::Main => "main",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer constant",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }

    /// Whether [`friendly_name`](Self::friendly_name) is literal source text.
    pub const fn has_fixed_spelling(self) -> bool {
        !matches!(
            self,
            TokenKind::Ident | TokenKind::Int | TokenKind::Error | TokenKind::Eof
        )
    }

    /// Name suitable for prose: fixed spellings are quoted in backticks.
    pub fn display_name(self) -> String {
        if self.has_fixed_spelling() {
            format!("`{}`", self.friendly_name())
        } else {
            self.friendly_name().to_string()
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}
