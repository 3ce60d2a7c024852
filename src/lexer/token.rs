//! Token types for the Unity lexer

use crate::error::Pos;

/// Unity token types
///
/// String and number tokens borrow their raw source text. String text is the
/// content between the quotes with escapes still in place; decoding happens
/// once, when the parser takes ownership of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
    // Structural
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Colon,        // :
    Comma,        // ,

    // Literals
    True,
    False,
    Null,

    // Values
    String(&'a str),
    Number(&'a str),

    Eof,
}

impl TokenKind<'_> {
    /// Get token name for error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Eof => "end of input",
        }
    }
}

/// Token with the position of its first character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub pos: Pos,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind<'a>, pos: Pos) -> Self {
        Self { kind, pos }
    }

    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
