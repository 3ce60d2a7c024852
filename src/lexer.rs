//! Lexer for Unity notation
//!
//! Produces the JSON token set: brackets, braces, `,`, `:`, the literals
//! `true` / `false` / `null`, strings and numbers. Whitespace is skipped.

pub mod cursor;
pub(crate) mod number_parser;
pub(crate) mod string_parser;
pub mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use tracing::debug;

use crate::error::{SyntaxError, SyntaxErrorKind};

/// Unity lexer over a source string
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over `input`
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            finished: false,
        }
    }

    /// Get the next token from the input
    ///
    /// Once the input is exhausted every further call returns an EOF token.
    pub fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.cursor.skip_whitespace();

        let start = self.cursor.position();

        let kind = match self.cursor.current() {
            None => TokenKind::Eof,
            Some(b) => match b {
                b'{' => self.single(TokenKind::LeftBrace),
                b'}' => self.single(TokenKind::RightBrace),
                b'[' => self.single(TokenKind::LeftBracket),
                b']' => self.single(TokenKind::RightBracket),
                b':' => self.single(TokenKind::Colon),
                b',' => self.single(TokenKind::Comma),
                b'"' => TokenKind::String(string_parser::scan_string(&mut self.cursor)?),
                b'-' | b'0'..=b'9' => {
                    TokenKind::Number(number_parser::scan_number(&mut self.cursor)?)
                }
                b't' => self.keyword("true", TokenKind::True)?,
                b'f' => self.keyword("false", TokenKind::False)?,
                b'n' => self.keyword("null", TokenKind::Null)?,
                _ => {
                    let c = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(SyntaxError::new(SyntaxErrorKind::InvalidToken(c), start));
                }
            },
        };

        Ok(Token::new(kind, start))
    }

    fn single(&mut self, kind: TokenKind<'a>) -> TokenKind<'a> {
        self.cursor.advance();
        kind
    }

    fn keyword(
        &mut self,
        literal: &str,
        kind: TokenKind<'a>,
    ) -> Result<TokenKind<'a>, SyntaxError> {
        if self.cursor.starts_with(literal) {
            self.cursor.advance_by(literal.len());
            Ok(kind)
        } else {
            Err(SyntaxError::new(
                SyntaxErrorKind::InvalidKeyword,
                self.cursor.position(),
            ))
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenize a whole input, excluding the final EOF token
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    let tokens: Vec<Token<'_>> = Lexer::new(input).collect::<Result<_, _>>()?;
    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
