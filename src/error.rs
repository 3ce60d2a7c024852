//! Error handling types for Unity notation
//!
//! Two families of diagnostics exist. A [`SyntaxError`] means the text could
//! not be turned into a tree at all; it is fatal and carries only a position.
//! A [`ValidationError`] is a semantic problem found while walking a tree that
//! did parse; validation keeps going after one and records the element path
//! where the problem was found.

use std::fmt;
use thiserror::Error;

/// Position in source text
///
/// `line` is 1-based. `column` is 0-based and counts characters, not bytes,
/// since the start of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Pos {
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Position of the first character of any input
    pub const fn start() -> Self {
        Self::new(0, 1, 0)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What went wrong while lexing or parsing
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("unexpected character '{0}'")]
    InvalidToken(char),
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("control character in string")]
    ControlCharacter,
    #[error("invalid number")]
    InvalidNumber,
    #[error("invalid literal, expected true, false or null")]
    InvalidKeyword,
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("element must start with a name string, found {found}")]
    MissingElementName { found: String },
    #[error("unexpected {found} after the root element")]
    TrailingInput { found: String },
    #[error("maximum nesting depth of {max} exceeded")]
    MaxDepthExceeded { max: u16 },
    #[error("input exceeds maximum size of {max} bytes")]
    MaxSizeExceeded { max: usize },
}

/// Lexical or grammatical error; no tree can be produced
///
/// The message always starts with `Syntax error: `.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("line {pos} - Syntax error: {kind}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    pos: Pos,
}

impl SyntaxError {
    pub const fn new(kind: SyntaxErrorKind, pos: Pos) -> Self {
        Self { kind, pos }
    }

    pub fn expected(expected: impl Into<String>, found: impl Into<String>, pos: Pos) -> Self {
        Self::new(
            SyntaxErrorKind::Expected {
                expected: expected.into(),
                found: found.into(),
            },
            pos,
        )
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub const fn pos(&self) -> Pos {
        self.pos
    }

    pub const fn line(&self) -> u32 {
        self.pos.line
    }

    pub const fn column(&self) -> u32 {
        self.pos.column
    }

    pub fn message(&self) -> String {
        format!("Syntax error: {}", self.kind)
    }
}

/// The semantic rule a [`ValidationError`] reports
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
    #[error("Invalid element name '{name}': must be a valid XML Name")]
    InvalidElementName { name: String },
    #[error("Attributes object must be at index 1 (found at index {index})")]
    MisplacedAttributes { index: usize },
    #[error("Invalid attribute name '{name}': must be a valid XML Name")]
    InvalidAttributeName { name: String },
}

/// Semantic error found in a syntactically valid document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub path: Option<String>,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, pos: Pos, path: Option<String>) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
            message: kind.to_string(),
            path,
            kind,
        }
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, self.line, self.column, self.path.as_deref(), &self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Either kind of diagnostic, as reported by [`crate::parse`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    Syntax(SyntaxError),
    Validation(ValidationError),
}

impl Diagnostic {
    pub const fn line(&self) -> u32 {
        match self {
            Self::Syntax(err) => err.line(),
            Self::Validation(err) => err.line,
        }
    }

    pub const fn column(&self) -> u32 {
        match self {
            Self::Syntax(err) => err.column(),
            Self::Validation(err) => err.column,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Syntax(err) => err.message(),
            Self::Validation(err) => err.message.clone(),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Syntax(_) => None,
            Self::Validation(err) => err.path.as_deref(),
        }
    }

    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(err) => {
                write_diagnostic(f, err.line(), err.column(), None, &err.message())
            }
            Self::Validation(err) => err.fmt(f),
        }
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl From<ValidationError> for Diagnostic {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

fn write_diagnostic(
    f: &mut fmt::Formatter<'_>,
    line: u32,
    column: u32,
    path: Option<&str>,
    message: &str,
) -> fmt::Result {
    match path {
        Some(path) if !path.is_empty() => {
            write!(f, "line {line}:{column} at {path} - {message}")
        }
        _ => write!(f, "line {line}:{column} - {message}"),
    }
}

/// Errors surfaced by the facade
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no document to render: the input has syntax errors")]
    MissingDocument,
    #[error("unknown render format '{0}': expected log, tree or lisp")]
    UnknownFormat(String),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        assert_eq!(Pos::new(42, 3, 7).to_string(), "3:7");
    }

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::expected("'['", "number", Pos::start());
        assert_eq!(
            err.to_string(),
            "line 1:0 - Syntax error: expected '[', found number"
        );
        assert_eq!(err.message(), "Syntax error: expected '[', found number");
        assert_eq!(
            Diagnostic::from(err).to_string(),
            "line 1:0 - Syntax error: expected '[', found number"
        );
    }

    #[test]
    fn test_validation_error_display_with_path() {
        let err = ValidationError::new(
            ValidationErrorKind::MisplacedAttributes { index: 2 },
            Pos::new(10, 1, 10),
            Some("/x".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "line 1:10 at /x - Attributes object must be at index 1 (found at index 2)"
        );
    }

    #[test]
    fn test_validation_error_display_without_path() {
        let mut err = ValidationError::new(
            ValidationErrorKind::InvalidAttributeName {
                name: "1a".to_string(),
            },
            Pos::new(0, 2, 4),
            Some(String::new()),
        );
        assert_eq!(
            err.to_string(),
            "line 2:4 - Invalid attribute name '1a': must be a valid XML Name"
        );
        err.path = None;
        assert!(!err.to_string().contains(" at "));
    }

    #[test]
    fn test_diagnostic_accessors() {
        let diag = Diagnostic::from(ValidationError::new(
            ValidationErrorKind::InvalidElementName {
                name: "123".to_string(),
            },
            Pos::new(1, 1, 1),
            Some("/123".to_string()),
        ));
        assert_eq!(diag.line(), 1);
        assert_eq!(diag.column(), 1);
        assert_eq!(diag.path(), Some("/123"));
        assert!(!diag.is_syntax());
        assert!(diag.message().contains("Invalid element name"));
    }
}
