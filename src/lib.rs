//! Unity notation: markup trees written as JSON arrays
//!
//! An element is an array whose first item is its name. An optional object
//! right after the name holds attributes; everything else is content, either
//! nested elements or primitive values.
//!
//! ```text
//! ["note", {"lang": "en"}, "Hello ", ["b", "world"]]
//! ```
//!
//! This crate provides:
//! - A lexer and a recursive descent parser with positioned syntax errors
//! - A validator that checks element and attribute names against XML Name
//!   rules and reports every problem with its element path
//! - LOG, TREE and LISP renderings for debugging
//!
//! # Examples
//! ```
//! use unity_notation::{parse, render, Format};
//!
//! let result = parse(r#"["greeting", {"lang": "en"}, "hi"]"#);
//! assert!(result.errors.is_empty());
//! let tree = render(&result, Format::Tree).unwrap();
//! assert_eq!(tree, "Element(greeting)\n  Attr(lang=\"en\")\n  Content(\"hi\")\n");
//! ```

use tracing::{debug, instrument};

pub mod config;
pub mod document;
pub mod error;
pub mod lexer;
pub mod name;
pub mod parse_result;
pub mod parser;
pub mod render;
pub mod validator;

// Re-exports
pub use config::Config;
pub use document::{Attribute, AttributeList, Content, Document, Element, Scalar};
pub use error::{
    Diagnostic, Error, Pos, Result, SyntaxError, SyntaxErrorKind, ValidationError,
    ValidationErrorKind,
};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use name::is_valid_name;
pub use parse_result::ParseResult;
pub use parser::Parser;
pub use render::{Format, Renderer};
pub use validator::validate;

/// Parse and validate `text` with the default [`Config`]
///
/// Never fails: problems come back as diagnostics. Validation only runs
/// when parsing succeeded.
pub fn parse(text: &str) -> ParseResult {
    parse_with_config(text, Config::default())
}

/// Parse and validate `text` with explicit limits
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_with_config(text: &str, config: Config) -> ParseResult {
    match Parser::with_config(text, config).parse() {
        Ok(document) => {
            let errors: Vec<Diagnostic> = validate(&document)
                .into_iter()
                .map(Diagnostic::from)
                .collect();
            debug!(errors = errors.len(), "parsed document");
            ParseResult::new(Some(document), errors)
        }
        Err(err) => {
            debug!(error = %err, "syntax error");
            ParseResult::new(None, vec![err.into()])
        }
    }
}

/// `true` when `text` parses and validates without any diagnostic
pub fn is_valid(text: &str) -> bool {
    parse(text).is_valid()
}

/// Render the tree held by `result`
///
/// Validation errors do not prevent rendering; a missing tree does.
pub fn render(result: &ParseResult, format: Format) -> Result<String> {
    result
        .document()
        .map(|document| document.render(format))
        .ok_or(Error::MissingDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let result = parse(r#"["x", {"a": "1"}, "text"]"#);
        assert!(result.is_valid());
        assert!(result.document().is_some());
    }

    #[test]
    fn test_parse_syntax_error_has_no_document() {
        let result = parse(r#"["x""#);
        assert!(result.document().is_none());
        assert_eq!(result.errors().len(), 1);
        assert!(result.has_syntax_error());
    }

    #[test]
    fn test_parse_validation_errors_keep_document() {
        let result = parse(r#"["1x", "t", {"a": 1}]"#);
        assert!(result.document().is_some());
        assert_eq!(result.errors().len(), 2);
        assert!(!result.has_syntax_error());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(r#"["x"]"#));
        assert!(!is_valid(r#"["123"]"#));
        assert!(!is_valid("[]"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_render_missing_document() {
        let result = parse("not unity");
        assert_eq!(render(&result, Format::Log), Err(Error::MissingDocument));
    }

    #[test]
    fn test_render_despite_validation_errors() -> Result<()> {
        let result = parse(r#"["1x"]"#);
        assert_eq!(render(&result, Format::Tree)?, "Element(1x)\n");
        Ok(())
    }

    #[test]
    fn test_parse_with_config_depth_limit() {
        let result = parse_with_config(r#"["a", ["b", ["c"]]]"#, Config::new(2, 0));
        assert!(result.has_syntax_error());
        let result = parse_with_config(r#"["a", ["b"]]"#, Config::new(2, 0));
        assert!(result.is_valid());
    }
}
