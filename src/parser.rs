//! Recursive descent parser for Unity notation
//!
//! ```text
//! document      := element EOF
//! element       := '[' STRING (',' content)* ']'
//! content       := attributesObj | element | primitive
//! attributesObj := '{' '}' | '{' pair (',' pair)* '}'
//! pair          := STRING ':' primitive
//! primitive     := STRING | NUMBER | 'true' | 'false' | 'null'
//! ```
//!
//! One token of lookahead picks the `content` alternative. The parser only
//! checks structure; names and attribute placement are left to the validator.

use tracing::trace;

use crate::config::Config;
use crate::document::{Attribute, AttributeList, Content, Document, Element, Scalar};
use crate::error::{Pos, SyntaxError, SyntaxErrorKind};
use crate::lexer::string_parser::decode;
use crate::lexer::{Lexer, Token, TokenKind};

/// Parser for Unity documents
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    input_len: usize,
    config: Config,
    depth: u16,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new parser with custom configuration
    pub fn with_config(input: &'a str, config: Config) -> Self {
        Self {
            lexer: Lexer::new(input),
            input_len: input.len(),
            config,
            depth: 0,
        }
    }

    /// Parse a complete document
    ///
    /// Stops at the first syntax error.
    pub fn parse(&mut self) -> Result<Document, SyntaxError> {
        if self.config.size_exceeded(self.input_len) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                Pos::start(),
            ));
        }

        let first = self.lexer.next_token()?;
        if first.kind != TokenKind::LeftBracket {
            return Err(SyntaxError::expected(
                "'[' to start the root element",
                first.kind.name(),
                first.pos,
            ));
        }

        let root = self.parse_element(first.pos)?;

        let trailing = self.lexer.next_token()?;
        if !trailing.is_eof() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::TrailingInput {
                    found: trailing.kind.name().to_string(),
                },
                trailing.pos,
            ));
        }

        Ok(Document::new(root))
    }

    /// Parse an element whose `[` at `open` has been consumed
    fn parse_element(&mut self, open: Pos) -> Result<Element, SyntaxError> {
        self.enter(open)?;

        let name_token = self.lexer.next_token()?;
        let TokenKind::String(raw) = name_token.kind else {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MissingElementName {
                    found: name_token.kind.name().to_string(),
                },
                name_token.pos,
            ));
        };
        let name = decode(raw);
        trace!(name = %name, line = open.line, "element");

        let mut content = Vec::new();
        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::Comma => {
                    let first = self.lexer.next_token()?;
                    content.push(self.parse_content(first)?);
                }
                TokenKind::RightBracket => break,
                _ => {
                    return Err(SyntaxError::expected(
                        "',' or ']'",
                        token.kind.name(),
                        token.pos,
                    ))
                }
            }
        }

        self.depth = self.depth.saturating_sub(1);
        Ok(Element::new(name, open, name_token.pos, content))
    }

    fn parse_content(&mut self, first: Token<'a>) -> Result<Content, SyntaxError> {
        match first.kind {
            TokenKind::LeftBrace => self.parse_attributes(first.pos).map(Content::Attributes),
            TokenKind::LeftBracket => self.parse_element(first.pos).map(Content::Child),
            _ => Self::primitive(first, "content value").map(Content::Primitive),
        }
    }

    /// Parse an attributes object whose `{` at `open` has been consumed
    fn parse_attributes(&mut self, open: Pos) -> Result<AttributeList, SyntaxError> {
        let mut attributes = Vec::new();

        let mut token = self.lexer.next_token()?;
        if token.kind == TokenKind::RightBrace {
            return Ok(AttributeList::new(open, attributes));
        }

        loop {
            let TokenKind::String(raw) = token.kind else {
                return Err(SyntaxError::expected(
                    "attribute name string",
                    token.kind.name(),
                    token.pos,
                ));
            };

            let colon = self.lexer.next_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(SyntaxError::expected("':'", colon.kind.name(), colon.pos));
            }

            let value = Self::primitive(self.lexer.next_token()?, "attribute value")?;
            attributes.push(Attribute::new(decode(raw), token.pos, value));

            let next = self.lexer.next_token()?;
            match next.kind {
                TokenKind::Comma => token = self.lexer.next_token()?,
                TokenKind::RightBrace => break,
                _ => {
                    return Err(SyntaxError::expected(
                        "',' or '}'",
                        next.kind.name(),
                        next.pos,
                    ))
                }
            }
        }

        Ok(AttributeList::new(open, attributes))
    }

    fn primitive(token: Token<'a>, expected: &str) -> Result<Scalar, SyntaxError> {
        match token.kind {
            TokenKind::String(raw) => Ok(Scalar::Str(decode(raw))),
            TokenKind::Number(raw) => Ok(Scalar::Num(raw.to_string())),
            TokenKind::True => Ok(Scalar::Bool(true)),
            TokenKind::False => Ok(Scalar::Bool(false)),
            TokenKind::Null => Ok(Scalar::Null),
            _ => Err(SyntaxError::expected(expected, token.kind.name(), token.pos)),
        }
    }

    fn enter(&mut self, open: Pos) -> Result<(), SyntaxError> {
        self.depth = self.depth.saturating_add(1);
        if self.config.depth_exceeded(self.depth) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                open,
            ));
        }
        Ok(())
    }
}

impl std::str::FromStr for Document {
    type Err = SyntaxError;

    /// Parse with the default [`Config`], without validation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Document, SyntaxError> {
        Parser::new(input).parse()
    }

    fn parse_err(input: &str) -> SyntaxError {
        match parse(input) {
            Ok(doc) => panic!("expected a syntax error for {input}, got {doc}"),
            Err(err) => err,
        }
    }

    #[test]
    fn test_parse_single_element() -> Result<(), SyntaxError> {
        let doc = parse(r#"["x"]"#)?;
        assert_eq!(doc.root().name(), "x");
        assert!(doc.root().content().is_empty());
        assert_eq!(doc.root().name_pos(), Pos::new(1, 1, 1));
        Ok(())
    }

    #[test]
    fn test_parse_content_in_order() -> Result<(), SyntaxError> {
        let doc = parse(r#"["x", "text", 42, true, false, null, {"a": "1"}, ["y"]]"#)?;
        let content = doc.root().content();
        assert_eq!(content.len(), 7);
        assert_eq!(content.first(), Some(&Content::Primitive(Scalar::Str("text".into()))));
        assert_eq!(content.get(1), Some(&Content::Primitive(Scalar::Num("42".into()))));
        assert_eq!(content.get(2), Some(&Content::Primitive(Scalar::Bool(true))));
        assert_eq!(content.get(3), Some(&Content::Primitive(Scalar::Bool(false))));
        assert_eq!(content.get(4), Some(&Content::Primitive(Scalar::Null)));
        assert!(matches!(content.get(5), Some(Content::Attributes(a)) if a.len() == 1));
        assert!(matches!(content.get(6), Some(Content::Child(c)) if c.name() == "y"));
        Ok(())
    }

    #[test]
    fn test_parse_keeps_number_text() -> Result<(), SyntaxError> {
        let doc = parse(r#"["n", -0.50e+10]"#)?;
        assert_eq!(doc.root().text().next(), Some(&Scalar::Num("-0.50e+10".into())));
        Ok(())
    }

    #[test]
    fn test_parse_decodes_names_once() -> Result<(), SyntaxError> {
        let doc = parse(r#"["a\tb", {"k\"": "v\n"}]"#)?;
        assert_eq!(doc.root().name(), "a\tb");
        let attrs = doc.root().attributes();
        let attr = attrs.and_then(|a| a.iter().next());
        assert_eq!(attr.map(Attribute::name), Some("k\""));
        assert_eq!(attr.map(Attribute::value), Some(&Scalar::Str("v\n".into())));
        Ok(())
    }

    #[test]
    fn test_parse_keeps_duplicate_attributes() -> Result<(), SyntaxError> {
        let doc = parse(r#"["a", {"k": 1, "k": 2}]"#)?;
        let values: Vec<&Scalar> = doc
            .root()
            .attributes()
            .map(|a| a.iter().map(Attribute::value).collect())
            .unwrap_or_default();
        assert_eq!(values, [&Scalar::Num("1".into()), &Scalar::Num("2".into())]);
        Ok(())
    }

    #[test]
    fn test_parse_empty_attributes() -> Result<(), SyntaxError> {
        let doc = parse(r#"["a", {}]"#)?;
        assert_eq!(doc.root().attributes().map(AttributeList::is_empty), Some(true));
        Ok(())
    }

    #[test]
    fn test_parse_nested() -> Result<(), SyntaxError> {
        let doc = parse(r#"["a", ["b", ["c", ["d"]]]]"#)?;
        let mut names = Vec::new();
        let mut current = Some(doc.root());
        while let Some(element) = current {
            names.push(element.name());
            current = element.children().next();
        }
        assert_eq!(names, ["a", "b", "c", "d"]);
        Ok(())
    }

    #[test]
    fn test_top_level_must_be_element() {
        for input in ["{}", "\"s\"", "42", "true", "", "   "] {
            let err = parse_err(input);
            assert!(
                matches!(err.kind(), SyntaxErrorKind::Expected { .. }),
                "{input}: {err}"
            );
        }
    }

    #[test]
    fn test_empty_array_is_syntax_error() {
        let err = parse_err("[]");
        assert_eq!(
            err.kind(),
            &SyntaxErrorKind::MissingElementName {
                found: "']'".to_string()
            }
        );
        assert_eq!(err.pos(), Pos::new(1, 1, 1));
    }

    #[test]
    fn test_name_must_be_string() {
        let err = parse_err("[1]");
        assert!(matches!(err.kind(), SyntaxErrorKind::MissingElementName { .. }));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse_err(r#"["a"] ["b"]"#);
        assert_eq!(
            err.kind(),
            &SyntaxErrorKind::TrailingInput {
                found: "'['".to_string()
            }
        );
        assert_eq!(err.column(), 6);
    }

    #[test]
    fn test_structural_mismatches() {
        let cases = [
            (r#"["a" "b"]"#, 5),
            (r#"["a", "b""#, 9),
            (r#"["a",]"#, 5),
            (r#"["a", {"k" 1}]"#, 11),
            (r#"["a", {"k": [1]}]"#, 12),
            (r#"["a", {"k": 1,}]"#, 14),
            (r#"["a", {1: 1}]"#, 7),
            (r#"["a"}"#, 4),
        ];
        for (input, column) in cases {
            let err = parse_err(input);
            assert_eq!(err.column(), column, "{input}: {err}");
            assert_eq!(err.line(), 1);
        }
    }

    #[test]
    fn test_error_line_numbers() {
        let err = parse_err("[\n  \"a\",\n  @\n]");
        assert_eq!(err.line(), 3);
        assert_eq!(err.column(), 2);
    }

    #[test]
    fn test_depth_limit() {
        let mut parser = Parser::with_config(r#"["a", ["b", ["c"]]]"#, Config::new(2, 0));
        let err = parser.parse().unwrap_err();
        assert_eq!(err.kind(), &SyntaxErrorKind::MaxDepthExceeded { max: 2 });
        assert_eq!(err.column(), 12);
    }

    #[test]
    fn test_size_limit() {
        let mut parser = Parser::with_config(r#"["abcdef"]"#, Config::new(0, 5));
        let err = parser.parse().unwrap_err();
        assert_eq!(err.kind(), &SyntaxErrorKind::MaxSizeExceeded { max: 5 });
        assert_eq!(err.pos(), Pos::start());
    }

    #[test]
    fn test_unlimited_config_allows_deep_nesting() -> Result<(), SyntaxError> {
        let depth = 300;
        let input = format!("{}{}", r#"["e","#.repeat(depth), format!(r#""x"{}"#, "]".repeat(depth)));
        let doc = Parser::with_config(&input, Config::unlimited()).parse()?;
        assert_eq!(doc.root().name(), "e");
        Ok(())
    }
}
