//! Compact Unity notation output
//!
//! `Display` writes a document back as `["name",{"k":"v"},"text",["child"]]`.
//! Parsing the output yields an equal document.

use std::fmt::{self, Write};

use super::{Attribute, AttributeList, Content, Document, Element, Scalar};

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        write_quoted(f, &self.name)?;
        for item in &self.content {
            f.write_char(',')?;
            match item {
                Content::Attributes(attrs) => attrs.fmt(f)?,
                Content::Child(child) => child.fmt(f)?,
                Content::Primitive(value) => value.fmt(f)?,
            }
        }
        f.write_char(']')
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, attr) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            attr.fmt(f)?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.name)?;
        f.write_char(':')?;
        self.value.fmt(f)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write_quoted(f, s),
            Self::Num(raw) => f.write_str(raw),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\x08' => f.write_str("\\b")?,
            '\x0C' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
