//! Parsed Unity document model
//!
//! A document is one root [`Element`]. Each element owns its name and an
//! ordered list of [`Content`] items taken from array slots 2 and onward.
//! Nodes remember where they started in the source for diagnostics; equality
//! ignores those positions and compares structure only.

mod display;

use crate::error::Pos;

/// A parsed Unity document. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub(crate) const fn new(root: Element) -> Self {
        Self { root }
    }

    pub const fn root(&self) -> &Element {
        &self.root
    }
}

/// `["name", content...]`
#[derive(Clone, Debug)]
pub struct Element {
    name: String,
    pos: Pos,
    name_pos: Pos,
    content: Vec<Content>,
}

impl Element {
    pub(crate) const fn new(name: String, pos: Pos, name_pos: Pos, content: Vec<Content>) -> Self {
        Self {
            name,
            pos,
            name_pos,
            content,
        }
    }

    /// Decoded element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the opening `[`
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    /// Position of the name string
    pub const fn name_pos(&self) -> Pos {
        self.name_pos
    }

    /// Content items in source order; item `i` here has content index `i + 1`
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Child elements in source order
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.content.iter().filter_map(|item| match item {
            Content::Child(child) => Some(child),
            _ => None,
        })
    }

    /// The first attributes object, wherever it appears
    pub fn attributes(&self) -> Option<&AttributeList> {
        self.content.iter().find_map(|item| match item {
            Content::Attributes(attrs) => Some(attrs),
            _ => None,
        })
    }

    /// Primitive content values in source order
    pub fn text(&self) -> impl Iterator<Item = &Scalar> {
        self.content.iter().filter_map(|item| match item {
            Content::Primitive(value) => Some(value),
            _ => None,
        })
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.content == other.content
    }
}

/// One slot after an element's name
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Attributes(AttributeList),
    Child(Element),
    Primitive(Scalar),
}

/// Attribute pairs of one `{...}` object, in source order
///
/// Duplicate names are kept.
#[derive(Clone, Debug)]
pub struct AttributeList {
    pos: Pos,
    attributes: Vec<Attribute>,
}

impl AttributeList {
    pub(crate) const fn new(pos: Pos, attributes: Vec<Attribute>) -> Self {
        Self { pos, attributes }
    }

    /// Position of the opening `{`
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Value of the first attribute called `name`
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }
}

impl PartialEq for AttributeList {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `"name": value`
#[derive(Clone, Debug)]
pub struct Attribute {
    name: String,
    pos: Pos,
    value: Scalar,
}

impl Attribute {
    pub(crate) const fn new(name: String, pos: Pos, value: Scalar) -> Self {
        Self { name, pos, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the name string
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    pub const fn value(&self) -> &Scalar {
        &self.value
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

/// A string, number, boolean or null literal
///
/// Numbers keep their source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Str(String),
    Num(String),
    Bool(bool),
    Null,
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(offset: usize) -> Pos {
        Pos::new(offset, 1, u32::try_from(offset).unwrap_or_default())
    }

    fn sample(offset: usize) -> Element {
        let attrs = AttributeList::new(
            pos(offset + 1),
            vec![
                Attribute::new("id".to_string(), pos(offset + 2), Scalar::Num("1".into())),
                Attribute::new("id".to_string(), pos(offset + 3), Scalar::Null),
            ],
        );
        let child = Element::new("b".to_string(), pos(offset + 4), pos(offset + 5), vec![]);
        Element::new(
            "a".to_string(),
            pos(offset),
            pos(offset + 1),
            vec![
                Content::Attributes(attrs),
                Content::Primitive(Scalar::Str("t".into())),
                Content::Child(child),
            ],
        )
    }

    #[test]
    fn test_equality_ignores_positions() {
        assert_eq!(sample(0), sample(7));
        assert_ne!(
            sample(0),
            Element::new("a".to_string(), pos(0), pos(1), vec![])
        );
    }

    #[test]
    fn test_accessors() {
        let element = sample(0);
        assert_eq!(element.name(), "a");
        assert_eq!(element.children().map(Element::name).collect::<Vec<_>>(), ["b"]);
        assert_eq!(element.text().collect::<Vec<_>>(), [&Scalar::Str("t".into())]);

        let attrs = element.attributes();
        assert_eq!(attrs.map(AttributeList::len), Some(2));
        assert_eq!(attrs.and_then(|a| a.get("id")), Some(&Scalar::Num("1".into())));
        assert_eq!(attrs.and_then(|a| a.get("missing")), None);
    }

    #[test]
    fn test_scalar_as_str() {
        assert_eq!(Scalar::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Scalar::Bool(true).as_str(), None);
    }
}
