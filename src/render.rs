//! Debug renderings of a parsed document
//!
//! Three formats share one traversal order: enter element, its content items
//! in source order (attribute pairs one by one inside an attributes object),
//! exit element. Each format keeps its own state while walking.

mod lisp;
mod log;
mod tree;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

pub use self::{lisp::LispRenderer, log::LogRenderer, tree::TreeRenderer};
use crate::document::{Content, Document, Element, Scalar};
use crate::error::Error;

/// Output format for [`render`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `ENTER` / `EXIT` event log with element paths
    #[default]
    Log,
    /// Indented outline
    Tree,
    /// S-expressions
    Lisp,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Log => "log",
            Self::Tree => "tree",
            Self::Lisp => "lisp",
        })
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "tree" => Ok(Self::Tree),
            "lisp" => Ok(Self::Lisp),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Receives traversal events and builds one rendering
pub trait Renderer {
    fn enter_element(&mut self, name: &str);
    fn exit_element(&mut self, name: &str);
    fn enter_attributes(&mut self) {}
    fn exit_attributes(&mut self) {}
    fn attribute(&mut self, name: &str, value: &Scalar);
    fn content(&mut self, value: &Scalar);
    /// Consume the renderer and return its output
    fn finish(self) -> String;
}

/// Render `document` in the given format
pub fn render(document: &Document, format: Format) -> String {
    let output = match format {
        Format::Log => render_with(document, LogRenderer::default()),
        Format::Tree => render_with(document, TreeRenderer::default()),
        Format::Lisp => render_with(document, LispRenderer::default()),
    };
    debug!(%format, bytes = output.len(), "rendered document");
    output
}

/// Drive any [`Renderer`] over `document`
pub fn render_with<R: Renderer>(document: &Document, mut renderer: R) -> String {
    walk(document.root(), &mut renderer);
    renderer.finish()
}

fn walk<R: Renderer>(element: &Element, renderer: &mut R) {
    renderer.enter_element(element.name());
    for item in element.content() {
        match item {
            Content::Attributes(attrs) => {
                renderer.enter_attributes();
                for attr in attrs {
                    renderer.attribute(attr.name(), attr.value());
                }
                renderer.exit_attributes();
            }
            Content::Child(child) => walk(child, renderer),
            Content::Primitive(value) => renderer.content(value),
        }
    }
    renderer.exit_element(element.name());
}

impl Document {
    /// Render this document in the given format
    pub fn render(&self, format: Format) -> String {
        render(self, format)
    }
}

/// Append a value the way every format shows it: strings quoted with their
/// decoded text, numbers verbatim, literals as written.
pub(crate) fn push_value(out: &mut String, value: &Scalar) {
    match value {
        Scalar::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Scalar::Num(raw) => out.push_str(raw),
        Scalar::Bool(true) => out.push_str("true"),
        Scalar::Bool(false) => out.push_str("false"),
        Scalar::Null => out.push_str("null"),
    }
}

/// Append `depth * 2` spaces
pub(crate) fn push_indent(out: &mut String, depth: usize) {
    out.extend(std::iter::repeat(' ').take(depth * 2));
}
