use crate::document::Document;
use crate::error::Diagnostic;

/// Outcome of [`crate::parse`]
///
/// A syntax error leaves `document` empty and `errors` holding exactly that
/// one diagnostic. Otherwise the tree is present and `errors` holds every
/// validation problem in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    pub document: Option<Document>,
    pub errors: Vec<Diagnostic>,
}

impl ParseResult {
    pub const fn new(document: Option<Document>, errors: Vec<Diagnostic>) -> Self {
        Self { document, errors }
    }

    pub const fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// No diagnostics of either kind
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_syntax_error(&self) -> bool {
        self.errors.iter().any(Diagnostic::is_syntax)
    }
}
