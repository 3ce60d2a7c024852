//! Semantic validation of parsed documents
//!
//! Rules:
//! 1. every element name is a valid XML Name
//! 2. an attributes object may only appear at content index 1
//! 3. every attribute name is a valid XML Name
//!
//! The walk never stops early; every violation in the document is reported.
//! Values are never inspected.

use tracing::debug;

use crate::document::{AttributeList, Content, Document, Element};
use crate::error::{Pos, ValidationError, ValidationErrorKind};
use crate::name::is_valid_name;

/// Validate a document, returning every violation in document order
pub fn validate(document: &Document) -> Vec<ValidationError> {
    let mut validator = Validator::default();
    validator.element(document.root());
    debug!(errors = validator.errors.len(), "validation finished");
    validator.errors
}

/// Walk state for one validation pass
#[derive(Debug, Default)]
struct Validator<'d> {
    path: Vec<&'d str>,
    errors: Vec<ValidationError>,
}

impl<'d> Validator<'d> {
    fn element(&mut self, element: &'d Element) {
        // Pushed before the name check: the name error is reported at a path
        // that includes the offending element.
        self.path.push(element.name());
        if !is_valid_name(element.name()) {
            self.report(
                ValidationErrorKind::InvalidElementName {
                    name: element.name().to_string(),
                },
                element.name_pos(),
            );
        }

        for (index, item) in (1..).zip(element.content()) {
            match item {
                Content::Attributes(attrs) => self.attributes(attrs, index),
                Content::Child(child) => self.element(child),
                Content::Primitive(_) => {}
            }
        }

        self.path.pop();
    }

    /// Pair names are checked first; placement is checked once the whole
    /// object has been seen.
    fn attributes(&mut self, attrs: &AttributeList, index: usize) {
        for attr in attrs {
            if !is_valid_name(attr.name()) {
                self.report(
                    ValidationErrorKind::InvalidAttributeName {
                        name: attr.name().to_string(),
                    },
                    attr.pos(),
                );
            }
        }
        if index != 1 {
            self.report(ValidationErrorKind::MisplacedAttributes { index }, attrs.pos());
        }
    }

    fn report(&mut self, kind: ValidationErrorKind, pos: Pos) {
        let path = self.current_path();
        self.errors.push(ValidationError::new(kind, pos, Some(path)));
    }

    fn current_path(&self) -> String {
        if self.path.is_empty() {
            return "/".to_string();
        }
        self.path.iter().fold(String::new(), |mut path, name| {
            path.push('/');
            path.push_str(name);
            path
        })
    }
}
