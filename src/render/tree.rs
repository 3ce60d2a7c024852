use super::{push_indent, push_value, Renderer};
use crate::document::Scalar;

/// Indented outline; element exits print nothing.
#[derive(Debug, Default)]
pub struct TreeRenderer {
    out: String,
    depth: usize,
}

impl Renderer for TreeRenderer {
    fn enter_element(&mut self, name: &str) {
        push_indent(&mut self.out, self.depth);
        self.out.push_str("Element(");
        self.out.push_str(name);
        self.out.push_str(")\n");
        self.depth += 1;
    }

    fn exit_element(&mut self, _name: &str) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn attribute(&mut self, name: &str, value: &Scalar) {
        push_indent(&mut self.out, self.depth);
        self.out.push_str("Attr(");
        self.out.push_str(name);
        self.out.push('=');
        push_value(&mut self.out, value);
        self.out.push_str(")\n");
    }

    fn content(&mut self, value: &Scalar) {
        push_indent(&mut self.out, self.depth);
        self.out.push_str("Content(");
        push_value(&mut self.out, value);
        self.out.push_str(")\n");
    }

    fn finish(self) -> String {
        self.out
    }
}
