use super::{push_indent, push_value, Renderer};
use crate::document::Scalar;

/// Event log: one line per element boundary, attribute and content item,
/// with the element path printed on entry.
///
/// ```text
/// ENTER element: "a" at /a
///   ATTRIBUTE: id = "1"
///   CONTENT: "text"
/// EXIT element: "a"
/// ```
#[derive(Debug, Default)]
pub struct LogRenderer {
    out: String,
    depth: usize,
    path: Vec<String>,
}

impl LogRenderer {
    fn line(&mut self) {
        push_indent(&mut self.out, self.depth);
    }

    fn push_path(&mut self) {
        for name in &self.path {
            self.out.push('/');
            self.out.push_str(name);
        }
    }
}

impl Renderer for LogRenderer {
    fn enter_element(&mut self, name: &str) {
        self.path.push(name.to_string());
        self.line();
        self.out.push_str("ENTER element: \"");
        self.out.push_str(name);
        self.out.push_str("\" at ");
        self.push_path();
        self.out.push('\n');
        self.depth += 1;
    }

    fn exit_element(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line();
        self.out.push_str("EXIT element: \"");
        self.out.push_str(name);
        self.out.push_str("\"\n");
        self.path.pop();
    }

    fn attribute(&mut self, name: &str, value: &Scalar) {
        self.line();
        self.out.push_str("ATTRIBUTE: ");
        self.out.push_str(name);
        self.out.push_str(" = ");
        push_value(&mut self.out, value);
        self.out.push('\n');
    }

    fn content(&mut self, value: &Scalar) {
        self.line();
        self.out.push_str("CONTENT: ");
        push_value(&mut self.out, value);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}
