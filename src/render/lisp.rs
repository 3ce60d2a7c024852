use super::{push_indent, push_value, Renderer};
use crate::document::Scalar;

/// S-expression rendering
///
/// ```text
/// (element "a"
///   (attrs (id "1"))
///   (content "t")
///   (element "b"))
/// ```
///
/// Nested items open on a new line; closing parens stay on the line of the
/// last item. The root's closing paren ends the output with a newline.
#[derive(Debug, Default)]
pub struct LispRenderer {
    out: String,
    depth: usize,
}

impl LispRenderer {
    fn newline(&mut self) {
        self.out.push('\n');
        push_indent(&mut self.out, self.depth);
    }
}

impl Renderer for LispRenderer {
    fn enter_element(&mut self, name: &str) {
        if self.depth > 0 {
            self.newline();
        }
        self.out.push_str("(element \"");
        self.out.push_str(name);
        self.out.push('"');
        self.depth += 1;
    }

    fn exit_element(&mut self, _name: &str) {
        self.out.push(')');
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.out.push('\n');
        }
    }

    fn enter_attributes(&mut self) {
        self.newline();
        self.out.push_str("(attrs");
    }

    fn exit_attributes(&mut self) {
        self.out.push(')');
    }

    fn attribute(&mut self, name: &str, value: &Scalar) {
        self.out.push_str(" (");
        self.out.push_str(name);
        self.out.push(' ');
        push_value(&mut self.out, value);
        self.out.push(')');
    }

    fn content(&mut self, value: &Scalar) {
        self.newline();
        self.out.push_str("(content ");
        push_value(&mut self.out, value);
        self.out.push(')');
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{render, Format};
    use crate::{Document, SyntaxError};

    fn lisp(input: &str) -> Result<String, SyntaxError> {
        Ok(render(&input.parse::<Document>()?, Format::Lisp))
    }

    #[test]
    fn test_single_element() -> Result<(), SyntaxError> {
        assert_eq!(lisp(r#"["x"]"#)?, "(element \"x\")\n");
        Ok(())
    }

    #[test]
    fn test_nested_document() -> Result<(), SyntaxError> {
        let expected = "\
(element \"a\"
  (attrs (id \"1\") (n 2))
  (content \"t\")
  (element \"b\"
    (content true)))
";
        assert_eq!(
            lisp(r#"["a", {"id": "1", "n": 2}, "t", ["b", true]]"#)?,
            expected
        );
        Ok(())
    }

    #[test]
    fn test_empty_attributes() -> Result<(), SyntaxError> {
        assert_eq!(lisp(r#"["a", {}]"#)?, "(element \"a\"\n  (attrs))\n");
        Ok(())
    }
}
