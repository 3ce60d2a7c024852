//! Byte cursor with line / column tracking

use crate::error::Pos;

/// Cursor for navigating source text with position tracking
///
/// Columns count characters: UTF-8 continuation bytes do not advance the
/// column.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor over source text
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Current character, decoded
    pub fn current_char(&self) -> Option<char> {
        self.input.get(self.pos..)?.chars().next()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line = self.line.saturating_add(1);
                self.column = 0;
            } else if b & 0xC0 != 0x80 {
                self.column = self.column.saturating_add(1);
            }
        }
    }

    /// Advance cursor by `n` bytes
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Skip whitespace: space, tab, newline, carriage return
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.current() {
            self.advance();
        }
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check whether the upcoming bytes equal `expected`
    pub fn starts_with(&self, expected: &str) -> bool {
        self.input
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(expected))
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.column)
    }

    /// Get current byte index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get text from `start` to the current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(cursor.current(), Some(b'h'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'e'));
        assert_eq!(cursor.position(), Pos::new(1, 1, 1));
    }

    #[test]
    fn test_cursor_whitespace_and_lines() {
        let mut cursor = Cursor::new("  \t\n  hello");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), Some(b'h'));
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_cursor_counts_characters_not_bytes() {
        let mut cursor = Cursor::new("éx");
        assert_eq!(cursor.current_char(), Some('é'));
        cursor.advance_by(2);
        assert_eq!(cursor.current_char(), Some('x'));
        assert_eq!(cursor.position().column, 1);
        assert_eq!(cursor.position().offset, 2);
    }

    #[test]
    fn test_cursor_eof() {
        let cursor = Cursor::new("");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.current_char(), None);
    }

    #[test]
    fn test_cursor_slice() {
        let mut cursor = Cursor::new("hello world");
        let start = cursor.pos();
        cursor.advance_by(3);
        assert_eq!(cursor.slice_from(start), "hel");
        assert!(cursor.starts_with("lo w"));
    }

    #[test]
    fn test_cursor_consume() {
        let mut cursor = Cursor::new("abc");
        assert!(cursor.consume(b'a'));
        assert!(!cursor.consume(b'z'));
        assert_eq!(cursor.current(), Some(b'b'));
    }
}
