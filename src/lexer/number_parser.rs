use super::Cursor;
use crate::error::{SyntaxError, SyntaxErrorKind};

/// Scan `-?[0-9]+('.'[0-9]+)?([eE][+-]?[0-9]+)?` and return the raw text.
///
/// The value is never converted; numbers are only ever redisplayed.
pub(crate) fn scan_number<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, SyntaxError> {
    let start = cursor.pos();

    // Optional minus sign
    cursor.consume(b'-');

    // Integer part
    expect_digits(cursor)?;

    // Optional fraction part
    if cursor.current() == Some(b'.') {
        cursor.advance();
        expect_digits(cursor)?;
    }

    // Optional exponent part
    if matches!(cursor.current(), Some(b'e' | b'E')) {
        cursor.advance();
        if matches!(cursor.current(), Some(b'+' | b'-')) {
            cursor.advance();
        }
        expect_digits(cursor)?;
    }

    Ok(cursor.slice_from(start))
}

fn expect_digits(cursor: &mut Cursor<'_>) -> Result<(), SyntaxError> {
    if !matches!(cursor.current(), Some(b'0'..=b'9')) {
        return Err(SyntaxError::new(
            SyntaxErrorKind::InvalidNumber,
            cursor.position(),
        ));
    }
    while let Some(b'0'..=b'9') = cursor.current() {
        cursor.advance();
    }
    Ok(())
}
