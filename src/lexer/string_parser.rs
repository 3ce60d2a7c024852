use super::Cursor;
use crate::error::{SyntaxError, SyntaxErrorKind};

/// Scan a string literal and return its raw text between the quotes.
///
/// Escapes are checked but not decoded. `\u` only needs to be followed by
/// ordinary string characters here; short or malformed hex runs are left for
/// [`decode`] to pass through.
pub(crate) fn scan_string<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, SyntaxError> {
    let open = cursor.position();
    cursor.advance(); // opening quote
    let start = cursor.pos();

    loop {
        match cursor.current() {
            None => {
                return Err(SyntaxError::new(SyntaxErrorKind::UnterminatedString, open));
            }
            Some(b'"') => {
                let raw = cursor.slice_from(start);
                cursor.advance();
                return Ok(raw);
            }
            Some(b'\\') => {
                cursor.advance();
                match cursor.current_char() {
                    Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u') => cursor.advance(),
                    Some(other) => {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::InvalidEscape(other),
                            cursor.position(),
                        ));
                    }
                    None => {
                        return Err(SyntaxError::new(SyntaxErrorKind::UnterminatedString, open));
                    }
                }
            }
            Some(b) if b < 0x20 => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::ControlCharacter,
                    cursor.position(),
                ));
            }
            Some(_) => cursor.advance(),
        }
    }
}

/// Decode the escapes of raw string text produced by [`scan_string`].
pub(crate) fn decode(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_owned();
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\x08'),
            Some('f') => result.push('\x0C'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => {
                let rest = chars.as_str();
                match hex4(rest) {
                    Some(unit) => {
                        let (decoded, consumed) = decode_utf16_unit(unit, rest);
                        result.push(decoded);
                        chars = rest.get(consumed..).unwrap_or_default().chars();
                    }
                    // Malformed escape: keep it verbatim
                    None => result.push_str("\\u"),
                }
            }
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Parse exactly four hex digits at the start of `s`
fn hex4(s: &str) -> Option<u32> {
    let digits = s.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Turn one UTF-16 code unit (and possibly a following `\uXXXX` low
/// surrogate) into a char. Returns the char and how many bytes of `rest`
/// were used, counting the four hex digits of `unit`.
fn decode_utf16_unit(unit: u32, rest: &str) -> (char, usize) {
    if (0xD800..=0xDBFF).contains(&unit) {
        let low = rest
            .get(4..)
            .and_then(|tail| tail.strip_prefix("\\u"))
            .and_then(hex4)
            .filter(|low| (0xDC00..=0xDFFF).contains(low));
        if let Some(low) = low {
            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            let decoded = char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
            return (decoded, 10);
        }
    }
    (
        char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER),
        4,
    )
}
