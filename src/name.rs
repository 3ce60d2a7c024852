//! XML 1.0 `Name` production
//!
//! Only the Basic Multilingual Plane ranges are listed, so characters above
//! U+FFFF are never part of a valid name.

/// Returns `true` if `s` is a valid XML Name.
///
/// ```
/// use unity_notation::is_valid_name;
///
/// assert!(is_valid_name("svg:rect"));
/// assert!(is_valid_name("_private-1.2"));
/// assert!(!is_valid_name("123"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// `NameStartChar`
pub const fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':'
        | 'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
    )
}

/// `NameChar`
pub const fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-'
            | '.'
            | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}'
        )
}
