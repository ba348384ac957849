//! Identifier rules shared by descriptors and names.

/// `[_$a-zA-Z][_$a-zA-Z0-9]*`
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if is_ident_start(first) => bytes.all(is_ident_continue),
        _ => false,
    }
}

/// One or more identifiers joined by `separator`.
pub(crate) fn is_qualified(s: &str, separator: char) -> bool {
    s.split(separator).all(is_identifier)
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b == b'_' || b == b'$' || b.is_ascii_alphabetic()
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}
