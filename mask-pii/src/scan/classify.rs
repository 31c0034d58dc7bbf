//! Character classes used by the scanners.
//!
//! All classes are ASCII-only; every other code point is outside every class
//! and passes through the scanners unexamined.

/// Characters allowed in the local part of an email.
pub(crate) fn is_local_char(c: char) -> bool {
    matches!(
        c,
        'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '%' | '+' | '-'
    )
}

/// Characters allowed in the greedy domain span of an email.
pub(crate) fn is_domain_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '.')
}

/// Characters allowed inside a domain label.
pub(crate) fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Characters that may open a phone candidate.
pub(crate) fn is_phone_start(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '(')
}

/// Characters that may appear inside a phone candidate.
pub(crate) fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+')
}
