//! Structural validation of email domains.

use super::classify::is_label_char;

/// Returns `true` when `domain` looks like a routable domain name.
///
/// The check is structural only:
/// - at least two dot-separated labels, none empty
/// - no label starts or ends with `-`
/// - labels contain only ASCII letters, digits and `-`
/// - the last label (TLD) is at least two ASCII letters
///
/// ```
/// use mask_pii::scan::is_valid_domain;
///
/// assert!(is_valid_domain("example.co.jp"));
/// assert!(!is_valid_domain("localhost"));
/// assert!(!is_valid_domain("example.c0m"));
/// ```
pub fn is_valid_domain(domain: &str) -> bool {
    let chars: Vec<char> = domain.chars().collect();
    is_valid_domain_chars(&chars)
}

/// Slice form of [`is_valid_domain`] used by the email scanner.
pub(crate) fn is_valid_domain_chars(domain: &[char]) -> bool {
    if domain.first().is_none_or(|&c| c == '.') || domain.last() == Some(&'.') {
        return false;
    }

    let labels: Vec<&[char]> = domain.split(|&c| c == '.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.iter().all(char::is_ascii_alphabetic))
}

fn is_valid_label(label: &[char]) -> bool {
    match (label.first(), label.last()) {
        (Some(&first), Some(&last)) => {
            first != '-' && last != '-' && label.iter().all(|&c| is_label_char(c))
        }
        _ => false,
    }
}
