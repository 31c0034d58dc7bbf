//! Email-like substring detection and masking.

use std::borrow::Cow;

use super::{
    classify::{is_domain_char, is_local_char},
    domain::is_valid_domain_chars,
};

/// Location of an email-like substring, as half-open ranges of Unicode scalar
/// value indices into the scanned text.
///
/// `local_start < local_end` and `domain_start < domain_end` always hold; the
/// domain is the longest prefix of the greedily scanned domain characters that
/// passes [`is_valid_domain`](super::is_valid_domain).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailMatch {
    pub local_start: usize,
    pub local_end: usize,
    pub domain_start: usize,
    pub domain_end: usize,
}

impl EmailMatch {
    /// Tries to build a match around the `@` at index `at`.
    ///
    /// The local part never extends left of `floor`, the end of the previous
    /// match.
    fn at(chars: &[char], floor: usize, at: usize) -> Option<Self> {
        let local_len = chars[floor..at]
            .iter()
            .rev()
            .take_while(|&&c| is_local_char(c))
            .count();
        if local_len == 0 {
            return None;
        }

        let domain_start = at + 1;
        let greedy_end = domain_start
            + chars[domain_start..]
                .iter()
                .take_while(|&&c| is_domain_char(c))
                .count();

        // Shrink from the right until the domain validates.
        let domain_end = ((domain_start + 1)..=greedy_end)
            .rev()
            .find(|&end| is_valid_domain_chars(&chars[domain_start..end]))?;

        Some(Self {
            local_start: at - local_len,
            local_end: at,
            domain_start,
            domain_end,
        })
    }

    /// Number of scalar values in the local part.
    pub fn local_len(&self) -> usize {
        self.local_end - self.local_start
    }
}

/// Masks the local part of every email-like substring in `text`.
///
/// The first character of a local part stays visible and the rest becomes
/// `mask_char`; a single-character local part is masked entirely. The `@` and
/// the domain are copied unchanged. Text without a match is returned borrowed.
///
/// ```
/// use mask_pii::scan::mask_emails;
///
/// assert_eq!(mask_emails("alice@example.com", '*'), "a****@example.com");
/// assert_eq!(mask_emails("a@b.com", '*'), "*@b.com");
/// assert_eq!(mask_emails("alice@example", '*'), "alice@example");
/// ```
pub fn mask_emails(text: &str, mask_char: char) -> Cow<'_, str> {
    let chars: Vec<char> = text.chars().collect();
    let mut output: Option<String> = None;
    let mut last = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '@' {
            i += 1;
            continue;
        }
        let Some(found) = EmailMatch::at(&chars, last, i) else {
            i += 1;
            continue;
        };

        let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
        out.extend(&chars[last..found.local_start]);
        push_masked_local(out, &chars[found.local_start..found.local_end], mask_char);
        out.push('@');
        out.extend(&chars[found.domain_start..found.domain_end]);

        last = found.domain_end;
        i = found.domain_end;
    }

    match output {
        Some(mut out) => {
            out.extend(&chars[last..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

fn push_masked_local(out: &mut String, local: &[char], mask_char: char) {
    match local {
        [first, rest @ ..] if !rest.is_empty() => {
            out.push(*first);
            out.extend(std::iter::repeat_n(mask_char, rest.len()));
        }
        _ => out.push(mask_char),
    }
}
