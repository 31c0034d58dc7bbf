//! Phone-like substring detection and masking.

use std::borrow::Cow;

use super::classify::{is_phone_char, is_phone_start};

/// Minimum number of digits for a candidate to count as a phone number.
pub const MIN_PHONE_DIGITS: usize = 5;

/// Number of trailing digits left visible in a masked phone number.
pub const VISIBLE_PHONE_DIGITS: usize = 4;

/// A phone candidate: a greedy run of phone characters trimmed after its last
/// digit. Indices count Unicode scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhoneMatch {
    pub start: usize,
    /// One past the last digit of the candidate.
    pub candidate_end: usize,
    pub digit_count: usize,
}

impl PhoneMatch {
    /// Accounts for the digits in `chars[start..end]`.
    ///
    /// Returns `None` when the span holds no digit at all.
    fn from_span(chars: &[char], start: usize, end: usize) -> Option<Self> {
        let span = &chars[start..end];
        let last_digit = span.iter().rposition(char::is_ascii_digit)?;
        Some(Self {
            start,
            candidate_end: start + last_digit + 1,
            digit_count: span.iter().filter(|c| c.is_ascii_digit()).count(),
        })
    }

    /// Whether the candidate has enough digits to be masked.
    pub fn is_phone(&self) -> bool {
        self.digit_count >= MIN_PHONE_DIGITS
    }
}

/// Masks every phone-like substring in `text`, keeping its last four digits.
///
/// A candidate starts at a digit, `+` or `(`, extends over digits, spaces,
/// `-`, `(`, `)` and `+`, and ends at its last digit. Candidates with fewer
/// than [`MIN_PHONE_DIGITS`] digits are left alone. Separators are never
/// masked. Text without a match is returned borrowed.
///
/// ```
/// use mask_pii::scan::mask_phones;
///
/// assert_eq!(mask_phones("090-1234-5678", '*'), "***-****-5678");
/// assert_eq!(mask_phones("+81 3 1234 5678", '*'), "+** * **** 5678");
/// assert_eq!(mask_phones("1234", '*'), "1234");
/// ```
pub fn mask_phones(text: &str, mask_char: char) -> Cow<'_, str> {
    let chars: Vec<char> = text.chars().collect();
    let mut output: Option<String> = None;
    let mut last = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_phone_start(chars[i]) {
            i += 1;
            continue;
        }

        let end = i + chars[i..].iter().take_while(|&&c| is_phone_char(c)).count();
        let found = match PhoneMatch::from_span(&chars, i, end) {
            Some(found) if found.is_phone() => found,
            // Skip the whole span, not just its first character.
            _ => {
                i = end;
                continue;
            }
        };

        let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
        out.extend(&chars[last..found.start]);
        push_masked_candidate(
            out,
            &chars[found.start..found.candidate_end],
            found.digit_count,
            mask_char,
        );

        last = found.candidate_end;
        i = found.candidate_end;
    }

    match output {
        Some(mut out) => {
            out.extend(&chars[last..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

fn push_masked_candidate(
    out: &mut String,
    candidate: &[char],
    digit_count: usize,
    mask_char: char,
) {
    let masked_digits = digit_count.saturating_sub(VISIBLE_PHONE_DIGITS);
    let mut seen = 0;
    for &c in candidate {
        if c.is_ascii_digit() {
            seen += 1;
            out.push(if seen <= masked_digits { mask_char } else { c });
        } else {
            out.push(c);
        }
    }
}
