//! Masker configuration.
//!
//! [`MaskerConfig`] is a plain value: which categories are enabled and which
//! character replaces sensitive characters. With the `serde` feature it can be
//! loaded from any serde format; the mask character then follows the same
//! rule as [`Masker::with_mask_str`](crate::Masker::with_mask_str).

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Resolves an optional textual mask argument to a single code point.
///
/// Absent or empty values fall back to [`MASK_CHAR`]. Longer values are
/// truncated to their first Unicode scalar value; a combining sequence keeps
/// only its base code point.
///
/// ```
/// use mask_pii::resolve_mask_char;
///
/// assert_eq!(resolve_mask_char(None), '*');
/// assert_eq!(resolve_mask_char(Some("")), '*');
/// assert_eq!(resolve_mask_char(Some("#!")), '#');
/// ```
pub fn resolve_mask_char(value: Option<&str>) -> char {
    value.and_then(|v| v.chars().next()).unwrap_or(MASK_CHAR)
}

/// Which categories a [`Masker`](crate::Masker) masks, and with what.
///
/// The default enables nothing and masks with [`MASK_CHAR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskerConfig {
    /// Mask email-like substrings.
    pub mask_emails: bool,
    /// Mask phone-like substrings.
    pub mask_phones: bool,
    /// Replacement for masked characters.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_mask_char"))]
    pub mask_char: char,
}

impl MaskerConfig {
    /// Returns `true` when at least one category is enabled.
    pub fn is_enabled(&self) -> bool {
        self.mask_emails || self.mask_phones
    }
}

impl std::default::Default for MaskerConfig {
    fn default() -> Self {
        Self {
            mask_emails: false,
            mask_phones: false,
            mask_char: MASK_CHAR,
        }
    }
}

#[cfg(feature = "serde")]
fn deserialize_mask_char<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(resolve_mask_char(value.as_deref()))
}
