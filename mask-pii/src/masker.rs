//! The masker: enabled categories plus the order they are applied in.

use std::borrow::Cow;

use crate::{
    config::{MaskerConfig, resolve_mask_char},
    output::MaskedText,
    scan::{mask_emails, mask_phones},
};

/// A configurable masker for email addresses and phone numbers.
///
/// Build it with the fluent methods, then call [`Masker::process`]. A masker
/// only reads its configuration while processing, so a finished masker can be
/// shared across threads.
///
/// ```
/// use mask_pii::Masker;
///
/// let masker = Masker::new().mask_emails();
/// assert_eq!(masker.process("alice@example.com"), "a****@example.com");
///
/// let masker = Masker::new().mask_phones().with_mask_str(Some("#"));
/// assert_eq!(masker.process("090-1234-5678"), "###-####-5678");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Masker {
    config: MaskerConfig,
}

impl Masker {
    /// Creates a masker with every category disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a masker from an existing configuration.
    #[must_use]
    pub fn from_config(config: MaskerConfig) -> Self {
        Self { config }
    }

    /// Enables email address masking.
    #[must_use]
    pub fn mask_emails(mut self) -> Self {
        self.config.mask_emails = true;
        self
    }

    /// Enables phone number masking.
    #[must_use]
    pub fn mask_phones(mut self) -> Self {
        self.config.mask_phones = true;
        self
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.config.mask_char = mask_char;
        self
    }

    /// Sets the masking character from optional text.
    ///
    /// `None` or an empty string restores the default `*`; otherwise only the
    /// first Unicode scalar value is used. See [`resolve_mask_char`].
    #[must_use]
    pub fn with_mask_str(self, value: Option<&str>) -> Self {
        self.with_mask_char(resolve_mask_char(value))
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &MaskerConfig {
        &self.config
    }

    /// The character that replaces masked characters.
    pub fn mask_char(&self) -> char {
        self.config.mask_char
    }

    /// Masks every enabled category in `text`.
    ///
    /// Emails are masked first and phone numbers are then scanned in the
    /// result. The output always has as many Unicode scalar values as the
    /// input. When nothing is enabled or nothing matched, `text` is returned
    /// borrowed.
    pub fn process<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut result = Cow::Borrowed(text);
        if !self.config.is_enabled() {
            return result;
        }
        if self.config.mask_emails {
            result = rescan(result, self.config.mask_char, mask_emails);
        }
        if self.config.mask_phones {
            result = rescan(result, self.config.mask_char, mask_phones);
        }
        result
    }

    /// Wraps `text` so that formatting it prints the masked form.
    ///
    /// Masking happens each time the wrapper is formatted.
    pub fn masked<'a>(&'a self, text: &'a str) -> MaskedText<'a> {
        MaskedText::new(self, text)
    }
}

impl From<MaskerConfig> for Masker {
    fn from(config: MaskerConfig) -> Self {
        Self::from_config(config)
    }
}

/// Runs `scan` over text that may already be owned, keeping it borrowed when
/// no pass has changed anything.
fn rescan<'a>(
    text: Cow<'a, str>,
    mask_char: char,
    scan: fn(&str, char) -> Cow<'_, str>,
) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(text) => scan(text, mask_char),
        Cow::Owned(text) => {
            let masked = match scan(&text, mask_char) {
                Cow::Owned(masked) => Some(masked),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(masked.unwrap_or(text))
        }
    }
}
