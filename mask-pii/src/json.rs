//! `serde_json::Value` support.
//!
//! String leaves are masked wherever they appear (object values, array
//! elements, nested arbitrarily deep). Object keys are structure, not content,
//! and are left as they are. Numbers are not text and are never scanned, so a
//! phone number stored as a JSON number passes through unchanged.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

use crate::{masker::Masker, output::MaskedJson};

impl Masker {
    /// Masks every string leaf of `value`.
    ///
    /// ```
    /// use mask_pii::Masker;
    /// use serde_json::json;
    ///
    /// let masker = Masker::new().mask_emails().mask_phones();
    /// let masked = masker.process_json(json!({
    ///     "contact": "alice@example.com",
    ///     "phones": ["090-1234-5678"],
    ///     "id": 1234567,
    /// }));
    /// assert_eq!(masked, json!({
    ///     "contact": "a****@example.com",
    ///     "phones": ["***-****-5678"],
    ///     "id": 1234567,
    /// }));
    /// ```
    #[must_use]
    pub fn process_json(&self, value: JsonValue) -> JsonValue {
        match value {
            JsonValue::String(text) => JsonValue::String(self.process_owned(text)),
            JsonValue::Array(items) => {
                JsonValue::Array(items.into_iter().map(|v| self.process_json(v)).collect())
            }
            JsonValue::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, self.process_json(v)))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Masks a copy of `value` for structured logging.
    pub fn masked_json(&self, value: &JsonValue) -> MaskedJson {
        MaskedJson::new(self.process_json(value.clone()))
    }

    fn process_owned(&self, text: String) -> String {
        let masked = match self.process(&text) {
            Cow::Owned(masked) => Some(masked),
            Cow::Borrowed(_) => None,
        };
        masked.unwrap_or(text)
    }
}
