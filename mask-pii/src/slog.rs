//! Adapters for emitting masked values through `slog`.
//!
//! This module provides `slog::Value` implementations for the masking
//! wrappers so that text reaches a drain only after it has been masked:
//!
//! ```ignore
//! use mask_pii::Masker;
//!
//! let masker = Masker::new().mask_emails().mask_phones();
//! info!(logger, "inbound message"; "body" => masker.masked(&body));
//! info!(logger, "payload"; "json" => masker.masked_json(&payload));
//! ```
//!
//! Text is emitted with `emit_str`; JSON is emitted as a nested value via
//! `slog`'s `nested-values` support. It does not configure `slog`.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::output::{MaskedJson, MaskedOutput, MaskedText, ToMaskedOutput};

/// Marker trait for types whose `slog` integration always emits masked output.
///
/// This trait is implemented only for the masking adapters. It is not a
/// blanket impl for raw strings.
///
/// ```compile_fail
/// use mask_pii::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

fn emit_output(
    output: &MaskedOutput,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    match output {
        MaskedOutput::Text(text) => serializer.emit_str(key, text),
        MaskedOutput::Json(json) => {
            let nested = slog::Serde(json.clone());
            SlogValue::serialize(&nested, record, key, serializer)
        }
    }
}

impl SlogValue for MaskedOutput {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(self, record, key, serializer)
    }
}

impl SlogMasked for MaskedOutput {}

impl SlogValue for MaskedText<'_> {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(&self.to_masked_output(), record, key, serializer)
    }
}

impl SlogMasked for MaskedText<'_> {}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}
