//! Output types for logging boundaries.
//!
//! This module provides types for producing logging-safe output:
//!
//! - [`MaskedOutput`]: The output enum (Text or Json)
//! - [`ToMaskedOutput`]: Trait for types that can produce masked output
//! - [`MaskedText`]: Lazy wrapper that masks a string when formatted
//! - `MaskedJson`: Already-masked JSON value (requires the `json` feature)

use std::fmt;

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

use crate::masker::Masker;

// =============================================================================
// MaskedOutput - Output produced at logging boundaries
// =============================================================================

/// Output produced at a logging boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskedOutput {
    Text(String),
    #[cfg(feature = "json")]
    Json(JsonValue),
}

// =============================================================================
// ToMaskedOutput - Trait for producing logging-safe output
// =============================================================================

/// Produces a logging-safe output representation.
pub trait ToMaskedOutput {
    #[must_use]
    fn to_masked_output(&self) -> MaskedOutput;
}

impl ToMaskedOutput for MaskedOutput {
    fn to_masked_output(&self) -> MaskedOutput {
        self.clone()
    }
}

// =============================================================================
// MaskedText - Lazy masking wrapper for strings
// =============================================================================

/// Borrowed text paired with the masker that masks it.
///
/// `Display` and `Debug` print the masked form; the raw text is never
/// formatted. Obtain one with [`Masker::masked`].
#[derive(Clone, Copy)]
pub struct MaskedText<'a> {
    masker: &'a Masker,
    text: &'a str,
}

impl<'a> MaskedText<'a> {
    pub(crate) fn new(masker: &'a Masker, text: &'a str) -> Self {
        Self { masker, text }
    }

    /// Returns the masked text as an owned string.
    pub fn to_masked_string(&self) -> String {
        self.masker.process(self.text).into_owned()
    }
}

impl fmt::Display for MaskedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masker.process(self.text))
    }
}

impl fmt::Debug for MaskedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.masker.process(self.text), f)
    }
}

impl ToMaskedOutput for MaskedText<'_> {
    fn to_masked_output(&self) -> MaskedOutput {
        MaskedOutput::Text(self.to_masked_string())
    }
}

// =============================================================================
// MaskedJson - Wrapper for masked JSON values
// =============================================================================

/// A JSON value whose string leaves have already been masked.
///
/// Obtain one with `Masker::masked_json`.
#[cfg(feature = "json")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(JsonValue);

#[cfg(feature = "json")]
impl MaskedJson {
    pub(crate) fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Returns the masked value.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    /// Consumes the wrapper and returns the masked value.
    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

#[cfg(feature = "json")]
impl ToMaskedOutput for MaskedJson {
    fn to_masked_output(&self) -> MaskedOutput {
        MaskedOutput::Json(self.0.clone())
    }
}
