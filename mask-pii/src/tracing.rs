//! Adapters for emitting masked values through `tracing`.
//!
//! `TracingMaskedExt` turns any masking adapter into a `tracing` display
//! value. The masked form is computed once, when the field is recorded.
//!
//! # Example
//!
//! ```ignore
//! use mask_pii::{Masker, tracing::TracingMaskedExt};
//!
//! let masker = Masker::new().mask_emails().mask_phones();
//! tracing::info!(body = masker.masked(&body).tracing_masked(), "inbound message");
//! ```

use tracing::field::{DisplayValue, display};

#[cfg(feature = "json")]
use crate::output::MaskedJson;
use crate::output::{MaskedOutput, MaskedText, ToMaskedOutput};

/// Marker trait for types whose `tracing` integration always emits masked output.
///
/// This trait is implemented only for the masking adapters. It is not a
/// blanket impl for raw strings.
pub trait TracingMasked {}

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Masks the value and wraps it as a `tracing` display value.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T> TracingMaskedExt for T
where
    T: ToMaskedOutput,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        let text = match self.to_masked_output() {
            MaskedOutput::Text(text) => text,
            #[cfg(feature = "json")]
            MaskedOutput::Json(json) => json.to_string(),
        };
        display(text)
    }
}

impl TracingMasked for MaskedOutput {}

impl TracingMasked for MaskedText<'_> {}

#[cfg(feature = "json")]
impl TracingMasked for MaskedJson {}
