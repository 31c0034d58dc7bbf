//! Heuristic masking of email addresses and phone numbers in free text.
//!
//! This crate separates:
//! - **Scanners**: single-pass detectors that find email-like and phone-like
//!   substrings and mask them in place (see [`scan`]).
//! - **The masker**: a small configuration object that enables scanners and
//!   applies them in a fixed order (emails first, then phones).
//!
//! What this crate does:
//! - masks the local part of email-like substrings, keeping the first
//!   character, the `@` and the domain visible
//! - masks all but the last four digits of phone-like substrings
//! - leaves every other character, including non-ASCII text, untouched
//! - provides logging adapters behind feature flags (`slog`, `tracing`)
//!
//! What it does not do:
//! - implement RFC 5322 or E.164 grammars
//! - detect any other class of PII
//! - perform I/O or logging on its own
//!
//! # Example
//!
//! ```rust
//! use mask_pii::Masker;
//!
//! let masker = Masker::new().mask_emails().mask_phones().with_mask_char('#');
//! assert_eq!(
//!     masker.process("Contact: alice@example.com or 090-1234-5678."),
//!     "Contact: a####@example.com or ###-####-5678."
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod config;
#[cfg(feature = "json")]
mod json;
mod masker;
mod output;
pub mod scan;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use config::{MASK_CHAR, MaskerConfig, resolve_mask_char};
pub use masker::Masker;
#[cfg(feature = "json")]
pub use output::MaskedJson;
pub use output::{MaskedOutput, MaskedText, ToMaskedOutput};
#[cfg(feature = "slog")]
pub use slog::SlogMasked;
#[cfg(feature = "tracing")]
pub use tracing::{TracingMasked, TracingMaskedExt};
