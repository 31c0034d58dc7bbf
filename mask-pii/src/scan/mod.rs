//! Single-pass scanners for email-like and phone-like substrings.
//!
//! This module provides:
//!
//! - **Email scanning** (`email`): `@`-anchored candidates whose local part is
//!   masked after the first character and whose domain passes
//!   [`is_valid_domain`].
//!
//! - **Phone scanning** (`phone`): runs of digits and separators holding at
//!   least five digits, masked except for the last four digits.
//!
//! Both scanners index by Unicode scalar value, substitute characters one for
//! one and return [`Cow::Borrowed`](std::borrow::Cow::Borrowed) when the text
//! contains nothing to mask.
//!
//! # Example
//!
//! ```rust
//! use mask_pii::scan::{mask_emails, mask_phones};
//!
//! assert_eq!(mask_emails("mail bob@example.org", '*'), "mail b**@example.org");
//! assert_eq!(mask_phones("call (555) 123-4567", '*'), "call (***) ***-4567");
//! ```

mod classify;
pub mod domain;
pub mod email;
pub mod phone;

pub use domain::is_valid_domain;
pub use email::{EmailMatch, mask_emails};
pub use phone::{MIN_PHONE_DIGITS, PhoneMatch, VISIBLE_PHONE_DIGITS, mask_phones};
