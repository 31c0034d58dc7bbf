//! Integration tests for serde configuration loading and JSON masking.
//!
//! These tests verify that:
//! - `MaskerConfig` loads from JSON with defaults for missing fields
//! - the mask character in a config follows the same truncation rule as
//!   `Masker::with_mask_str`
//! - `Masker::process_json` masks string leaves only

#![cfg(feature = "json")]

use mask_pii::{MASK_CHAR, Masker, MaskerConfig};
use serde_json::json;

mod config {
    use super::*;

    #[test]
    fn empty_object_yields_default_config() {
        let config: MaskerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MaskerConfig::default());
    }

    #[test]
    fn loads_full_config() {
        let config: MaskerConfig = serde_json::from_value(json!({
            "mask_emails": true,
            "mask_phones": true,
            "mask_char": "#",
        }))
        .unwrap();

        let masker = Masker::from_config(config);
        assert_eq!(
            masker.process("Contact: alice@example.com or 090-1234-5678."),
            "Contact: a####@example.com or ###-####-5678."
        );
    }

    #[test]
    fn mask_char_is_truncated_to_first_code_point() {
        let config: MaskerConfig =
            serde_json::from_value(json!({ "mask_char": "xyz" })).unwrap();
        assert_eq!(config.mask_char, 'x');
    }

    #[test]
    fn empty_or_null_mask_char_uses_default() {
        let config: MaskerConfig = serde_json::from_value(json!({ "mask_char": "" })).unwrap();
        assert_eq!(config.mask_char, MASK_CHAR);

        let config: MaskerConfig =
            serde_json::from_value(json!({ "mask_char": null })).unwrap();
        assert_eq!(config.mask_char, MASK_CHAR);
    }

    #[test]
    fn rejects_wrong_field_types() {
        let result = serde_json::from_value::<MaskerConfig>(json!({ "mask_emails": "yes" }));
        assert!(result.is_err());

        let result = serde_json::from_value::<MaskerConfig>(json!({ "mask_char": 42 }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_mask_char_as_string() {
        let config = *Masker::new().mask_phones().with_mask_char('#').config();
        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({
                "mask_emails": false,
                "mask_phones": true,
                "mask_char": "#",
            })
        );
    }
}

mod process_json {
    use super::*;

    #[test]
    fn masks_strings_in_nested_payload() {
        let masker = Masker::new().mask_emails().mask_phones();
        let payload = json!({
            "ticket": 4821,
            "reporter": {
                "email": "carol@example.net",
                "phone": "+1 (800) 123-4567",
            },
            "comments": [
                "Call me at 090-1234-5678",
                "No PII here",
            ],
        });

        assert_eq!(
            masker.process_json(payload),
            json!({
                "ticket": 4821,
                "reporter": {
                    "email": "c****@example.net",
                    "phone": "+* (***) ***-4567",
                },
                "comments": [
                    "Call me at ***-****-5678",
                    "No PII here",
                ],
            })
        );
    }

    #[test]
    fn disabled_masker_returns_payload_unchanged() {
        let payload = json!({ "email": "carol@example.net", "n": [1, 2, 3] });
        assert_eq!(Masker::new().process_json(payload.clone()), payload);
    }
}
