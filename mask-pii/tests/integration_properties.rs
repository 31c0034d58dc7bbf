//! Property tests for the masking invariants.

use mask_pii::Masker;
use proptest::prelude::*;

fn any_masker() -> impl Strategy<Value = Masker> {
    (any::<bool>(), any::<bool>(), any::<char>()).prop_map(|(emails, phones, mask_char)| {
        let mut masker = Masker::new().with_mask_char(mask_char);
        if emails {
            masker = masker.mask_emails();
        }
        if phones {
            masker = masker.mask_phones();
        }
        masker
    })
}

/// Text mixing plain words, email-ish and phone-ish fragments and non-ASCII.
fn noisy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ._%+()@-]{0,12}",
            "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{2,4}",
            "\\+?[0-9]{1,4}([ -][0-9]{1,4}){0,3}",
            "[é連📞ü ]{0,4}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn disabled_masker_is_identity(text in any::<String>()) {
        prop_assert_eq!(Masker::new().process(&text), text.as_str());
    }

    #[test]
    fn output_has_input_length(masker in any_masker(), text in noisy_text()) {
        let output = masker.process(&text);
        prop_assert_eq!(output.chars().count(), text.chars().count());
    }

    #[test]
    fn arbitrary_text_keeps_its_length(text in any::<String>()) {
        let masker = Masker::new().mask_emails().mask_phones();
        prop_assert_eq!(masker.process(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn text_without_triggers_is_unchanged(
        masker in any_masker(),
        text in "[^@0-9]{0,48}",
    ) {
        prop_assert_eq!(masker.process(&text), text.as_str());
    }

    #[test]
    fn short_digit_runs_are_unchanged(
        prefix in "[a-z ]{0,10}",
        digits in "[0-9]{0,4}",
        suffix in "[a-z ]{0,10}",
    ) {
        let text = format!("{prefix}{digits}{suffix}");
        let masker = Masker::new().mask_emails().mask_phones();
        prop_assert_eq!(masker.process(&text), text.as_str());
    }

    #[test]
    fn email_keeps_domain_and_first_char(
        local in "[a-zA-Z0-9._%+-]{1,12}",
        domain in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}\\.[a-z]{2,5}",
    ) {
        let text = format!("{local}@{domain}");
        let output = Masker::new().mask_emails().process(&text).into_owned();

        let local_len = local.chars().count();
        let expected_local = if local_len > 1 {
            let first = local.chars().next().unwrap_or('*');
            format!("{first}{}", "*".repeat(local_len - 1))
        } else {
            "*".to_string()
        };
        prop_assert_eq!(output, format!("{expected_local}@{domain}"));
    }

    #[test]
    fn phone_keeps_last_four_digits(
        groups in prop::collection::vec("[0-9]{1,4}", 1..5),
        separator in "[ -]",
    ) {
        let text = groups.join(separator.as_str());
        let output = Masker::new().mask_phones().process(&text).into_owned();

        let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
        let masked = output.chars().filter(|&c| c == '*').count();
        let kept: Vec<char> = output.chars().filter(char::is_ascii_digit).collect();

        if digits.len() >= 5 {
            prop_assert_eq!(masked, digits.len() - 4);
            prop_assert_eq!(&kept[..], &digits[digits.len() - 4..]);
        } else {
            prop_assert_eq!(output.as_str(), text.as_str());
        }

        // Separators stay where they were.
        for (before, after) in text.chars().zip(output.chars()) {
            if !before.is_ascii_digit() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn emails_are_masked_before_phones(
        local in "[a-z]{2,8}",
        digits in "[0-9]{5,10}",
    ) {
        let text = format!("{local}@example.com {digits}");
        let both = Masker::new().mask_emails().mask_phones().process(&text).into_owned();
        let emails_only = Masker::new().mask_emails().process(&text).into_owned();
        let then_phones = Masker::new().mask_phones().process(&emails_only).into_owned();
        prop_assert_eq!(both, then_phones);
    }
}
