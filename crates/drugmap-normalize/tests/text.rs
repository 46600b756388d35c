//! Property tests for text normalization.

use drugmap_normalize::{ENCODING_ARTIFACTS, clean_text, normalize_text};
use proptest::prelude::*;

/// Titles built from words, odd whitespace and the artifacts seen in exports.
fn noisy_title() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[A-Za-z0-9éÉèôñç'(),.-]{1,12}",
        Just("\u{0301}".to_string()),
        Just("İ".to_string()),
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\n  ".to_string()),
        Just("\u{2122}".to_string()),
        Just("\u{0007}".to_string()),
        Just("\\".to_string()),
        Just("\\x".to_string()),
        proptest::sample::select(ENCODING_ARTIFACTS).prop_map(str::to_string),
        proptest::sample::select(ENCODING_ARTIFACTS).prop_map(str::to_uppercase),
    ];
    proptest::collection::vec(fragment, 0..16).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn clean_text_is_idempotent(raw in noisy_title()) {
        let once = clean_text(&raw);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn normalize_text_is_idempotent(raw in noisy_title()) {
        let once = normalize_text(&raw);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn normalize_text_matches_lowercase_clean_text_on_ascii(raw in "[ -~\t\n]{0,40}") {
        prop_assert_eq!(normalize_text(&raw), clean_text(&raw).to_lowercase());
    }

    #[test]
    fn normalize_text_has_no_combining_marks(raw in noisy_title()) {
        let key = normalize_text(&raw);
        prop_assert!(!key.chars().any(unicode_normalization::char::is_combining_mark));
    }

    #[test]
    fn cleaned_text_has_no_artifacts(raw in noisy_title()) {
        let cleaned = normalize_text(&raw);
        for artifact in ENCODING_ARTIFACTS {
            prop_assert!(!cleaned.contains(artifact));
        }
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }

    #[test]
    fn arbitrary_strings_normalize_idempotently(raw in "\\PC{0,40}") {
        let once = normalize_text(&raw);
        prop_assert_eq!(normalize_text(&once), once);
    }
}

#[test]
fn empty_and_blank_inputs_clean_to_empty() {
    assert_eq!(clean_text(""), "");
    assert_eq!(clean_text(" \t\n "), "");
    assert_eq!(normalize_text("\\xc3\\x28"), "");
}

#[test]
fn accented_and_plain_spellings_share_a_key() {
    assert_eq!(normalize_text("Éthanol"), normalize_text("ETHANOL"));
    assert_eq!(clean_text("Éthanol"), "Éthanol");
}

#[test]
fn clean_text_preserves_casing() {
    assert_eq!(
        clean_text(" Journal Of  Emergency "),
        "Journal Of Emergency"
    );
}
