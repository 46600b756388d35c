//! Free-text cleanup.
//!
//! Source exports carry mis-decoded UTF-8 written out as literal escape text
//! (for example `\xc3\x28`), stray trademark signs and uneven whitespace. The
//! cleanup below removes those and nothing else, so titles keep their wording.
//! Accents are only folded in the matching key, never in the display copy.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Escaped byte sequences left behind by broken encoders.
///
/// Matched ASCII-case-insensitively.
pub const ENCODING_ARTIFACTS: &[&str] = &["\\xc3\\x28", "\\xc3\\xb1", "\\xe2\\x84\\xa2"];

/// Single characters dropped from every field.
const STRAY_CHARS: &[char] = &['\u{2122}', '\u{FFFD}'];

/// Returns the display copy of a text field.
///
/// Control characters and encoding artifacts are removed, whitespace runs are
/// collapsed to one space and the ends are trimmed. Casing is preserved.
///
/// Idempotent: `clean_text(&clean_text(s)) == clean_text(s)`.
pub fn clean_text(value: &str) -> String {
    let visible: String = value
        .chars()
        .filter(|c| c.is_whitespace() || !c.is_control())
        .filter(|c| !STRAY_CHARS.contains(c))
        .collect();
    let stripped = strip_artifacts(visible);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the matching key of a text field: [`clean_text`] lower-cased with
/// accents removed, so `Éthanol` and `ethanol` share a key.
///
/// Idempotent: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(value: &str) -> String {
    // Folding runs before cleanup: dropping a mark can splice an artifact.
    clean_text(&fold_accents(&value.to_lowercase()))
}

/// Canonical decomposition with the combining marks dropped.
fn fold_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Removes artifacts until none remain; a removal can splice a new one together.
fn strip_artifacts(mut text: String) -> String {
    loop {
        let mut changed = false;
        for artifact in ENCODING_ARTIFACTS {
            while let Some(pos) = find_ignore_ascii_case(&text, artifact) {
                text.replace_range(pos..pos + artifact.len(), "");
                changed = true;
            }
        }
        if !changed {
            return text;
        }
    }
}

// Needles are ASCII, so a match always starts on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
