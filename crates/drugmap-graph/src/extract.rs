//! Drug name detection in publication titles.
//!
//! Matching is plain substring containment on normalized text. It is not
//! tokenized: `aspirin` is found inside `hyperaspirined`. Names shorter than
//! [`ExtractOptions::min_name_len`] are never searched for.

use tracing::debug;

use drugmap_model::{Drug, Mention, Publication};
use drugmap_normalize::normalize_text;

/// Shortest normalized drug name, in characters, that is searched for.
pub const DEFAULT_MIN_NAME_LEN: usize = 3;

/// Tuning for [`extract_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Names with fewer characters never match. Values below 1 act as 1.
    pub min_name_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_name_len: DEFAULT_MIN_NAME_LEN,
        }
    }
}

impl ExtractOptions {
    #[must_use]
    pub fn with_min_name_len(mut self, min_name_len: usize) -> Self {
        self.min_name_len = min_name_len;
        self
    }
}

/// Extracts mentions with the default options.
pub fn extract<'a>(drugs: &'a [Drug], publications: &'a [Publication]) -> Vec<Mention<'a>> {
    extract_with_options(drugs, publications, ExtractOptions::default())
}

/// Emits one mention per (publication, drug) pair whose normalized drug name
/// occurs in the normalized title.
///
/// Output order is publication-major, drug-minor, both in input order.
/// Publications without a date still match.
pub fn extract_with_options<'a>(
    drugs: &'a [Drug],
    publications: &'a [Publication],
    options: ExtractOptions,
) -> Vec<Mention<'a>> {
    let min_name_len = options.min_name_len.max(1);
    let drug_keys: Vec<(&'a Drug, String)> = drugs
        .iter()
        .map(|drug| (drug, normalize_text(&drug.name)))
        .filter(|(_, key)| key.chars().count() >= min_name_len)
        .collect();

    let mut mentions = Vec::new();
    for publication in publications {
        let title = normalize_text(publication.title());
        if title.is_empty() {
            continue;
        }
        for (drug, key) in &drug_keys {
            if title.contains(key.as_str()) {
                mentions.push(Mention::new(*drug, publication));
            }
        }
    }

    debug!(
        drugs = drugs.len(),
        searchable_drugs = drug_keys.len(),
        publications = publications.len(),
        mentions = mentions.len(),
        "mentions extracted"
    );
    mentions
}
