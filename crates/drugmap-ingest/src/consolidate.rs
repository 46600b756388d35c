//! Merging of publication rows that lack an identifier.
//!
//! Exports sometimes split one publication over two rows: one carrying the
//! id, the other carrying the journal. A blank-id row is folded into a row of
//! the same source with the same normalized title and date; when no such row
//! exists the blank-id row cannot be referenced in the graph and is dropped.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use drugmap_model::SourceType;
use drugmap_normalize::{DateFormatError, clean_text, normalize_text, parse_date};

use crate::warning::LoadWarning;

/// A publication row with cleaned text and a parsed (or failed) date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingPublication {
    pub source: SourceType,
    pub id: String,
    pub title: String,
    pub date: Result<NaiveDate, DateFormatError>,
    pub journal: String,
}

type MergeKey = (SourceType, String, Option<NaiveDate>);

impl PendingPublication {
    pub fn new(source: SourceType, id: &str, title: &str, date: &str, journal: &str) -> Self {
        Self {
            source,
            id: clean_text(id),
            title: clean_text(title),
            date: parse_date(date),
            journal: clean_text(journal),
        }
    }

    fn merge_key(&self) -> MergeKey {
        (
            self.source,
            normalize_text(&self.title),
            self.date.as_ref().ok().copied(),
        )
    }
}

/// Folds blank-id rows into their identified twin, preserving row order.
pub(crate) fn consolidate(
    pending: Vec<PendingPublication>,
    warnings: &mut Vec<LoadWarning>,
) -> Vec<PendingPublication> {
    let mut kept: Vec<PendingPublication> = Vec::with_capacity(pending.len());
    let mut by_key: BTreeMap<MergeKey, usize> = BTreeMap::new();
    let mut orphans = Vec::new();

    for publication in pending {
        if publication.id.is_empty() {
            orphans.push(publication);
            continue;
        }
        by_key.entry(publication.merge_key()).or_insert(kept.len());
        kept.push(publication);
    }

    for orphan in orphans {
        let Some(&index) = by_key.get(&orphan.merge_key()) else {
            warnings.push(LoadWarning::MissingId {
                source_type: orphan.source,
                title: orphan.title,
            });
            continue;
        };
        let survivor = &mut kept[index];
        debug!(
            source = %orphan.source,
            id = %survivor.id,
            "merged row without id into matching publication"
        );
        if survivor.journal.is_empty() && !orphan.journal.is_empty() {
            survivor.journal = orphan.journal;
        }
    }

    kept
}
