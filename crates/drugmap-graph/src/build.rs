//! Consolidation of mentions into a [`MentionGraph`].
//!
//! Every input drug gets an entry, in input order. Under a drug, journals are
//! grouped by their normalized name and keep the first spelling seen;
//! publications are keyed by `(id, source)`. A repeated key keeps its first
//! position and journal, and the last-seen known date replaces the earlier
//! one. A missing date never overwrites a known one.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use drugmap_model::{
    Drug, DrugEntry, JournalGroup, Mention, MentionGraph, PublicationRef, Result, SourceType,
    ValidationError,
};
use drugmap_normalize::{format_date, normalize_text};

/// Builds the graph for `all_drugs` from extracted mentions.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownDrug`] when a mention names a drug
/// missing from `all_drugs`. This indicates inconsistent inputs and the whole
/// build is abandoned.
pub fn build(mentions: &[Mention<'_>], all_drugs: &[Drug]) -> Result<MentionGraph> {
    let mut slots: BTreeMap<&str, usize> = BTreeMap::new();
    let mut builders: Vec<DrugBuilder> = Vec::with_capacity(all_drugs.len());
    for drug in all_drugs {
        if slots.contains_key(drug.name.as_str()) {
            debug!(drug = %drug.name, "duplicate drug name; keeping first entry");
            continue;
        }
        slots.insert(&drug.name, builders.len());
        builders.push(DrugBuilder::new(&drug.name));
    }

    for mention in mentions {
        let Some(&slot) = slots.get(mention.drug) else {
            return Err(ValidationError::UnknownDrug {
                drug: mention.drug.to_string(),
            });
        };
        builders[slot].add(mention);
    }

    let graph = MentionGraph::from_entries(builders.into_iter().map(DrugBuilder::finish).collect());
    debug!(
        drugs = graph.len(),
        mentions = mentions.len(),
        publication_refs = graph.mention_count(),
        "graph built"
    );
    Ok(graph)
}

/// Position of a publication reference inside a drug entry.
#[derive(Debug, Clone, Copy)]
struct RefSlot {
    group: usize,
    index: usize,
}

struct DrugBuilder {
    drug: String,
    journals: Vec<JournalGroup>,
    journal_slots: BTreeMap<String, usize>,
    seen: BTreeMap<(String, SourceType), RefSlot>,
}

impl DrugBuilder {
    fn new(drug: &str) -> Self {
        Self {
            drug: drug.to_string(),
            journals: Vec::new(),
            journal_slots: BTreeMap::new(),
            seen: BTreeMap::new(),
        }
    }

    fn add(&mut self, mention: &Mention<'_>) {
        let key = (mention.publication_id.to_string(), mention.source);
        if let Some(slot) = self.seen.get(&key) {
            let existing = &mut self.journals[slot.group].mentions[slot.index];
            if let Some(date) = mention.date
                && existing.date != mention.date
            {
                trace!(
                    drug = %self.drug,
                    id = %existing.id,
                    date = %format_date(date),
                    "conflicting dates for publication; keeping last seen"
                );
                existing.date = Some(date);
            }
            return;
        }

        let group = self.journal_group(mention.journal);
        let mentions = &mut self.journals[group].mentions;
        mentions.push(PublicationRef {
            id: mention.publication_id.to_string(),
            source: mention.source,
            date: mention.date,
        });
        let index = mentions.len() - 1;
        self.seen.insert(key, RefSlot { group, index });
    }

    fn journal_group(&mut self, journal: &str) -> usize {
        let journal_key = normalize_text(journal);
        if let Some(&group) = self.journal_slots.get(&journal_key) {
            return group;
        }
        self.journals.push(JournalGroup {
            journal: journal.to_string(),
            mentions: Vec::new(),
        });
        let group = self.journals.len() - 1;
        self.journal_slots.insert(journal_key, group);
        group
    }

    fn finish(self) -> DrugEntry {
        DrugEntry {
            drug: self.drug,
            journals: self.journals,
        }
    }
}
