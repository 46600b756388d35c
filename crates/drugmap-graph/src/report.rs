//! Journal statistics over a finished graph.
//!
//! Journals are compared by their normalized name, so `Journal of X` and
//! `journal of  x` count as one journal. The first spelling seen in graph
//! order is the one reported. Publications filed under [`UNKNOWN_JOURNAL`]
//! have no known venue and are not counted.

use std::collections::{BTreeMap, BTreeSet};

use drugmap_model::{MentionGraph, UNKNOWN_JOURNAL};
use drugmap_normalize::normalize_text;

/// Journals citing the largest number of distinct drugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalReport {
    /// Every journal reaching the maximum, sorted by name.
    pub journals: Vec<String>,
    pub drug_count: usize,
}

struct Tally<'a> {
    display: &'a str,
    drugs: BTreeSet<&'a str>,
}

/// Counts distinct drugs per journal.
///
/// Sorted by count, highest first, then by journal name. Journals only reached
/// through empty groups are left out, as is the unknown-journal placeholder.
pub fn journal_drug_counts(graph: &MentionGraph) -> Vec<(String, usize)> {
    let placeholder = normalize_text(UNKNOWN_JOURNAL);
    let mut tallies: BTreeMap<String, Tally<'_>> = BTreeMap::new();
    for entry in graph.entries() {
        for group in entry.journals.iter().filter(|g| !g.mentions.is_empty()) {
            let key = normalize_text(&group.journal);
            if key.is_empty() || key == placeholder {
                continue;
            }
            tallies
                .entry(key)
                .or_insert_with(|| Tally {
                    display: &group.journal,
                    drugs: BTreeSet::new(),
                })
                .drugs
                .insert(&entry.drug);
        }
    }

    let mut counts: Vec<(String, usize)> = tallies
        .into_values()
        .map(|tally| (tally.display.to_string(), tally.drugs.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Finds the journal(s) citing the most distinct drugs.
///
/// Returns `None` when the graph holds no mention in a known journal. Ties
/// are all reported.
pub fn top_journals(graph: &MentionGraph) -> Option<JournalReport> {
    let counts = journal_drug_counts(graph);
    let drug_count = counts.first()?.1;
    let journals = counts
        .into_iter()
        .take_while(|(_, count)| *count == drug_count)
        .map(|(journal, _)| journal)
        .collect();
    Some(JournalReport {
        journals,
        drug_count,
    })
}

#[cfg(test)]
mod tests {
    use drugmap_model::{DrugEntry, JournalGroup, PublicationRef, SourceType};

    use super::*;

    fn group(journal: &str, ids: &[&str]) -> JournalGroup {
        JournalGroup {
            journal: journal.to_string(),
            mentions: ids
                .iter()
                .map(|id| PublicationRef {
                    id: (*id).to_string(),
                    source: SourceType::Pubmed,
                    date: None,
                })
                .collect(),
        }
    }

    fn entry(drug: &str, journals: Vec<JournalGroup>) -> DrugEntry {
        DrugEntry {
            drug: drug.to_string(),
            journals,
        }
    }

    #[test]
    fn test_empty_graph_has_no_top_journal() {
        let graph = MentionGraph::from_entries(vec![entry("ASPIRIN", vec![])]);
        assert_eq!(top_journals(&graph), None);
        assert!(journal_drug_counts(&graph).is_empty());
    }

    #[test]
    fn test_counts_distinct_drugs_not_publications() {
        let graph = MentionGraph::from_entries(vec![
            entry("A", vec![group("X", &["1", "2", "3"])]),
            entry("B", vec![group("Y", &["4"]), group("X", &["5"])]),
        ]);
        assert_eq!(
            journal_drug_counts(&graph),
            vec![("X".to_string(), 2), ("Y".to_string(), 1)]
        );
    }

    #[test]
    fn test_ties_are_all_reported_sorted() {
        let graph = MentionGraph::from_entries(vec![
            entry("A", vec![group("Zeta", &["1"]), group("Alpha", &["2"])]),
            entry("B", vec![group("Beta", &["3"])]),
        ]);
        let report = top_journals(&graph).unwrap();
        assert_eq!(report.drug_count, 1);
        assert_eq!(report.journals, vec!["Alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_unknown_journal_is_never_reported() {
        let graph = MentionGraph::from_entries(vec![
            entry("A", vec![group(UNKNOWN_JOURNAL, &["1"]), group("Real", &["2"])]),
            entry("B", vec![group("Unknown", &["3"])]),
        ]);
        assert_eq!(journal_drug_counts(&graph), vec![("Real".to_string(), 1)]);
        let report = top_journals(&graph).unwrap();
        assert_eq!(report.journals, vec!["Real"]);
        assert_eq!(report.drug_count, 1);
    }

    #[test]
    fn test_only_unknown_journals_gives_no_report() {
        let graph = MentionGraph::from_entries(vec![entry(
            "A",
            vec![group(UNKNOWN_JOURNAL, &["1"])],
        )]);
        assert_eq!(top_journals(&graph), None);
    }

    #[test]
    fn test_spellings_merge_under_first_seen() {
        let graph = MentionGraph::from_entries(vec![
            entry("A", vec![group("Journal of X", &["1"])]),
            entry("B", vec![group("journal of  x", &["2"])]),
        ]);
        assert_eq!(
            journal_drug_counts(&graph),
            vec![("Journal of X".to_string(), 2)]
        );
    }
}
