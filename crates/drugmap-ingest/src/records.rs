//! Raw source records and their resolution into model types.
//!
//! Every defaulting rule lives here as a named constant. A missing or blank
//! field never drops a record on its own: an empty title simply matches no
//! drug.

use std::collections::BTreeSet;

use serde::Deserialize;

use drugmap_model::{
    ClinicalTrial, Drug, PubMedArticle, Publication, SourceType, UNKNOWN_JOURNAL,
};
use drugmap_normalize::{clean_text, normalize_text};

use crate::consolidate::{PendingPublication, consolidate};
use crate::warning::LoadWarning;

/// Title used when a record has none.
pub const DEFAULT_TITLE: &str = "";
/// Journal used when a record has none and no duplicate row supplies one.
pub const DEFAULT_JOURNAL: &str = UNKNOWN_JOURNAL;
/// ATC code used when a drug row has none.
pub const DEFAULT_ATCCODE: &str = "";

/// A row of the drugs file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DrugRecord {
    pub atccode: String,
    #[serde(rename = "drug")]
    pub name: String,
}

/// A row of the clinical trials file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClinicalTrialRecord {
    pub id: String,
    pub scientific_title: String,
    pub date: String,
    pub journal: String,
}

/// A row of a PubMed file. JSON numeric ids arrive here already as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PubMedRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub journal: String,
}

/// Deserialized records of every source, in file order.
#[derive(Debug, Clone, Default)]
pub struct SourceRecords {
    pub drugs: Vec<DrugRecord>,
    pub clinical_trials: Vec<ClinicalTrialRecord>,
    pub pubmed: Vec<PubMedRecord>,
}

/// Loaded and resolved inputs of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct SourceData {
    pub drugs: Vec<Drug>,
    pub publications: Vec<Publication>,
    pub warnings: Vec<LoadWarning>,
}

impl SourceRecords {
    /// Resolves raw records into drugs and publications.
    ///
    /// Publications come out PubMed first, then clinical trials, each in
    /// file order.
    pub fn resolve(self) -> SourceData {
        let mut warnings = Vec::new();
        let drugs = resolve_drugs(self.drugs, &mut warnings);

        let pending = self
            .pubmed
            .into_iter()
            .map(|record| {
                PendingPublication::new(
                    SourceType::Pubmed,
                    &record.id,
                    &record.title,
                    &record.date,
                    &record.journal,
                )
            })
            .chain(self.clinical_trials.into_iter().map(|record| {
                PendingPublication::new(
                    SourceType::ClinicalTrials,
                    &record.id,
                    &record.scientific_title,
                    &record.date,
                    &record.journal,
                )
            }))
            .collect();

        let publications = consolidate(pending, &mut warnings)
            .into_iter()
            .map(|pending| finish_publication(pending, &mut warnings))
            .collect();

        SourceData {
            drugs,
            publications,
            warnings,
        }
    }
}

/// Cleans drug rows, dropping blank names and repeated names.
fn resolve_drugs(records: Vec<DrugRecord>, warnings: &mut Vec<LoadWarning>) -> Vec<Drug> {
    let mut drugs: Vec<Drug> = Vec::with_capacity(records.len());
    let mut seen_keys: BTreeSet<String> = BTreeSet::new();
    for (index, record) in records.into_iter().enumerate() {
        let name = clean_text(&record.name);
        if name.is_empty() {
            warnings.push(LoadWarning::BlankDrugName { record: index + 1 });
            continue;
        }
        if !seen_keys.insert(normalize_text(&name)) {
            warnings.push(LoadWarning::DuplicateDrug { name });
            continue;
        }
        let atccode = clean_text(&record.atccode);
        let atccode = if atccode.is_empty() {
            DEFAULT_ATCCODE.to_string()
        } else {
            atccode
        };
        drugs.push(Drug::new(atccode, name));
    }
    drugs
}

/// Applies the date policy and the remaining defaults.
///
/// An unparseable date is reported and the publication is kept without one;
/// mention extraction only needs the title.
fn finish_publication(pending: PendingPublication, warnings: &mut Vec<LoadWarning>) -> Publication {
    let date = match pending.date {
        Ok(date) => Some(date),
        Err(error) => {
            warnings.push(LoadWarning::InvalidDate {
                source_type: pending.source,
                id: pending.id.clone(),
                error,
            });
            None
        }
    };
    let title = if pending.title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        pending.title
    };
    let journal = if pending.journal.is_empty() {
        DEFAULT_JOURNAL.to_string()
    } else {
        pending.journal
    };
    match pending.source {
        SourceType::ClinicalTrials => Publication::ClinicalTrial(ClinicalTrial {
            id: pending.id,
            scientific_title: title,
            date,
            journal,
        }),
        SourceType::Pubmed => Publication::PubMedArticle(PubMedArticle {
            id: pending.id,
            title,
            date,
            journal,
        }),
    }
}
