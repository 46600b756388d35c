//! Reading a resources directory into resolved source data.

use std::path::Path;

use tracing::{info, info_span, warn};

use crate::csv_reader::read_csv_records;
use crate::discovery::{SourceFiles, discover_sources};
use crate::error::Result;
use crate::json_reader::read_json_records;
use crate::records::{ClinicalTrialRecord, DrugRecord, PubMedRecord, SourceData, SourceRecords};

const DRUG_COLUMNS: &[&str] = &["drug"];
const CLINICAL_TRIAL_COLUMNS: &[&str] = &["id", "scientific_title"];
const PUBMED_COLUMNS: &[&str] = &["id", "title"];

/// Discovers and loads every source file in `dir`.
pub fn load_sources(dir: &Path) -> Result<SourceData> {
    let span = info_span!("load_sources", dir = %dir.display());
    let _guard = span.enter();
    let files = discover_sources(dir)?;
    load_files(&files)
}

/// Loads already located source files.
///
/// Parse failures abort; malformed field values are recovered and reported
/// as warnings on the returned data.
pub fn load_files(files: &SourceFiles) -> Result<SourceData> {
    let records = read_records(files)?;
    info!(
        drug_rows = records.drugs.len(),
        clinical_trial_rows = records.clinical_trials.len(),
        pubmed_rows = records.pubmed.len(),
        "source files read"
    );

    let data = records.resolve();
    for warning in &data.warnings {
        warn!(%warning, "recovered malformed record");
    }
    info!(
        drugs = data.drugs.len(),
        publications = data.publications.len(),
        warnings = data.warnings.len(),
        "sources resolved"
    );
    Ok(data)
}

fn read_records(files: &SourceFiles) -> Result<SourceRecords> {
    let drugs = read_csv_records::<DrugRecord>(&files.drugs, DRUG_COLUMNS)?;

    let clinical_trials = match &files.clinical_trials {
        Some(path) => read_csv_records::<ClinicalTrialRecord>(path, CLINICAL_TRIAL_COLUMNS)?,
        None => Vec::new(),
    };

    let mut pubmed = Vec::new();
    if let Some(path) = &files.pubmed_csv {
        pubmed.extend(read_csv_records::<PubMedRecord>(path, PUBMED_COLUMNS)?);
    }
    if let Some(path) = &files.pubmed_json {
        pubmed.extend(read_json_records::<PubMedRecord>(path)?);
    }

    Ok(SourceRecords {
        drugs,
        clinical_trials,
        pubmed,
    })
}
