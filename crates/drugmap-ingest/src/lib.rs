//! Source loading for the drug mention pipeline.
//!
//! Reads the drugs, clinical trials and PubMed files of a resources directory
//! and resolves them into [`drugmap_model`] records.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use drugmap_ingest::load_sources;
//!
//! let data = load_sources(Path::new("resources"))?;
//! for warning in &data.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

mod consolidate;
mod csv_reader;
mod discovery;
mod error;
mod json_reader;
mod loader;
mod records;
mod warning;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{
    CLINICAL_TRIALS_FILE, DRUGS_FILE, PUBMED_CSV_FILE, PUBMED_JSON_FILE, SourceFiles,
    discover_sources,
};

// === Readers ===
pub use csv_reader::read_csv_records;
pub use json_reader::read_json_records;
pub use loader::{load_files, load_sources};

// === Records ===
pub use records::{
    ClinicalTrialRecord, DEFAULT_ATCCODE, DEFAULT_JOURNAL, DEFAULT_TITLE, DrugRecord,
    PubMedRecord, SourceData, SourceRecords,
};
pub use warning::LoadWarning;
