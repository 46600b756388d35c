//! Mention extraction and graph consolidation.
//!
//! The three stages run in sequence over fully loaded inputs:
//!
//! 1. [`extract`] scans every publication title for every drug name.
//! 2. [`build`] collapses the mentions into a [`MentionGraph`].
//! 3. [`top_journals`] answers the "journal citing the most drugs" question.
//!
//! Each stage borrows its inputs and returns a new value. A failing stage
//! leaves nothing half-built behind.
//!
//! [`MentionGraph`]: drugmap_model::MentionGraph

pub mod build;
pub mod extract;
pub mod report;

pub use build::build;
pub use extract::{DEFAULT_MIN_NAME_LEN, ExtractOptions, extract, extract_with_options};
pub use report::{JournalReport, journal_drug_counts, top_journals};
