//! Data model for the drug mention graph.
//!
//! Records are resolved into these types once at load time. Downstream stages
//! only go through the accessors here and never re-inspect raw rows.

pub mod drug;
pub mod error;
pub mod graph;
pub mod mention;
pub mod publication;

pub use drug::Drug;
pub use error::{Result, ValidationError};
pub use graph::{DrugEntry, JournalGroup, MentionGraph, PublicationRef};
pub use mention::Mention;
pub use publication::{ClinicalTrial, PubMedArticle, Publication, SourceType, UNKNOWN_JOURNAL};
