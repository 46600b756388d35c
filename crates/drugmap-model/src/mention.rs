use chrono::NaiveDate;

use crate::drug::Drug;
use crate::publication::{Publication, SourceType};

/// The fact that a drug name occurs in a publication title.
///
/// Mentions borrow from the loaded records and live only for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention<'a> {
    pub drug: &'a str,
    pub publication_id: &'a str,
    pub journal: &'a str,
    pub date: Option<NaiveDate>,
    pub source: SourceType,
}

impl<'a> Mention<'a> {
    pub fn new(drug: &'a Drug, publication: &'a Publication) -> Self {
        Self {
            drug: &drug.name,
            publication_id: publication.id(),
            journal: publication.journal(),
            date: publication.date(),
            source: publication.source_type(),
        }
    }
}
