//! Publication records from the two supported sources.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Journal recorded for a publication whose source row names none.
///
/// It is a placeholder, not a venue: journal statistics leave it out.
pub const UNKNOWN_JOURNAL: &str = "unknown";

/// Origin of a publication record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    ClinicalTrials,
    Pubmed,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClinicalTrials => "clinical_trials",
            Self::Pubmed => "pubmed",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clinical-trial registration mentioning drugs in its scientific title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalTrial {
    pub id: String,
    pub scientific_title: String,
    /// `None` when the source date could not be parsed.
    pub date: Option<NaiveDate>,
    pub journal: String,
}

/// A PubMed article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubMedArticle {
    pub id: String,
    pub title: String,
    /// `None` when the source date could not be parsed.
    pub date: Option<NaiveDate>,
    pub journal: String,
}

/// A publication from any source, resolved once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publication {
    ClinicalTrial(ClinicalTrial),
    PubMedArticle(PubMedArticle),
}

impl Publication {
    pub fn id(&self) -> &str {
        match self {
            Self::ClinicalTrial(trial) => &trial.id,
            Self::PubMedArticle(article) => &article.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::ClinicalTrial(trial) => &trial.scientific_title,
            Self::PubMedArticle(article) => &article.title,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::ClinicalTrial(trial) => trial.date,
            Self::PubMedArticle(article) => article.date,
        }
    }

    pub fn journal(&self) -> &str {
        match self {
            Self::ClinicalTrial(trial) => &trial.journal,
            Self::PubMedArticle(article) => &article.journal,
        }
    }

    pub fn source_type(&self) -> SourceType {
        match self {
            Self::ClinicalTrial(_) => SourceType::ClinicalTrials,
            Self::PubMedArticle(_) => SourceType::Pubmed,
        }
    }
}
