use std::fmt;

use drugmap_model::SourceType;
use drugmap_normalize::DateFormatError;

/// A recoverable problem found while loading; the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Kept for matching with no date.
    InvalidDate {
        source_type: SourceType,
        id: String,
        error: DateFormatError,
    },
    /// Dropped: no id and no identified row to merge into.
    MissingId {
        source_type: SourceType,
        title: String,
    },
    /// Dropped drug row; `record` is 1-based.
    BlankDrugName { record: usize },
    /// Dropped drug row repeating an earlier name.
    DuplicateDrug { name: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate {
                source_type,
                id,
                error,
            } => write!(f, "{source_type} record '{id}': {error}; kept without date"),
            Self::MissingId { source_type, title } => {
                write!(f, "{source_type} record '{title}' has no id; dropped")
            }
            Self::BlankDrugName { record } => {
                write!(f, "drug record {record} has no name; dropped")
            }
            Self::DuplicateDrug { name } => {
                write!(f, "drug '{name}' listed more than once; first entry kept")
            }
        }
    }
}
