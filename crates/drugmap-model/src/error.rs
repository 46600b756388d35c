use thiserror::Error;

/// Internal invariant violations detected while assembling a graph.
///
/// These signal a defect in the caller and abort the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("mention references unknown drug '{drug}'")]
    UnknownDrug { drug: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
