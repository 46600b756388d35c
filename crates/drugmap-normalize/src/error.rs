use thiserror::Error;

/// A date string that matches none of the supported formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date format: '{value}'")]
pub struct DateFormatError {
    pub value: String,
}

impl DateFormatError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
