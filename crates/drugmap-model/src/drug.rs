use serde::{Deserialize, Serialize};

/// A known drug, identified by its ATC code.
///
/// `name` is the display spelling; matching uses its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drug {
    pub atccode: String,
    pub name: String,
}

impl Drug {
    pub fn new(atccode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            atccode: atccode.into(),
            name: name.into(),
        }
    }
}
