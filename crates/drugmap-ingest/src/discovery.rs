//! Location of the source files inside a resources directory.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

pub const DRUGS_FILE: &str = "drugs.csv";
pub const CLINICAL_TRIALS_FILE: &str = "clinical_trials.csv";
pub const PUBMED_CSV_FILE: &str = "pubmed.csv";
pub const PUBMED_JSON_FILE: &str = "pubmed.json";

/// Source files found in a resources directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFiles {
    pub drugs: PathBuf,
    pub clinical_trials: Option<PathBuf>,
    pub pubmed_csv: Option<PathBuf>,
    pub pubmed_json: Option<PathBuf>,
}

/// Finds the source files in `dir`, matching file names case-insensitively.
///
/// The drugs file is required, and at least one publication file must exist.
pub fn discover_sources(dir: &Path) -> Result<SourceFiles> {
    let files = list_files(dir)?;
    let find = |name: &str| {
        files
            .iter()
            .find(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.eq_ignore_ascii_case(name))
            })
            .cloned()
    };

    let drugs = find(DRUGS_FILE).ok_or_else(|| IngestError::FileNotFound {
        path: dir.join(DRUGS_FILE),
    })?;
    let sources = SourceFiles {
        drugs,
        clinical_trials: find(CLINICAL_TRIALS_FILE),
        pubmed_csv: find(PUBMED_CSV_FILE),
        pubmed_json: find(PUBMED_JSON_FILE),
    };
    if sources.clinical_trials.is_none()
        && sources.pubmed_csv.is_none()
        && sources.pubmed_json.is_none()
    {
        return Err(IngestError::NoPublicationSources {
            path: dir.to_path_buf(),
        });
    }
    Ok(sources)
}

/// Lists regular files in a directory, sorted by file name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
