//! CSV source readers.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::error::{IngestError, Result};

/// Reads every row of a CSV file into `T`, matching columns by header name.
///
/// Header names are trimmed, stripped of a byte-order mark and lower-cased.
/// Rows may be shorter than the header; missing trailing fields take the
/// record's defaults.
///
/// # Errors
///
/// Fails when the file cannot be opened, a `required` column is absent from
/// the header, or a row cannot be parsed.
pub fn read_csv_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        rows.push(record.map_err(|e| csv_error(path, &e))?);
    }
    Ok(rows)
}

fn normalize_header(header: &str) -> String {
    header.trim_matches('\u{feff}').trim().to_lowercase()
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
