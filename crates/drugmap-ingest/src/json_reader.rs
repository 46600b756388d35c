//! JSON source readers.
//!
//! PubMed exports are arrays of flat objects. They are not always strict
//! JSON: a trailing comma before the closing bracket is common, ids may be
//! numbers, and absent values may be written as `null`.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{IngestError, Result};

/// Reads a JSON array of flat records into `T`.
///
/// Numbers and booleans become text, `null` fields take the record default.
///
/// # Errors
///
/// Fails when the file cannot be read, is not valid JSON once trailing commas
/// are removed, or is not an array of records.
pub fn read_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut value: Value = serde_json::from_str(&strip_trailing_commas(&text))
        .map_err(|e| json_error(path, e.to_string()))?;

    let Value::Array(items) = &mut value else {
        return Err(json_error(path, "expected an array of records".to_string()));
    };
    for item in items.iter_mut() {
        stringify_scalars(item);
    }

    serde_json::from_value(value).map_err(|e| json_error(path, e.to_string()))
}

/// Removes commas that directly precede `]` or `}` outside of strings.
pub(crate) fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (index, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[index + 1..].iter().find(|c| !c.is_whitespace());
                if !matches!(next, Some(']' | '}')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn stringify_scalars(item: &mut Value) {
    let Value::Object(fields) = item else {
        return;
    };
    fields.retain(|_, field| !field.is_null());
    for field in fields.values_mut() {
        let text = match field {
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        };
        if let Some(text) = text {
            *field = Value::String(text);
        }
    }
}

fn json_error(path: &Path, message: String) -> IngestError {
    IngestError::JsonParse {
        path: path.to_path_buf(),
        message,
    }
}
