//! Dataset loading - the fatal pre-checks shared by both pipelines
//!
//! A dataset must be readable, must be valid JSON, and its top-level value
//! must be an array. Anything past that is judged per entry.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::{json_type_name, Error, Result};

/// Read and parse a dataset file into its raw array elements
pub fn load_dataset(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_dataset_at(&text, path)?;
    log::info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse dataset text that did not come from a file
pub fn parse_dataset(text: &str) -> Result<Vec<Value>> {
    parse_dataset_at(text, Path::new("<input>"))
}

fn parse_dataset_at(text: &str, path: &Path) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).map_err(|source| Error::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(entries) => Ok(entries),
        other => Err(Error::NotAnArray {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}
