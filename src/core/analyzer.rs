/// Core accident dataset analyzer
///
/// This file contains the implementation of the AccidentAnalyzer which loads
/// the dataset file and answers the two supported queries: a case-insensitive
/// substring search over one field and the most frequent value of a field.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde_json::Value;

/// Error while loading the dataset file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dataset file does not exist
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file content is not valid JSON
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The JSON parsed, but the top level is not an array of records
    #[error("expected a JSON array of records, found a {0}")]
    Shape(String),
    /// Catch-all for any other I/O failure during the read
    #[error("unexpected error while reading dataset: {0}")]
    Unexpected(io::Error),
}

/// Core analyzer over an immutable, ordered record sequence
///
/// Records are kept as dynamic JSON objects rather than a typed struct:
/// queries take a field name at runtime and must tolerate records that are
/// missing a field or hold a null, the same relaxed shape the dataset file
/// is allowed to have.
pub struct AccidentAnalyzer {
    /// Loaded records in file order
    records: Vec<Value>,
}

impl AccidentAnalyzer {
    /// Load the dataset from a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the dataset file
    ///
    /// # Returns
    ///
    /// The analyzer over the loaded records, or the load failure
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        info!("Loading accident dataset from {}", path.display());

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(path.to_path_buf()))
            }
            Err(e) => return Err(LoadError::Unexpected(e)),
        };

        let parsed: Value = serde_json::from_str(&raw)?;

        // The top level must be an array; element shape stays unchecked
        // and is handled per query.
        let records = match parsed {
            Value::Array(records) => records,
            other => return Err(LoadError::Shape(json_type_name(&other).to_string())),
        };

        info!("Loaded {} accident records", records.len());
        Ok(Self { records })
    }

    /// Build an analyzer directly from records already in memory
    pub fn from_records(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// The loaded records, in insertion order
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find accidents whose field contains the query as a substring
    ///
    /// Both sides are string-coerced and lowercased before comparison, so
    /// numeric and text queries work uniformly and matching is
    /// case-insensitive. Partial matches count: searching `date_time` for
    /// "2024-10-27" finds every accident on that date.
    ///
    /// # Arguments
    ///
    /// * `key` - Field name to search within
    /// * `query` - Value to match against the field
    ///
    /// # Returns
    ///
    /// The matching records, in dataset order
    pub fn search_accidents(&self, key: &str, query: &Value) -> Vec<Value> {
        // Key presence is only probed on the first record; a key that shows
        // up later in a ragged dataset is treated as absent.
        let key_known = self
            .records
            .first()
            .map_or(false, |record| record.get(key).is_some());

        if !key_known {
            warn!("Search key '{}' not found in data", key);
            return Vec::new();
        }

        let needle = value_as_text(query).to_lowercase();

        self.records
            .iter()
            .filter(|record| {
                let haystack = record
                    .get(key)
                    .map(value_as_text)
                    .unwrap_or_default()
                    .to_lowercase();
                haystack.contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Find the most frequent value of a field across all records
    ///
    /// Records missing the field or holding a null are skipped. Ties break
    /// toward the value encountered first in dataset order.
    ///
    /// # Arguments
    ///
    /// * `key` - Field name to count values of
    ///
    /// # Returns
    ///
    /// The winning value and its count, or `None` when the dataset is empty
    /// or no record carries the field
    pub fn find_most_frequent_by_key(&self, key: &str) -> Option<(Value, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for record in &self.records {
            match record.get(key) {
                None | Some(Value::Null) => continue,
                Some(value) => *counts.entry(value_as_text(value)).or_insert(0) += 1,
            }
        }

        let best = counts.values().copied().max()?;

        // Re-scan in dataset order so the first value reaching the top
        // count wins the tie.
        for record in &self.records {
            if let Some(value) = record.get(key) {
                if value.is_null() {
                    continue;
                }
                if counts.get(&value_as_text(value)) == Some(&best) {
                    return Some((value.clone(), best));
                }
            }
        }

        None
    }
}

/// String form of a JSON value for matching and counting
///
/// Strings use their content directly; any other value uses its JSON text
/// form, so `json!(42)` coerces to "42" rather than a quoted string.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Human-readable name of a JSON value's type, for shape errors
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
