/// Sample dataset generator
///
/// This module defines the accident record model, the fixed sample dataset,
/// and the writer that serializes the dataset to a JSON file.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

/// A single traffic-accident record
///
/// Field declaration order is also the serialized field order, so the
/// dataset file always reads id, car, location, city, date_time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccidentRecord {
    /// Unique identifier within the dataset
    pub id: u32,
    /// Vehicle description (make and model)
    pub car: String,
    /// Where the accident happened
    pub location: String,
    /// City the location belongs to
    pub city: String,
    /// Timestamp as "YYYY-MM-DD HH:MM" text, never parsed as a date
    pub date_time: String,
}

impl AccidentRecord {
    /// Create a record from borrowed text fields
    pub fn new(id: u32, car: &str, location: &str, city: &str, date_time: &str) -> Self {
        Self {
            id,
            car: car.to_string(),
            location: location.to_string(),
            city: city.to_string(),
            date_time: date_time.to_string(),
        }
    }
}

/// Error while writing the dataset file
///
/// Generation failures are reported by the caller and never abort the run;
/// the dataset file is simply absent for the analysis stage.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The target file could not be created or overwritten
    #[error("could not create {}: {}", .path.display(), .source)]
    Create {
        path: PathBuf,
        source: io::Error,
    },
    /// The record list could not be serialized into the target file
    #[error("could not serialize dataset to {}: {}", .path.display(), .source)]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Build the fixed sample dataset of 8 accident records
pub fn sample_accidents() -> Vec<AccidentRecord> {
    vec![
        AccidentRecord::new(1, "Toyota Camry", "Main St, Anytown", "Anytown", "2024-10-25 08:30"),
        AccidentRecord::new(2, "Honda Civic", "Highway 101", "Springfield", "2024-10-25 15:45"),
        AccidentRecord::new(3, "Ford F-150", "Industrial Park Blvd", "Anytown", "2024-10-26 10:00"),
        AccidentRecord::new(4, "Toyota Camry", "Downtown Loop", "Metropolis", "2024-10-26 19:20"),
        AccidentRecord::new(5, "Tesla Model 3", "Residential Zone A", "Springfield", "2024-10-27 06:15"),
        AccidentRecord::new(6, "Honda Civic", "Main St, Anytown", "Anytown", "2024-10-27 12:00"),
        AccidentRecord::new(7, "Toyota Camry", "Highway 101", "Springfield", "2024-10-27 17:50"),
        AccidentRecord::new(8, "Ford F-150", "Ocean View Drive", "Anytown", "2024-10-28 14:00"),
    ]
}

/// Write the record list to `path` as a pretty-printed UTF-8 JSON array
///
/// Any existing content at `path` is fully overwritten.
///
/// # Arguments
///
/// * `path` - Target file path
/// * `records` - Records to serialize
///
/// # Returns
///
/// Result indicating success or the write failure
pub fn write_dataset(path: &Path, records: &[AccidentRecord]) -> Result<(), WriteError> {
    info!(
        "Writing {} accident records to {}",
        records.len(),
        path.display()
    );

    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::to_writer_pretty(file, records).map_err(|source| WriteError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_dataset_shape() {
        let records = sample_accidents();
        assert_eq!(records.len(), 8);

        // Identifiers are unique
        let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 8);

        // Every field is populated
        for record in &records {
            assert!(!record.car.is_empty());
            assert!(!record.location.is_empty());
            assert!(!record.city.is_empty());
            assert!(!record.date_time.is_empty());
        }
    }

    #[test]
    fn test_write_dataset_overwrites() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("accidents.json");

        std::fs::write(&path, "stale content").expect("Failed to seed file");
        write_dataset(&path, &sample_accidents()).expect("Failed to write dataset");

        let raw = std::fs::read_to_string(&path).expect("Failed to read dataset back");
        assert!(raw.trim_start().starts_with('['));
        assert!(!raw.contains("stale content"));

        let parsed: Vec<AccidentRecord> =
            serde_json::from_str(&raw).expect("Dataset should parse back");
        assert_eq!(parsed.len(), 8);
    }

    #[test]
    fn test_write_dataset_bad_path() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("no_such_dir").join("accidents.json");

        let err = write_dataset(&path, &sample_accidents()).unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
    }
}
