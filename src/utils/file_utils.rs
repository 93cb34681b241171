/// Dataset file handling utilities
///
/// This module provides the scoped file helpers used around the analysis
/// stages: existence probing, size reporting, and the cleanup step that
/// removes the backing file after a run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

/// Whether the dataset file exists as a regular file
pub fn dataset_exists(path: &Path) -> bool {
    path.is_file()
}

/// Size of the dataset file in bytes, if it can be read
pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}

/// Remove the dataset file if it is present
///
/// Used as the final cleanup step so the backing file is never left behind,
/// whether or not analysis succeeded.
///
/// # Arguments
///
/// * `path` - Path to the dataset file
///
/// # Returns
///
/// `true` if a file was removed, `false` if there was nothing to remove
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    if !path.is_file() {
        warn!("Not removing {}: not a regular file", path.display());
        return Ok(false);
    }

    fs::remove_file(path)
        .with_context(|| format!("Failed to remove {}", path.display()))?;

    info!("Cleaned up and deleted {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_if_exists() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("accidents.json");

        // Nothing to remove yet
        assert!(!remove_if_exists(&path).expect("cleanup should not fail"));

        std::fs::write(&path, "[]").expect("Failed to write file");
        assert!(dataset_exists(&path));
        assert_eq!(file_size(&path), Some(2));

        assert!(remove_if_exists(&path).expect("cleanup should not fail"));
        assert!(!dataset_exists(&path));
    }

    #[test]
    fn test_remove_skips_directories() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        assert!(!remove_if_exists(temp_dir.path()).expect("cleanup should not fail"));
        assert!(temp_dir.path().exists());
    }
}
