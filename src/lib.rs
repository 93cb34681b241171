/// Accident Analyzer - a small traffic-accident dataset tool
///
/// This library generates a sample dataset of accident records, writes it to
/// a JSON file, loads it back, and answers two queries over it: a substring
/// search on one field and the most frequent value of a field.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::analyzer::{AccidentAnalyzer, LoadError};
pub use crate::core::generator::{sample_accidents, AccidentRecord, WriteError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a dataset file and return an analyzer over it
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `path` - Path to the dataset file
///
/// # Returns
///
/// The analyzer over the loaded records, or the load failure
pub fn analyze_dataset<P: AsRef<std::path::Path>>(path: P) -> Result<AccidentAnalyzer, LoadError> {
    AccidentAnalyzer::load(path.as_ref())
}

/// Library configuration
pub mod config {
    use std::path::PathBuf;

    use crate::core::generator::{sample_accidents, AccidentRecord};

    /// Canonical dataset path used by the default pipeline run
    pub const DEFAULT_DATA_FILE: &str = "sample_accident_data.json";

    /// Explicit pipeline configuration: the dataset file path and the
    /// records to generate, passed into the stages rather than read from
    /// module scope.
    #[derive(Debug, Clone)]
    pub struct PipelineConfig {
        /// Path the dataset is written to, loaded from, and removed from
        pub data_file: PathBuf,
        /// Records the generator writes out
        pub dataset: Vec<AccidentRecord>,
    }

    impl Default for PipelineConfig {
        fn default() -> Self {
            Self {
                data_file: PathBuf::from(DEFAULT_DATA_FILE),
                dataset: sample_accidents(),
            }
        }
    }

    impl PipelineConfig {
        /// Default configuration pointed at a different dataset path
        pub fn with_data_file<P: Into<PathBuf>>(path: P) -> Self {
            Self {
                data_file: path.into(),
                ..Self::default()
            }
        }
    }
}

/// Pipeline orchestration
pub mod app {
    use log::{debug, error, warn};
    use serde::Serialize;
    use serde_json::Value;

    use crate::config::PipelineConfig;
    use crate::core::analyzer::AccidentAnalyzer;
    use crate::core::generator;
    use crate::utils::file_utils;

    /// Field the search demonstration runs over
    pub const SEARCH_FIELD: &str = "city";
    /// Fixed query term of the search demonstration
    pub const SEARCH_TERM: &str = "Anytown";

    /// Outcome of one full generate-analyze-cleanup run
    ///
    /// Every stage records its result here; errors are collected as text
    /// instead of aborting the run.
    #[derive(Debug, Serialize)]
    pub struct RunReport {
        /// Dataset path the run operated on
        pub dataset_path: String,
        /// Whether the generator produced the dataset file
        pub generated: bool,
        /// Number of records the analyzer loaded, if the load succeeded
        pub records_loaded: Option<usize>,
        /// Field the search ran over
        pub search_field: String,
        /// Query term the search ran with
        pub search_term: String,
        /// Records matching the search
        pub search_matches: Vec<Value>,
        /// Most frequent accident city with its count
        pub most_frequent_city: Option<(Value, usize)>,
        /// Most frequently crashed car model with its count
        pub most_frequent_car: Option<(Value, usize)>,
        /// Whether cleanup removed the dataset file
        pub cleaned_up: bool,
        /// Human-readable descriptions of every stage failure
        pub stage_errors: Vec<String>,
    }

    impl RunReport {
        fn new(config: &PipelineConfig) -> Self {
            Self {
                dataset_path: config.data_file.display().to_string(),
                generated: false,
                records_loaded: None,
                search_field: SEARCH_FIELD.to_string(),
                search_term: SEARCH_TERM.to_string(),
                search_matches: Vec::new(),
                most_frequent_city: None,
                most_frequent_car: None,
                cleaned_up: false,
                stage_errors: Vec::new(),
            }
        }
    }

    /// Run the full generate-analyze-cleanup sequence
    ///
    /// Every stage failure is caught at its boundary, logged, and recorded
    /// in the report; none of them prevents the cleanup step or the run
    /// from completing.
    ///
    /// # Arguments
    ///
    /// * `config` - Dataset path and records to operate on
    ///
    /// # Returns
    ///
    /// The report of all stage outcomes
    pub fn run_pipeline(config: &PipelineConfig) -> RunReport {
        let mut report = RunReport::new(config);

        // Stage 1: generate the dataset file
        match generator::write_dataset(&config.data_file, &config.dataset) {
            Ok(()) => {
                report.generated = true;
                if let Some(size) = file_utils::file_size(&config.data_file) {
                    debug!("Dataset file is {} bytes", size);
                }
            }
            Err(e) => {
                error!("Error creating file: {}", e);
                report.stage_errors.push(format!("generation: {}", e));
            }
        }

        // Stage 2: analyze; a missing dataset is reported, not an error
        if !file_utils::dataset_exists(&config.data_file) {
            warn!("File not found at {}", config.data_file.display());
            report.stage_errors.push(format!(
                "analysis: file not found at {}",
                config.data_file.display()
            ));
        } else {
            match AccidentAnalyzer::load(&config.data_file) {
                Ok(analyzer) => {
                    report.records_loaded = Some(analyzer.len());
                    report.search_matches =
                        analyzer.search_accidents(SEARCH_FIELD, &Value::from(SEARCH_TERM));
                    report.most_frequent_city = analyzer.find_most_frequent_by_key("city");
                    report.most_frequent_car = analyzer.find_most_frequent_by_key("car");
                }
                Err(e) => {
                    error!("Analysis stopped: {}", e);
                    report.stage_errors.push(format!("analysis: {}", e));
                }
            }
        }

        // Stage 3: cleanup runs unconditionally, even after a failed
        // generation or analysis, so the file is never left behind
        match file_utils::remove_if_exists(&config.data_file) {
            Ok(removed) => report.cleaned_up = removed,
            Err(e) => {
                error!("Cleanup failed: {}", e);
                report.stage_errors.push(format!("cleanup: {}", e));
            }
        }

        report
    }
}
