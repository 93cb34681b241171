/// Integration tests for the accident analyzer
///
/// These tests drive the full generate-analyze-cleanup pipeline and the
/// load failure paths against real files in scratch directories.

use serde_json::{json, Value};

use accident_analyzer::app::run_pipeline;
use accident_analyzer::config::PipelineConfig;
use accident_analyzer::core::generator::{sample_accidents, write_dataset};
use accident_analyzer::utils::file_utils;
use accident_analyzer::{analyze_dataset, AccidentAnalyzer, LoadError};

#[test]
fn test_full_pipeline_run() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("accidents.json");
    let config = PipelineConfig::with_data_file(&data_file);

    let report = run_pipeline(&config);

    assert!(report.generated);
    assert_eq!(report.records_loaded, Some(8));
    assert!(report.stage_errors.is_empty());

    // Search demonstration: Anytown accidents are ids 1, 3, 6, 8
    let ids: Vec<u64> = report
        .search_matches
        .iter()
        .map(|r| r["id"].as_u64().expect("id should be a number"))
        .collect();
    assert_eq!(ids, vec![1, 3, 6, 8]);

    // Frequency demonstrations over the fixed dataset
    assert_eq!(report.most_frequent_city, Some((json!("Anytown"), 4)));
    assert_eq!(report.most_frequent_car, Some((json!("Toyota Camry"), 3)));

    // The backing file is gone after the run
    assert!(report.cleaned_up);
    assert!(!data_file.exists());
}

#[test]
fn test_pipeline_with_unwritable_target() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("missing_dir").join("accidents.json");
    let config = PipelineConfig::with_data_file(&data_file);

    let report = run_pipeline(&config);

    // Generation failed, so analysis sees no file; the run still completes
    assert!(!report.generated);
    assert_eq!(report.records_loaded, None);
    assert!(!report.cleaned_up);
    assert_eq!(report.stage_errors.len(), 2);
    assert!(report.stage_errors[0].starts_with("generation:"));
    assert!(report.stage_errors[1].contains("file not found"));
    assert!(!data_file.exists());
}

#[test]
fn test_pipeline_with_directory_target() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_dir = temp_dir.path().join("accidents.json");
    std::fs::create_dir(&data_dir).expect("Failed to create dir");

    let config = PipelineConfig::with_data_file(&data_dir);
    let report = run_pipeline(&config);

    assert!(!report.generated);
    assert_eq!(report.records_loaded, None);
    assert!(!report.cleaned_up);
    // The directory is not touched by cleanup
    assert!(data_dir.exists());
}

#[test]
fn test_round_trip_preserves_records() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("accidents.json");

    let records = sample_accidents();
    write_dataset(&data_file, &records).expect("Failed to write dataset");

    let analyzer = analyze_dataset(&data_file).expect("Failed to load dataset");
    assert_eq!(analyzer.len(), 8);

    // Field-for-field, order preserved
    let expected = serde_json::to_value(&records).expect("records should serialize");
    assert_eq!(Value::Array(analyzer.records().to_vec()), expected);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("absent.json");

    match AccidentAnalyzer::load(&data_file) {
        Err(LoadError::NotFound(path)) => assert_eq!(path, data_file),
        other => panic!("expected NotFound, got {:?}", other.map(|a| a.len())),
    }
}

#[test]
fn test_load_malformed_json_then_cleanup() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("accidents.json");
    std::fs::write(&data_file, "not json at all {{{").expect("Failed to write file");

    let err = AccidentAnalyzer::load(&data_file).err().expect("load should fail");
    assert!(matches!(err, LoadError::Parse(_)));

    // A failed load never blocks cleanup
    assert!(file_utils::remove_if_exists(&data_file).expect("cleanup should not fail"));
    assert!(!data_file.exists());
}

#[test]
fn test_load_rejects_non_list_shapes() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    for (name, content, found) in [
        ("object.json", r#"{"id": 1, "city": "Anytown"}"#, "object"),
        ("scalar.json", "42", "number"),
        ("string.json", r#""accidents""#, "string"),
    ] {
        let data_file = temp_dir.path().join(name);
        std::fs::write(&data_file, content).expect("Failed to write file");

        match AccidentAnalyzer::load(&data_file) {
            Err(LoadError::Shape(kind)) => assert_eq!(kind, found),
            other => panic!("expected Shape for {}, got {:?}", name, other.map(|a| a.len())),
        }
    }
}

#[test]
fn test_empty_dataset_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("empty.json");
    std::fs::write(&data_file, "[]").expect("Failed to write file");

    let analyzer = analyze_dataset(&data_file).expect("Failed to load dataset");
    assert!(analyzer.is_empty());
    assert!(analyzer.search_accidents("city", &json!("Anytown")).is_empty());
    assert_eq!(analyzer.find_most_frequent_by_key("city"), None);
}
