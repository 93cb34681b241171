/// Simple example demonstrating how to use the accident analyzer library

use anyhow::Result;
use serde_json::json;

use accident_analyzer::analyze_dataset;
use accident_analyzer::config::PipelineConfig;
use accident_analyzer::core::generator::write_dataset;
use accident_analyzer::utils::file_utils;

fn main() -> Result<()> {
    let config = PipelineConfig::with_data_file("demo_accident_data.json");

    // Create the sample dataset file
    write_dataset(&config.data_file, &config.dataset)?;
    println!("Created dataset: {}", config.data_file.display());

    // Load it back and run the two queries
    let analyzer = analyze_dataset(&config.data_file)?;
    println!("Loaded {} accident records", analyzer.len());

    println!("\nAccidents in Anytown:");
    for record in analyzer.search_accidents("city", &json!("anytown")) {
        println!("  - {}", record);
    }

    if let Some((city, count)) = analyzer.find_most_frequent_by_key("city") {
        println!("\nMost frequent city: {} ({} accidents)", city, count);
    }

    if let Some((car, count)) = analyzer.find_most_frequent_by_key("car") {
        println!("Most crashed car: {} ({} crashes)", car, count);
    }

    // Remove the dataset file again
    file_utils::remove_if_exists(&config.data_file)?;

    Ok(())
}
