/// Output formatter for run reports
///
/// This module renders a pipeline run report for the console and exports it
/// as JSON.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use crate::app::RunReport;
use crate::core::analyzer::value_as_text;

/// Format a run report for console output
///
/// # Arguments
///
/// * `report` - Report of one pipeline run
/// * `use_markdown` - Whether to wrap the output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output
pub fn format_report(report: &RunReport, use_markdown: &bool) -> String {
    let mut output = String::new();
    let separator = format!("{}\n", "-".repeat(40));

    // Start markdown code block if requested
    if *use_markdown {
        output.push_str("```\n");
    }

    match report.records_loaded {
        Some(count) => {
            output.push_str(&format!(
                "{} {}\n",
                "Total accident records loaded:".green(),
                count
            ));
            output.push_str(&separator);

            // Search demonstration
            output.push_str(&format!(
                "{} Finding accidents in '{}' ({} found):\n",
                "Analysis 1:".cyan().bold(),
                report.search_term,
                report.search_matches.len()
            ));
            for record in &report.search_matches {
                output.push_str(&format!("  - {}\n", describe_record(record)));
            }
            output.push_str(&separator);

            // Frequency demonstrations
            output.push_str(&format!(
                "{} Most frequent accident city:\n",
                "Analysis 2:".cyan().bold()
            ));
            output.push_str(&format!(
                "  - City: {}.\n",
                describe_frequency(&report.most_frequent_city, "accidents")
            ));
            output.push_str(&separator);

            output.push_str(&format!(
                "{} Most frequently crashed car model:\n",
                "Analysis 3:".cyan().bold()
            ));
            output.push_str(&format!(
                "  - Car: {}.\n",
                describe_frequency(&report.most_frequent_car, "crashes")
            ));
            output.push_str(&separator);
        }
        None => {
            output.push_str("No analysis results.\n");
        }
    }

    if !report.stage_errors.is_empty() {
        output.push_str(&format!(
            "{} {}\n",
            "Stage errors:".yellow().bold(),
            report.stage_errors.len()
        ));
        for error in &report.stage_errors {
            output.push_str(&format!("  - {}\n", error));
        }
    }

    // End markdown code block if requested
    if *use_markdown {
        output.push_str("```\n");
    }

    output
}

/// One-line description of a record for the search listing
fn describe_record(record: &Value) -> String {
    let field = |key: &str| {
        record
            .get(key)
            .map(value_as_text)
            .unwrap_or_else(|| "?".to_string())
    };

    format!(
        "ID {}: Car: {} at {}",
        field("id"),
        field("car"),
        field("date_time")
    )
}

/// Render a frequency result, or a no-data marker
fn describe_frequency(entry: &Option<(Value, usize)>, noun: &str) -> String {
    match entry {
        Some((value, count)) => format!("{} with {} {}", value_as_text(value), count, noun),
        None => "no data".to_string(),
    }
}

/// Export a run report to a JSON file
///
/// # Arguments
///
/// * `report` - Report of one pipeline run
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_report_json(report: &RunReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).with_context(|| {
        format!(
            "Failed to create JSON output file: {}",
            output_path.display()
        )
    })?;

    serde_json::to_writer_pretty(file, report).context("Failed to write JSON data")?;

    Ok(())
}
