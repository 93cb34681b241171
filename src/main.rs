/// Accident Analyzer - a small traffic-accident dataset tool
/// This tool generates a sample dataset, analyzes it, and cleans up after itself
///
/// The main entry point for the accident analyzer application. It parses
/// command-line arguments, sets up logging, and drives the pipeline.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{error, LevelFilter};

use accident_analyzer::app;
use accident_analyzer::config::PipelineConfig;
use accident_analyzer::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "accident_analyzer",
    version = "0.1.0",
    about = "A small traffic-accident dataset generator and analyzer",
    long_about = "This tool generates a sample dataset of traffic-accident records,
writes it to a JSON file, loads it back, and reports:
- accidents in a fixed city, found by case-insensitive substring search
- the most frequent accident city
- the most frequently crashed car model
The dataset file is removed again at the end of every run."
)]
struct Args {
    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export the run report to a JSON file
    #[arg(long = "json")]
    json: Option<String>,

    /// Suppress the detailed report
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: accident_analyzer.log)
    #[arg(long = "log-file", default_value = "accident_analyzer.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    // The run itself is not configurable: one canonical dataset path, one
    // fixed sample dataset
    let config = PipelineConfig::default();
    let report = app::run_pipeline(&config);

    // Export the report if requested
    if let Some(json_path) = &args.json {
        if let Err(e) = output_formatter::export_report_json(&report, Path::new(json_path)) {
            error!("Failed to export report: {:#}", e);
            eprintln!("{} {:#}", "Failed to export report:".red(), e);
        }
    }

    // Print the detailed report if not in quiet mode
    if !args.quiet {
        println!("\n{}", "=".repeat(80).bold());
        println!("{} {}", "Results for:".cyan(), report.dataset_path);
        println!("{}", "=".repeat(80).bold());
        println!("{}", output_formatter::format_report(&report, &args.md));
    }

    // Print summary; all failures were already reported as text, so the
    // process still exits 0
    let elapsed_time = start_time.elapsed();
    println!("{}", "Run Complete".bold());
    println!(
        "{} {}",
        "Records loaded:".green(),
        report.records_loaded.unwrap_or(0)
    );
    println!(
        "{} {}",
        "Stage errors:".green(),
        report.stage_errors.len()
    );
    println!(
        "{} {:.2} seconds",
        "Time elapsed:".green(),
        elapsed_time.as_secs_f64()
    );

    Ok(())
}

/// Set up logging with file and console output
fn setup_logging(args: &Args) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Initialize logger
    builder.init();

    Ok(())
}
