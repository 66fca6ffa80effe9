//! Process command - extract identity fields from one card.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use aadex_core::{AadhaarParser, AadhaarRecord, AadhaarService, TextFileRecognizer};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Recognized text dump of the card front
    #[arg(long)]
    front: PathBuf,

    /// Recognized text dump of the card back
    #[arg(long)]
    back: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labeled field lines
    Text,
    /// JSON record
    Json,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    for side in [&args.front, &args.back] {
        if !side.exists() {
            anyhow::bail!("Input file not found: {}", side.display());
        }
    }

    info!(
        "Processing card: front {}, back {}",
        args.front.display(),
        args.back.display()
    );

    let parser = AadhaarParser::with_config(&config.extraction);
    let service = AadhaarService::with_parser(TextFileRecognizer, parser);

    let result = service.process(&args.front, &args.back)?;

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    Ok(())
}

/// Format an extracted record for output.
pub fn format_record(record: &AadhaarRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(record.to_labeled_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
    }
}
