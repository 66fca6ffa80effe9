//! Batch processing command for multiple cards.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use aadex_core::{AadhaarParser, AadhaarRecord, AadhaarService, TextFileRecognizer};

use super::load_config;
use super::process::{OutputFormat, format_record};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for front-side text dumps; each `<stem>.front.txt`
    /// must have a `<stem>.back.txt` next to it
    #[arg(required = true)]
    input: String,

    /// Output directory for per-card results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each card
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single card pair.
struct CardResult {
    front: PathBuf,
    record: Option<AadhaarRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern into front/back pairs
    let pairs: Vec<(PathBuf, PathBuf)> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter_map(|front| back_side_of(&front).map(|back| (front, back)))
        .collect();

    if pairs.is_empty() {
        anyhow::bail!("No card pairs found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} card pair(s) to process",
        style("ℹ").blue(),
        pairs.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cards")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = AadhaarParser::with_config(&config.extraction);
    let service = AadhaarService::with_parser(TextFileRecognizer, parser);

    let mut results = Vec::with_capacity(pairs.len());
    for (front, back) in pairs {
        let card_start = Instant::now();

        match service.process(&front, &back) {
            Ok(result) => {
                debug!("processed {}", front.display());
                results.push(CardResult {
                    front,
                    record: Some(result.record),
                    error: None,
                    processing_time_ms: card_start.elapsed().as_millis() as u64,
                });
            }
            Err(e) => {
                let message = e.to_string();
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    anyhow::bail!("{}: {}", front.display(), message);
                }
                error!("failed {}: {}", front.display(), message);
                results.push(CardResult {
                    front,
                    record: None,
                    error: Some(message),
                    processing_time_ms: card_start.elapsed().as_millis() as u64,
                });
            }
        }

        pb.inc(1);
    }
    pb.finish_with_message("Done");

    // Write per-card outputs
    if let Some(ref output_dir) = args.output_dir {
        let extension = match args.format {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        };
        for result in results.iter().filter(|r| r.record.is_some()) {
            let record = result.record.as_ref().unwrap();
            let path = output_dir
                .join(card_stem(&result.front))
                .with_extension(extension);
            fs::write(&path, format_record(record, args.format)?)?;
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded = results.iter().filter(|r| r.record.is_some()).count();
    println!(
        "{} Processed {}/{} card(s) in {:.1}s",
        style("✓").green(),
        succeeded,
        results.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Derive the back-side path from a `<stem>.front.<ext>` path.
fn back_side_of(front: &PathBuf) -> Option<PathBuf> {
    let name = front.file_name()?.to_str()?;
    if !name.contains(".front.") {
        return None;
    }
    let back = front.with_file_name(name.replace(".front.", ".back."));
    back.exists().then_some(back)
}

/// Card stem without the `.front.<ext>` suffix.
fn card_stem(front: &PathBuf) -> String {
    front
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.split(".front.").next().unwrap_or(n).to_string())
        .unwrap_or_else(|| "card".to_string())
}

/// Write a CSV summary of the batch run.
fn write_summary(path: &PathBuf, results: &[CardResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "file",
        "status",
        "idNumber",
        "name",
        "dateOfBirth",
        "gender",
        "address",
        "postalCode",
        "timeMs",
        "error",
    ])?;

    for result in results {
        let file = result.front.display().to_string();
        let time = result.processing_time_ms.to_string();
        match &result.record {
            Some(record) => {
                let fields = record.fields();
                writer.write_record([
                    file.as_str(),
                    "ok",
                    fields[0].1,
                    fields[1].1,
                    fields[2].1,
                    fields[3].1,
                    fields[4].1,
                    fields[5].1,
                    time.as_str(),
                    "",
                ])?;
            }
            None => {
                writer.write_record([
                    file.as_str(),
                    "error",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    time.as_str(),
                    result.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
