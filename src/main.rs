//! PII detection CLI application.
//!
//! Runs the detector over a piece of text and prints the spans found, either
//! as an aligned listing or as JSON.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pii_detector::{
    CatalogPreset, DetectorConfig, EntitySpan, ModelSource, PersonFilter, PiiDetector,
};

/// PII Detection Tool
///
/// Finds names, places, organisations, dates, e-mail addresses, phone
/// numbers, PPS numbers and Eircodes in text. Reads standard input when
/// neither --text nor --input is given.
#[derive(Parser)]
#[command(name = "pii-detector")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to scan
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    text: Option<String>,

    /// File to scan
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pattern catalog to use
    #[arg(long, value_enum, default_value_t = CatalogArg::Regional)]
    catalog: CatalogArg,

    /// How PERSON spans that look like street names are filtered
    #[arg(long, value_enum, default_value_t = FilterArg::StreetSuffix)]
    person_filter: FilterArg,

    /// Load the NER lexicon from a JSON file instead of the bundled model
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Print spans as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogArg {
    /// Irish phone numbers
    Regional,
    /// 3-3-4 phone numbers
    Generic,
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Drop names containing the word St or Street
    StreetSuffix,
    /// Drop names containing "st" anywhere (legacy behaviour)
    Substring,
    /// Keep every name
    Off,
}

/// Maps command-line arguments onto detector configuration.
fn build_config(cli: &Cli) -> DetectorConfig {
    let catalog = match cli.catalog {
        CatalogArg::Regional => CatalogPreset::Regional,
        CatalogArg::Generic => CatalogPreset::Generic,
    };
    let person_filter = match cli.person_filter {
        FilterArg::StreetSuffix => PersonFilter::StreetSuffix,
        FilterArg::Substring => PersonFilter::Substring,
        FilterArg::Off => PersonFilter::Disabled,
    };
    let model = cli
        .lexicon
        .as_ref()
        .map(|path| ModelSource::Path(path.clone()))
        .unwrap_or_default();

    DetectorConfig {
        model,
        catalog,
        person_filter,
    }
}

fn read_input(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read standard input")?;
    Ok(buffer)
}

/// Renders spans as the aligned `text → LABEL` listing.
fn render_listing(spans: &[EntitySpan]) -> String {
    let mut out = format!("Found {} entities:\n", spans.len());
    for span in spans {
        out.push_str(&format!("  {:20} → {}\n", span.text, span.label));
    }
    out
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli);
    let detector = PiiDetector::from_config(&config).context("Failed to initialise detector")?;

    let text = read_input(cli.text.as_deref(), cli.input.as_deref())?;
    let spans = detector.detect(&text);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        print!("{}", render_listing(&spans));
    }

    Ok(())
}
