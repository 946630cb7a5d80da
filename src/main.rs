//! Proof-of-contribution generator
//!
//! Scans the input directory, scores the contribution, reports the proof
//! to the validation service, and writes results.json for the chain writer.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use contribution_proof::{Config, ProofGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contribution-proof")]
#[command(version)]
#[command(about = "Generate a proof of contribution for DLP input data", long_about = None)]
struct Cli {
    /// Path to config.toml
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Input directory (overrides config and INPUT_DIR)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Output directory for results.json (overrides config and OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// DLP id (overrides config and DLP_ID)
    #[arg(long)]
    dlp_id: Option<String>,

    /// Validation service URL (overrides config and VALIDATION_ENDPOINT)
    #[arg(long)]
    validation_endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Resolve precedence once: CLI flag > env var > config file
    let mut config = Config::load_from(&cli.config)?;
    let input_dir = cli.input_dir.unwrap_or_else(|| config.input_dir());
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir());
    let dlp_id = cli.dlp_id.unwrap_or_else(|| config.dlp_id());
    let endpoint = cli
        .validation_endpoint
        .unwrap_or_else(|| config.validation_endpoint());
    config.proof.input_dir = input_dir.clone();
    config.proof.output_dir = output_dir.clone();
    config.proof.dlp_id = dlp_id.clone();
    config.validator.endpoint = endpoint;

    info!(
        "Running proof generation for DLP {} (input: {})",
        dlp_id,
        input_dir.display()
    );

    // Refuse to run on a missing or empty input directory
    let has_inputs = input_dir.is_dir()
        && std::fs::read_dir(&input_dir)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
    if !has_inputs {
        anyhow::bail!("No input files found in {}", input_dir.display());
    }

    let generator = ProofGenerator::new(config);
    let proof = generator.generate().await?;

    // results.json is the durable artifact downstream systems read
    let output_path = output_dir.join("results.json");
    let body = serde_json::to_string_pretty(&proof).context("Failed to serialize proof")?;
    std::fs::write(&output_path, body)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        "Proof generation complete: valid={} score={} ({})",
        proof.valid,
        proof.score,
        output_path.display()
    );

    Ok(())
}
