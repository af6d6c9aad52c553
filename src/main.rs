//! Asset extraction - Entry point
//!
//! Rasterizes the source PDF and writes the quiz datasets.

use budget_assets::{load_config, run_pipeline, PipelineConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "extract-assets")]
#[command(version, about = "Extract PDF pages as images and write the quiz datasets")]
struct Args {
    /// JSON configuration file (defaults to the built-in exercise)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when budget totals or document references are inconsistent
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budget_assets=info,extract_assets=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config: PipelineConfig = load_config(args.config.as_deref())?;
    config.strict |= args.strict;

    tracing::info!(source = %config.source_pdf.display(), output = %config.output_dir.display(), "Starting asset extraction");

    let report = match run_pipeline(&config) {
        Ok(report) => report,
        Err(e) => {
            if e.is_source_error() {
                tracing::error!(source = %config.source_pdf.display(), "source PDF could not be rasterized");
            } else {
                tracing::error!(output = %config.output_dir.display(), "writing assets failed");
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        images = report.pages.len(),
        documents = report.documents,
        budget_entries = report.budget_entries,
        questions = report.questions,
        issues = report.validation.issue_count(),
        "Extraction complete"
    );

    Ok(())
}
