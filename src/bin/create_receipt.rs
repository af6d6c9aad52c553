//! Receipt renderer - Entry point
//!
//! Draws the rent receipt image.

use budget_assets::{create_receipt, load_config, ReceiptConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "create-receipt")]
#[command(version, about = "Render the rent receipt image")]
struct Args {
    /// JSON configuration file (defaults to the built-in receipt)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budget_assets=info,create_receipt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config: ReceiptConfig = load_config(args.config.as_deref())?;
    let path = create_receipt(&config)?;

    tracing::info!(path = %path.display(), "Receipt written");
    Ok(())
}
