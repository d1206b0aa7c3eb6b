//! msgchain - Main Entry Point

use anyhow::Result;
use clap::Parser;
use msgchain_cli::{run, Args};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, the resolved message to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting msgchain lookup");

    match run(&args) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            error!("Lookup failed: {}", e);
            Err(e.into())
        }
    }
}
