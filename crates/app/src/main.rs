//! Precast Catalog CLI

use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

const DEFAULT_LOG_FILTER: &str = "precast_app=info,warn";

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    init_logging();

    let cli = cli::Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
