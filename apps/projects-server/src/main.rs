//! Projects Server binary

use anyhow::{Context, Result};
use clap::Parser;
use projects_server::{config::AppConfig, logging, server};
use std::path::PathBuf;

/// Serve the projects pages
#[derive(Debug, Parser)]
#[command(name = "projects-server", version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.config {
        if !path.is_file() {
            anyhow::bail!("config file not found: {}", path.display());
        }
    }

    let config = AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    logging::init(&config.logging)?;

    server::run(config).await
}
