//! `marqueectl`: browse, search and inspect the Marquee catalog.

mod cli;
mod commands;
mod output;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use marquee_config::{ConfigLoader, ConfigLoaderOptions};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let loader = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config.clone(),
        env_file: cli.env_file.clone(),
    });
    let load = loader.load().context("failed to load configuration")?;
    for warning in load.warnings.iter() {
        warn!("{warning}");
    }
    debug!(config = ?load.config, "Configuration loaded");

    let rendered = commands::run(cli.command, &load.config).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}
