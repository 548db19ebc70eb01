use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nexus_installer::{cli::Cli, io::paths::InstallPaths, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr so they never corrupt the terminal UI frame.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let paths = InstallPaths::discover().context("failed to locate install paths")?;
    tui::run(paths).await.context("wizard failed")?;
    Ok(())
}
