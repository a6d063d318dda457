//! Icon generator
//!
//! Writes assets/icon.png, assets/adaptive-icon.png and
//! assets/splash-icon.png relative to the working directory.
//!
//! Run with: `cargo run --bin generate_icons`

use anyhow::Context;
use asset_icons::{GeneratorConfig, generate};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = GeneratorConfig::default();
    tracing::debug!(?config, "Starting generation");

    generate::run(&config).context("Error generating icons")?;
    Ok(())
}
