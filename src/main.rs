// src/main.rs

use glyphset::{
    batch::BatchDriver,
    config::Config,
    fonts::{FontRegistry, FontSources},
};

// Logging
use anyhow::{bail, Context};
use log::{error, info};

/// Main entry point for the `glyphset` dataset generator.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting glyphset...");

    let config = Config::load_from_env().context("Failed to load configuration")?;
    info!(
        "Alphabet ({} characters): {}",
        config.alphabet.len(),
        config.alphabet
    );
    info!("Fonts: {:?}", config.fonts.names);

    // Fonts are required: any load failure ends the process before generation.
    let sources = FontSources::read_all(&config.fonts).context("Failed to read fonts")?;
    let registry = FontRegistry::load(&sources).context("Failed to parse fonts")?;

    let report = BatchDriver::from_config(&registry, &config)
        .run()
        .context("Dataset generation aborted")?;

    if !report.is_success() {
        for failure in &report.failures {
            error!(
                "{:?} in font {} '{}': {}",
                failure.ch, failure.font_index, failure.font, failure.error
            );
        }
        bail!(
            "{} of {} images failed",
            report.failures.len(),
            report.failures.len() + report.written.len()
        );
    }

    info!("glyphset finished: {} images written.", report.written.len());
    Ok(())
}
