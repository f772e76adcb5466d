//! App Profiles analysis binary
//!
//! Loads both marketplace datasets, runs the cleaning pipelines and prints the
//! analysis report.
//!
//! # Usage
//!
//! ```bash
//! # Use app_profiles.toml from the working directory, or built-in defaults
//! cargo run --bin app-profiles
//!
//! # Explicit configuration file
//! APP_PROFILES_CONFIG=./local.toml cargo run --bin app-profiles
//! ```
//!
//! # Environment Variables
//!
//! - `APP_PROFILES_CONFIG`: Path to a configuration file
//! - `RUST_LOG`: Log filter directives (default: info)

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use app_profiles::config::AnalysisConfig;
use app_profiles::io::{DataSource, DatasetLoader};
use app_profiles::services::{analyze, ReportFormat};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting app profile analysis");

    let config = AnalysisConfig::load().context("failed to load configuration")?;

    let play_source = DataSource::parse(&config.sources.play_store);
    let play_store = DatasetLoader::load_play_store(&play_source)
        .with_context(|| format!("failed to load Google Play dataset from {}", play_source))?;

    let app_source = DataSource::parse(&config.sources.app_store);
    let app_store = DatasetLoader::load_app_store(&app_source)
        .with_context(|| format!("failed to load App Store dataset from {}", app_source))?;

    let report = analyze(&play_store, &app_store, &config).context("analysis failed")?;

    match config.report.format {
        ReportFormat::Table => println!("{}", report),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    info!("Analysis complete");
    Ok(())
}
