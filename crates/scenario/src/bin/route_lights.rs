//! Runs a route scenario with weather-driven lighting against the
//! in-memory world.
use anyhow::{Context, Result};
use scenario::Config;
use scenario::harness::{self, ScenarioFile};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    config.validate().context("invalid configuration")?;

    let path = &config.harness.scenario_path;
    let file = ScenarioFile::load(path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded scenario");

    let report = harness::run(&file.build(), &config)?;

    println!(
        "status={} ticks={} night_ticks={} lights_on={} turn_on_calls={} turn_off_calls={} day_night_cycle_restored={}",
        report.status,
        report.ticks,
        report.night_ticks,
        report.lights_on,
        report.stats.turn_on_calls,
        report.stats.turn_off_calls,
        report.day_night_cycle_restored,
    );
    Ok(())
}
