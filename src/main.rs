//! Mindcheck: mental health assessment page.
//!
//! Main entry point for the web server.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mindcheck::adapters::sanitize::SanitizingMakeWriter;
use mindcheck::config::{LogMode, APP_NAME, APP_VERSION};
use mindcheck::web::{serve, AppState};
use mindcheck::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, warnings) = Config::from_env();

    let (writer, _guard) = if config.log.mode == LogMode::File {
        if let Some(parent) = config.log.file.parent() {
            // Best-effort: the open below reports the real failure.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log.file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(SanitizingMakeWriter::new(writer)))
        .init();

    tracing::info!("Starting {} {}...", APP_NAME, APP_VERSION);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        bind = %config.bind,
        ingest_ms = config.timings.ingest.as_millis() as u64,
        analysis_ms = config.timings.analysis.as_millis() as u64,
        seeded = config.rng_seed.is_some(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config);
    serve(config.bind, state).await?;

    tracing::info!("{} shutdown complete.", APP_NAME);
    Ok(())
}
