use crate::config::TelemetryConfig;
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Logging auf stderr, damit stdout für Ergebnis und Export frei bleibt.
/// `RUST_LOG` hat Vorrang vor `--log-level`.
pub fn init(config: &TelemetryConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|source| {
            Error::Telemetry(format!(
                "invalid log level/filter '{}': {}",
                config.log_level, source
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| Error::Telemetry(err.to_string()))
}
