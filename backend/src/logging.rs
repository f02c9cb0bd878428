//! Tracing setup
//!
//! Configuration decides the final log level, so loading it runs under a
//! scoped stdout subscriber first. The process-wide subscriber is installed
//! once the level and optional log file are known.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LoggingConfig};

/// Level used while the configuration itself is being read
const BOOTSTRAP_LEVEL: &str = "info";

/// Load configuration with its log lines going to stdout.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config, anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_LEVEL));
    load_config_with_writer(explicit_path, filter, std::io::stdout)
}

pub(crate) fn load_config_with_writer<W>(
    explicit_path: Option<&str>,
    filter: EnvFilter,
    writer: W,
) -> Result<Config, anyhow::Error>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let bootstrap = fmt().with_env_filter(filter).with_target(false).with_writer(writer).finish();
    tracing::subscriber::with_default(bootstrap, || Config::load(explicit_path))
}

/// Stdout plus an optional daily-rolling file. The guard must outlive `main`.
pub fn init_tracing(logging: &LoggingConfig) -> Result<Option<WorkerGuard>, anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let (file_layer, guard) = match &logging.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| "zoota.log".into());
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::daily(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
