use anyhow::anyhow;
use interval_core::config::ConfigError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::{CliError, CliResult};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `level`. Logs go to stderr so stdout stays free for
/// the telemetry JSON. A malformed `level` is a usage error.
pub fn init_tracing(level: &str) -> CliResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| ConfigError::InvalidValue {
            name: "log-level",
            reason: e.to_string(),
        })?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let subscriber = Registry::default().with(env_filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Other(anyhow!(e).context("install tracing subscriber")))?;
    Ok(())
}
