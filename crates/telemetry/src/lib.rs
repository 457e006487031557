//! Logging bootstrap shared by every Busline binary.

use anyhow::Context;
use busline_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Build the log filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("invalid log level '{}'", settings.log_level)),
    }
}

/// Install the global tracing subscriber, logging to stdout.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    install(settings, std::io::stdout)
}

/// Same as [`init`] but logs to stderr, keeping stdout for command output.
pub fn init_to_stderr(settings: &TelemetrySettings) -> anyhow::Result<()> {
    install(settings, std::io::stderr)
}

fn install<W>(settings: &TelemetrySettings, writer: W) -> anyhow::Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter(settings)?;

    let installed = match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .try_init()
            .is_ok(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_current_span(true)
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(
            target: "busline-telemetry",
            format = ?settings.log_format,
            "tracing subscriber installed"
        );
    }

    Ok(())
}
