//! Logging setup for the `kbqa` binary
//!
//! Events go to stderr so that formatted output on stdout stays clean.
//! `RUST_LOG` takes precedence over the filter derived from `-v` flags.

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Whether to include file/line information in logs
    pub include_location: bool,

    /// Whether to colorize output
    pub ansi: bool,

    /// Default log level filter
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_verbosity(0)
    }
}

impl LoggingConfig {
    /// Maps the number of `-v` flags to a filter for the kbqa crates
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        Self {
            include_location: verbose >= 3,
            ansi: true,
            default_filter: format!(
                "warn,kbqa_cli={level},kbqa_sparql={level},kbqa_answers={level}"
            ),
        }
    }
}

/// Initialize the logging system with the given configuration
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(config.ansi)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::debug!(filter = %config.default_filter, "Logging system initialized");

    Ok(())
}
