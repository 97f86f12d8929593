//! Logging initialisation for the `prim` CLI.
//!
//! Installs a global `tracing` subscriber with optional JSON formatting and
//! bridges the `log` facade so crates using either API emit structured events.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::debug;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "PRIM_LOG_FORMAT";

static INITIALISED: OnceLock<LoggingInstall> = OnceLock::new();

/// Outcome of [`init_logging`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoggingInstall {
    /// This process installed the global subscriber.
    Installed,
    /// Another global subscriber was already in place and was kept.
    AlreadyConfigured,
}

/// Output format for diagnostics written to stderr.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    Human,
    /// One JSON object per event.
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `PRIM_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// The log format defaults to human-readable output, but can be switched to
/// JSON by setting `PRIM_LOG_FORMAT=json`. Diagnostics go to `stderr` so the
/// rendered summary on `stdout` stays clean. The level is controlled via
/// `RUST_LOG` and defaults to `info`.
///
/// A subscriber installed elsewhere (for example by a test harness) is left
/// in place and reported as [`LoggingInstall::AlreadyConfigured`]. Repeat
/// calls return the outcome of the first one.
///
/// # Errors
/// Returns [`LoggingError`] if the environment variable contains invalid
/// Unicode or names an unsupported format.
pub fn init_logging() -> Result<LoggingInstall, LoggingError> {
    if let Some(outcome) = INITIALISED.get() {
        return Ok(*outcome);
    }

    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => LogFormat::Human,
        Err(err @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source: err,
            });
        }
    };
    let outcome = install_subscriber(format);
    Ok(*INITIALISED.get_or_init(|| outcome))
}

fn install_subscriber(format: LogFormat) -> LoggingInstall {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // The subscriber is built without its own `log` bridge; this is the only
    // place `LogTracer` gets installed.
    let log_bridge = LogTracer::init();
    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    if let Err(err) = log_bridge {
        debug!(error = %err, "log facade already bridged");
    }
    match installed {
        Ok(()) => LoggingInstall::Installed,
        Err(err) => {
            debug!(error = %err, "structured logging already configured elsewhere");
            LoggingInstall::AlreadyConfigured
        }
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
