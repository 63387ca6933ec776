//! Subscriber setup

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogConfig, LogFormat};

const DEFAULT_DIRECTIVE: &str = "info";

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filter parsing error
    #[error("invalid log filter `{directive}`: {reason}")]
    Filter { directive: String, reason: String },
}

/// `--log-level` / `VERDICT_LOG`, then `RUST_LOG`, then `info`.
fn directive(config: &LogConfig) -> String {
    config
        .level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_owned())
}

pub fn filter(config: &LogConfig) -> Result<EnvFilter, LogError> {
    let directive = directive(config);
    EnvFilter::try_new(&directive).map_err(|e| LogError::Filter {
        reason: e.to_string(),
        directive,
    })
}

/// Install the global subscriber, writing to stderr.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(filter(config)?);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true);

    match config.format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
        LogFormat::Compact => registry.with(layer.compact()).try_init()?,
        LogFormat::Json => registry.with(layer.json()).try_init()?,
    }

    Ok(())
}
