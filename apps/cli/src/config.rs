//! Command-line and environment configuration

use std::fmt;
use std::time::Duration;

use clap::{Args, Parser, ValueEnum};

/// Run the verdict demonstration scenarios and log their outcomes
#[derive(Debug, Parser)]
#[command(name = "verdict", version, about, long_about = None)]
pub struct Cli {
    /// Delay of the async scenarios, in milliseconds
    #[arg(long, env = "VERDICT_DELAY_MS", default_value_t = 1000)]
    pub delay_ms: u64,

    #[command(flatten)]
    pub log: LogConfig,

    /// Scenarios to run (all when omitted)
    #[arg(value_enum)]
    pub scenarios: Vec<Scenario>,
}

impl Cli {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Requested scenarios in order, or every scenario.
    pub fn selected(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() {
            Scenario::value_variants().to_vec()
        } else {
            self.scenarios.clone()
        }
    }
}

/// Logging options
#[derive(Debug, Clone, Args)]
pub struct LogConfig {
    /// Tracing filter directive, e.g. `debug` or `verdict=debug,info`
    #[arg(long = "log-level", env = "VERDICT_LOG")]
    pub level: Option<String>,

    /// Output format
    #[arg(
        long = "log-format",
        env = "VERDICT_LOG_FORMAT",
        value_enum,
        default_value = "compact"
    )]
    pub format: LogFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    Compact,
    /// Structured JSON
    Json,
}

/// A demonstration scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// `capture` over a closure that returns
    SyncSuccess,
    /// `capture` over a closure that panics with a string
    SyncFailure,
    /// `capture_async` over a future that resolves after the delay
    AsyncSuccess,
    /// `capture_async` over a future that panics after the delay
    AsyncFailure,
    /// Sequencing fallible steps with `chain`
    Chain,
    /// `Maybe` defaults and mapping
    Maybe,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}
