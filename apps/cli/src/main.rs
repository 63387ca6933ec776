//! `verdict` — runs the demonstration scenarios and logs each outcome.

mod config;
mod demo;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli.log)?;

    // Captured panics are expected here; report them through tracing
    // instead of the default stderr hook.
    std::panic::set_hook(Box::new(|info| {
        debug!(target: "verdict::panic", "{info}");
    }));

    let delay = cli.delay();
    let mut failed = 0_usize;

    for scenario in cli.selected() {
        let report = demo::run(scenario, delay).await;
        if report.passed {
            info!(%scenario, "scenario passed");
        } else {
            failed += 1;
            warn!(%scenario, "scenario did not behave as expected");
        }
    }

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(failed, "some scenarios failed");
        Ok(ExitCode::FAILURE)
    }
}
