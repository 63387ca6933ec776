//! Demonstration scenarios
//!
//! Each scenario drives the library the way a consumer would: build an
//! input, capture it, then branch on the variant to decide what to log.

use std::time::Duration;

use tracing::{error, info};
use verdict::prelude::*;

use crate::config::Scenario;

/// Raised by the async failure scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoError {
    pub code: u16,
    pub reason: &'static str,
}

/// Result of one scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub scenario: Scenario,
    /// Whether the library behaved as the scenario expects
    pub passed: bool,
}

pub async fn run(scenario: Scenario, delay: Duration) -> Report {
    let passed = match scenario {
        Scenario::SyncSuccess => sync_success(),
        Scenario::SyncFailure => sync_failure(),
        Scenario::AsyncSuccess => async_success(delay).await,
        Scenario::AsyncFailure => async_failure(delay).await,
        Scenario::Chain => chain(),
        Scenario::Maybe => maybe(),
    };
    Report { scenario, passed }
}

fn sync_success() -> bool {
    let res = capture(|| 1 + 1);

    if res.is_success() {
        let value = res.unwrap();
        info!(value, "sync capture succeeded");
        value == 2
    } else {
        error!(error = %res.unwrap_failure(), "sync capture failed");
        false
    }
}

fn sync_failure() -> bool {
    let res = capture(|| -> i32 { std::panic::panic_any("Boom!!!") });

    if res.is_success() {
        info!(value = res.unwrap(), "sync capture succeeded");
        false
    } else {
        let panic = res.unwrap_failure();
        error!("Error: {panic}");
        panic.downcast_ref::<&str>() == Some(&"Boom!!!")
    }
}

async fn async_success(delay: Duration) -> bool {
    let res = capture_async(|| async move {
        tokio::time::sleep(delay).await;
        100
    })
    .await;

    if res.is_success() {
        let value = res.unwrap();
        info!(value, delay_ms = delay.as_millis(), "async capture succeeded");
        value == 100
    } else {
        error!(error = %res.unwrap_failure(), "async capture failed");
        false
    }
}

async fn rejected(delay: Duration) -> u32 {
    tokio::time::sleep(delay).await;
    std::panic::panic_any(DemoError {
        code: 503,
        reason: "upstream unavailable",
    })
}

async fn async_failure(delay: Duration) -> bool {
    let res = capture_async(|| rejected(delay)).await;

    if res.is_success() {
        info!(value = res.unwrap(), "async capture succeeded");
        return false;
    }

    match res.unwrap_failure().downcast::<DemoError>() {
        Ok(err) => {
            error!(code = err.code, reason = err.reason, "async capture failed");
            err.code == 503
        }
        Err(panic) => {
            error!(error = %panic, "async capture failed with an unexpected payload");
            false
        }
    }
}

fn parse_port(raw: &str) -> Outcome<u16, String> {
    Outcome::from(raw.trim().parse::<u16>()).map_failure(|e| format!("`{raw}`: {e}"))
}

fn non_privileged(port: u16) -> Outcome<u16, String> {
    if port >= 1024 {
        Success(port)
    } else {
        Failure(format!("port {port} is privileged"))
    }
}

fn chain() -> bool {
    let text = Success::<i32, String>(42)
        .chain(|v| Success(v.to_string()))
        .unwrap();
    info!(%text, "chained success");

    let accepted = parse_port("8080").chain(non_privileged);
    let privileged = parse_port("80").chain(non_privileged);
    let garbled = parse_port("eighty").chain(non_privileged);

    for (input, outcome) in [("8080", &accepted), ("80", &privileged), ("eighty", &garbled)] {
        if outcome.is_success() {
            info!(input, "port accepted");
        } else {
            info!(input, reason = ?outcome, "port rejected");
        }
    }

    text == "42" && accepted == Success(8080) && privileged.is_failure() && garbled.is_failure()
}

fn maybe() -> bool {
    let configured: Maybe<u16> = Maybe::from(std::env::var("VERDICT_DEMO_PORT").ok())
        .chain(|raw| parse_port(&raw).to_option_success());
    let port = configured.unwrap_or(8080);
    info!(port, configured = configured.is_present(), "port resolved");

    let doubled = Present(21).map(|v| v * 2);
    let missing: Maybe<i32> = Absent;
    info!(doubled = doubled.unwrap_or(0), missing = missing.unwrap_or(-1), "maybe values");

    doubled == Present(42) && missing.map(|v| v * 2).is_absent() && port != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Scenario::SyncSuccess)]
    #[case(Scenario::SyncFailure)]
    #[case(Scenario::Chain)]
    #[case(Scenario::Maybe)]
    #[tokio::test]
    async fn test_sync_scenarios_pass(#[case] scenario: Scenario) {
        let report = run(scenario, Duration::ZERO).await;
        assert!(report.passed, "{scenario} did not pass");
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_scenarios_pass() {
        for scenario in [Scenario::AsyncSuccess, Scenario::AsyncFailure] {
            let report = run(scenario, Duration::from_secs(1)).await;
            assert_eq!(report, Report { scenario, passed: true });
        }
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(" 8080 "), Success(8080));
        assert_eq!(
            parse_port("eighty"),
            Failure("`eighty`: invalid digit found in string".to_owned())
        );
        assert_eq!(
            parse_port("80").chain(non_privileged),
            Failure("port 80 is privileged".to_owned())
        );
    }
}
