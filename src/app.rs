//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use release_notifier::config::{ConfigError, field};
use release_notifier::release::ReleaseError;
use release_notifier::webhook::{DeliveryError, HttpError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0) - message sent, dry run, or draft skipped.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing webhook URL or release data.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - webhook rejected the message, network failure, timeout.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::WEBHOOK_URL => {
            eprintln!("\nAdd the webhook URL as the SLACK_WEBHOOK_URL secret in your CI settings.");
            eprintln!("Run 'release-notifier init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'release-notifier init' to generate a configuration template.");
        }
        ConfigError::InvalidUrl { .. } => {
            eprintln!("\nIncoming webhook URLs look like https://hooks.slack.com/services/...");
        }
        _ => {}
    }
}

/// Prints helpful hints for missing or unreadable release data.
pub fn print_release_hint(error: &ReleaseError) {
    match error {
        ReleaseError::MissingField { .. } => {
            eprintln!("\nRun from a release-triggered workflow (GITHUB_EVENT_PATH is read),");
            eprintln!("or pass the release with --tag, --release-url, --repository, etc.");
        }
        ReleaseError::NoRelease => {
            eprintln!("\nThe event payload is not from a 'release' trigger.");
            eprintln!("Trigger the workflow on 'release' events, or pass every release field explicitly.");
        }
        _ => {}
    }
}

/// Prints troubleshooting steps for a failed delivery.
pub fn print_delivery_hint(error: &RunError) {
    if let Some(code) = transport_code(error) {
        eprintln!("\nCode: {code}");
    }
    if let Some(hint) = delivery_hint(error) {
        eprintln!("\nTroubleshooting: {hint}");
    }
}

fn delivery_hint(error: &RunError) -> Option<&'static str> {
    let delivery = match error {
        RunError::Delivery(delivery) => delivery,
        RunError::UnexpectedResponse { .. } => {
            return Some("The URL answered but is not an incoming webhook; check it was copied in full.");
        }
        RunError::Encode(_) => return None,
    };

    if let Some(status) = delivery.status() {
        return Some(match status.as_u16() {
            404 => "The webhook URL was not found; it may have been revoked. Create a new one.",
            403 => "The webhook is not allowed to post here; check the app's channel permissions.",
            400..=499 => "The webhook refused the message; check the channel override and URL.",
            _ => "The chat service failed to handle the message; try again later.",
        });
    }

    match delivery {
        DeliveryError::Transport(HttpError::Timeout) => {
            Some("No response in time; check connectivity or raise --timeout.")
        }
        DeliveryError::Transport(_) => {
            Some("Could not reach the webhook host; check the URL and network access.")
        }
        DeliveryError::Rejected { .. } | DeliveryError::Encode(_) => None,
    }
}

fn transport_code(error: &RunError) -> Option<&'static str> {
    match error {
        RunError::Delivery(DeliveryError::Transport(cause)) => Some(cause.code()),
        _ => None,
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so a dry-run payload on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(code: u16) -> RunError {
        RunError::Delivery(DeliveryError::Rejected {
            status: http::StatusCode::from_u16(code).unwrap(),
            body: String::new(),
        })
    }

    #[test]
    fn hints_follow_rejection_status() {
        assert!(delivery_hint(&rejected(404)).unwrap().contains("revoked"));
        assert!(delivery_hint(&rejected(403)).unwrap().contains("permissions"));
        assert!(delivery_hint(&rejected(400)).unwrap().contains("refused"));
        assert!(delivery_hint(&rejected(503)).unwrap().contains("try again"));
    }

    #[test]
    fn transport_failures_carry_code() {
        let timeout = RunError::Delivery(DeliveryError::Transport(HttpError::Timeout));
        let connection = RunError::Delivery(DeliveryError::Transport(HttpError::Connection(
            "dns error".into(),
        )));

        assert_eq!(transport_code(&timeout), Some("TIMEOUT"));
        assert_eq!(transport_code(&connection), Some("CONNECTION"));
        assert!(delivery_hint(&timeout).unwrap().contains("--timeout"));
        assert!(delivery_hint(&connection).unwrap().contains("network"));
    }

    #[test]
    fn rejection_has_no_transport_code() {
        assert_eq!(transport_code(&rejected(500)), None);
    }

    #[test]
    fn unexpected_response_has_hint() {
        let error = RunError::UnexpectedResponse {
            status: http::StatusCode::OK,
            body: "hello".to_string(),
        };

        assert!(delivery_hint(&error).unwrap().contains("not an incoming webhook"));
    }
}
