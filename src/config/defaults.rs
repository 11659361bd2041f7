//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default webhook response timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default file name written by `init`.
pub const CONFIG_FILE: &str = "release-notifier.toml";

/// Path prefix every incoming-webhook URL must have.
pub const WEBHOOK_PATH_PREFIX: &str = "/services/";

/// Default webhook response timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
