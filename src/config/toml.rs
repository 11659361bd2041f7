//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Notification content configuration
    #[serde(default)]
    pub notify: NotifySection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Incoming webhook URL
    pub url: Option<String>,

    /// Channel override
    pub channel: Option<String>,

    /// Response timeout in seconds
    pub timeout: Option<u64>,
}

/// Notification content section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifySection {
    /// User ids to mention
    #[serde(default)]
    pub mentions: Vec<String>,

    /// Announce draft releases too
    #[serde(default)]
    pub notify_on_drafts: bool,

    /// Follow-up items listed under the message
    #[serde(default)]
    pub action_items: Vec<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# Release Notifier Configuration File

[webhook]
# Incoming webhook URL (required; prefer the SLACK_WEBHOOK_URL secret)
# Must look like https://<host>/services/<id>
# url = "https://hooks.slack.com/services/T000/B000/XXXX"

# Post to this channel instead of the webhook's default
# channel = "#releases"

# Response timeout in seconds (default: 10)
# timeout = 10

[notify]
# User ids to mention under the announcement
# Note: CLI/environment values REPLACE this list entirely (not merged)
# mentions = ["U0123456789"]

# Announce draft releases too (default: false)
notify_on_drafts = false

# Follow-up items listed under the announcement
# Note: CLI/environment values REPLACE this list entirely (not merged)
# action_items = ["Update documentation", "Announce to stakeholders", "Test integration"]
"##
    .to_string()
}
