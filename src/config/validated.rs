//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::message::NotificationOptions;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Built once at startup and passed by reference afterwards; nothing reads
/// configuration from the environment after this point.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Incoming webhook URL (required)
    pub webhook_url: Url,

    /// Webhook response timeout
    pub timeout: Duration,

    /// What the message should contain
    pub options: NotificationOptions,

    /// Dry-run mode (print the message instead of sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ webhook: {}, timeout: {}s, channel: {}, mentions: {}, action_items: {}, \
             notify_on_drafts: {}, dry_run: {} }}",
            redact(self.webhook_url.as_str()),
            self.timeout.as_secs(),
            self.options.channel_override.as_deref().unwrap_or("default"),
            self.options.mention_ids.len(),
            self.options.action_items.len(),
            self.options.notify_on_drafts,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (including their environment fallbacks) take precedence
    /// over TOML values. Non-empty CLI lists replace TOML lists; the
    /// draft flag is enabled if either source enables it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing
    /// - The webhook URL is not `https://<host>/services/<id>`
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook_url = Self::resolve_webhook_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let options = Self::resolve_options(cli, toml);

        Ok(Self {
            webhook_url,
            timeout,
            options,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_webhook_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = non_blank(cli.webhook_url.as_deref())
            .or_else(|| toml.and_then(|t| non_blank(t.webhook.url.as_deref())))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_URL,
                    "Use --webhook-url, set SLACK_WEBHOOK_URL, or set webhook.url in config file",
                )
            })?;

        validate_webhook_url(url_str)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_options(cli: &Cli, toml: Option<&TomlConfig>) -> NotificationOptions {
        let notify = toml.map(|t| &t.notify);

        let channel = non_blank(cli.channel.as_deref())
            .or_else(|| toml.and_then(|t| non_blank(t.webhook.channel.as_deref())))
            .map(ToString::to_string);

        let mention_ids = prefer_cli_list(&cli.mentions, notify.map(|n| n.mentions.as_slice()));
        let action_items =
            prefer_cli_list(&cli.action_items, notify.map(|n| n.action_items.as_slice()));

        let notify_on_drafts = cli.notify_on_drafts || notify.is_some_and(|n| n.notify_on_drafts);

        NotificationOptions {
            channel_override: channel,
            mention_ids,
            notify_on_drafts,
            action_items,
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// Checks that `raw` is an incoming-webhook URL: `https://<host>/services/<id-path>`.
fn validate_webhook_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        url: redact(raw),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

    if url.scheme() != "https" {
        return Err(invalid("webhook URL must use https"));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("webhook URL must have a host"));
    }

    let has_id = url
        .path()
        .strip_prefix(defaults::WEBHOOK_PATH_PREFIX)
        .is_some_and(|id| !id.trim_matches('/').is_empty());
    if !has_id {
        return Err(invalid("expected a path of the form /services/<id>"));
    }

    Ok(url)
}

/// Hides everything after the `/services/` prefix; webhook ids are secrets.
fn redact(raw: &str) -> String {
    raw.find(defaults::WEBHOOK_PATH_PREFIX).map_or_else(
        || raw.to_string(),
        |idx| format!("{}***", &raw[..idx + defaults::WEBHOOK_PATH_PREFIX.len()]),
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trims items and drops empty ones.
fn normalize_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Uses the CLI list if it has any non-empty item, else the TOML list.
fn prefer_cli_list(cli: &[String], toml: Option<&[String]>) -> Vec<String> {
    let from_cli = normalize_list(cli);
    if !from_cli.is_empty() {
        return from_cli;
    }

    toml.map(normalize_list).unwrap_or_default()
}
