//! CLI argument parsing using clap.
//!
//! Every option that a CI job would normally inject also reads from an
//! environment variable, so the binary can run unmodified as a workflow step.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::release::ReleaseFields;

use super::defaults;

/// Release Notifier
///
/// Announces a release in a chat channel through an incoming webhook.
#[derive(Debug, Parser)]
#[command(name = "release-notifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Incoming webhook URL (https://<host>/services/...)
    #[arg(long = "webhook-url", env = "SLACK_WEBHOOK_URL", hide_env_values = true, global = true)]
    pub webhook_url: Option<String>,

    /// Channel to post to instead of the webhook's default
    #[arg(long, env = "SLACK_CHANNEL")]
    pub channel: Option<String>,

    /// User id to mention (repeatable, or comma-separated)
    #[arg(
        long = "mention",
        value_name = "USER_ID",
        env = "SLACK_MENTIONS",
        value_delimiter = ','
    )]
    pub mentions: Vec<String>,

    /// Also announce draft releases
    #[arg(long = "notify-on-drafts", env = "NOTIFY_ON_DRAFTS")]
    pub notify_on_drafts: bool,

    /// Follow-up item to list under the message (repeatable, or comma-separated)
    #[arg(
        long = "action-item",
        value_name = "ITEM",
        env = "ACTION_ITEMS",
        value_delimiter = ','
    )]
    pub action_items: Vec<String>,

    /// Webhook response timeout in seconds
    #[arg(long, env = "WEBHOOK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Build the message and print it instead of sending it
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Release being announced
    #[command(flatten)]
    pub release: ReleaseArgs,
}

/// Release metadata arguments.
///
/// Any field left unset is taken from the event payload, if one is given.
#[derive(Debug, Default, Args)]
#[command(next_help_heading = "Release")]
pub struct ReleaseArgs {
    /// CI event payload (JSON) describing the release
    #[arg(long = "event-path", value_name = "FILE", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Release tag
    #[arg(long, env = "RELEASE_TAG")]
    pub tag: Option<String>,

    /// Release title
    #[arg(long, env = "RELEASE_NAME")]
    pub name: Option<String>,

    /// Release notes
    #[arg(long, env = "RELEASE_BODY")]
    pub body: Option<String>,

    /// Release page URL
    #[arg(long = "release-url", env = "RELEASE_URL")]
    pub release_url: Option<String>,

    /// Repository name (`repo` or `owner/repo`)
    #[arg(long, env = "REPOSITORY_NAME")]
    pub repository: Option<String>,

    /// Repository page URL
    #[arg(long = "repository-url", env = "REPOSITORY_URL")]
    pub repository_url: Option<String>,

    /// Login of the release author
    #[arg(long, env = "RELEASE_AUTHOR")]
    pub author: Option<String>,

    /// Mark the release as a prerelease (`--prerelease` or `--prerelease=false`)
    #[arg(
        long,
        env = "IS_PRERELEASE",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub prerelease: Option<bool>,

    /// Mark the release as a draft (`--draft` or `--draft=false`)
    #[arg(
        long,
        env = "IS_DRAFT",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub draft: Option<bool>,
}

/// Subcommands for release-notifier
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Send a test message to check the webhook
    TestWebhook,
}

impl From<&ReleaseArgs> for ReleaseFields {
    fn from(args: &ReleaseArgs) -> Self {
        Self {
            tag: args.tag.clone(),
            name: args.name.clone(),
            body: args.body.clone(),
            html_url: args.release_url.clone(),
            repository_name: args.repository.clone(),
            repository_url: args.repository_url.clone(),
            author_login: args.author.clone(),
            is_prerelease: args.prerelease,
            is_draft: args.draft,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the test-webhook command.
    #[must_use]
    pub const fn is_webhook_test(&self) -> bool {
        matches!(self.command, Some(Command::TestWebhook))
    }
}
