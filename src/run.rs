//! Application execution logic.
//!
//! This module turns a validated configuration and a job into a single
//! webhook delivery (or a printed payload in dry-run mode).

use thiserror::Error;

use release_notifier::config::ValidatedConfig;
use release_notifier::message::{self, MessageDocument, NotificationOptions, probe_message};
use release_notifier::release::ReleaseMetadata;
use release_notifier::time::{Clock, SystemClock};
use release_notifier::webhook::{
    Delivered, DeliveryError, HttpWebhook, NotificationSender, ReqwestClient,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Response body an incoming webhook returns when it accepted a message.
const WEBHOOK_OK_BODY: &str = "ok";

/// What this run should deliver.
#[derive(Debug)]
pub enum Job {
    /// Announce a release.
    Notify(ReleaseMetadata),
    /// Send the connectivity probe message.
    TestWebhook,
}

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The webhook rejected the message or could not be reached.
    #[error("Webhook delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    /// The message could not be rendered for a dry run.
    #[error("Failed to render message: {0}")]
    Encode(#[source] serde_json::Error),

    /// The probe was accepted with a body an incoming webhook never sends.
    #[error("Unexpected webhook response (HTTP {}): {body}", .status.as_u16())]
    UnexpectedResponse {
        /// Response status code
        status: http::StatusCode,
        /// Response body
        body: String,
    },
}

/// How a successful run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The webhook accepted the message.
    Sent(Delivered),
    /// Draft release without draft notifications; nothing was sent.
    Suppressed,
    /// Dry-run mode; holds the pretty-printed payload.
    DryRun(String),
}

/// Executes one job against the configured webhook.
///
/// # Errors
///
/// Returns an error if delivery fails or the probe gets an unexpected answer.
///
/// Excluded from coverage - builds a real HTTP client.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig, job: Job) -> Result<RunOutcome, RunError> {
    let webhook = create_webhook(config);
    tracing::debug!(timeout_secs = webhook.timeout().as_secs(), "Webhook sender ready");

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - the message will be printed but not sent");
    }

    match job {
        Job::Notify(release) => notify(&webhook, &release, &config.options, config.dry_run).await,
        Job::TestWebhook => test_webhook(&webhook, &SystemClock, config.dry_run).await,
    }
}

/// Creates the webhook sender from configuration.
fn create_webhook(config: &ValidatedConfig) -> HttpWebhook<ReqwestClient> {
    HttpWebhook::new(ReqwestClient::new(), config.webhook_url.clone()).with_timeout(config.timeout)
}

/// Builds the release announcement and delivers it.
async fn notify<S: NotificationSender>(
    sender: &S,
    release: &ReleaseMetadata,
    options: &NotificationOptions,
    dry_run: bool,
) -> Result<RunOutcome, RunError> {
    tracing::info!(
        repository = %release.repository_name,
        tag = %release.tag,
        prerelease = release.is_prerelease,
        "Preparing release notification"
    );

    let Some(document) = message::build(release, options) else {
        tracing::info!("No notification to send");
        return Ok(RunOutcome::Suppressed);
    };

    let outcome = deliver(sender, &document, dry_run).await?;
    if matches!(outcome, RunOutcome::Sent(_)) {
        tracing::info!("Release notification sent for {}", release.title());
    }
    Ok(outcome)
}

/// Sends the probe message and checks the webhook's answer.
///
/// An incoming webhook answers `ok`; any other 2xx body means the URL
/// points at something else.
async fn test_webhook<S: NotificationSender, C: Clock>(
    sender: &S,
    clock: &C,
    dry_run: bool,
) -> Result<RunOutcome, RunError> {
    let document = probe_message(clock.now());

    match deliver(sender, &document, dry_run).await? {
        RunOutcome::Sent(delivered) if delivered.body.trim() != WEBHOOK_OK_BODY => {
            Err(RunError::UnexpectedResponse {
                status: delivered.status,
                body: delivered.body,
            })
        }
        outcome => {
            if matches!(outcome, RunOutcome::Sent(_)) {
                tracing::info!("Webhook test message accepted");
            }
            Ok(outcome)
        }
    }
}

/// Sends a document, or renders it when `dry_run` is set.
async fn deliver<S: NotificationSender>(
    sender: &S,
    document: &MessageDocument,
    dry_run: bool,
) -> Result<RunOutcome, RunError> {
    if dry_run {
        let payload = serde_json::to_string_pretty(document).map_err(RunError::Encode)?;
        tracing::debug!(bytes = payload.len(), "Dry-run: skipping webhook");
        return Ok(RunOutcome::DryRun(payload));
    }

    let delivered = sender.send(document).await?;
    tracing::info!(
        status = %delivered.status,
        response = %delivered.body,
        "Webhook accepted message"
    );
    Ok(RunOutcome::Sent(delivered))
}
