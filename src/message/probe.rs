//! Connectivity probe message used by the `test-webhook` command.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

use super::document::{Block, MessageDocument};

/// Builds a self-describing test message stamped with `sent_at`.
#[must_use]
pub fn probe_message(sent_at: SystemTime) -> MessageDocument {
    let timestamp = DateTime::<Utc>::from(sent_at).to_rfc3339_opts(SecondsFormat::Millis, true);

    MessageDocument::new(
        "🧪 Webhook Test from Release Notifier",
        vec![
            Block::header("🧪 Webhook Test Message"),
            Block::markdown_section(format!(
                "*Status:* ✅ Your webhook is working correctly!\n*Test Time:* {timestamp}"
            )),
            Block::markdown_section(
                "*Next Steps:*\n\
                 • Add `SLACK_WEBHOOK_URL` to your repository secrets\n\
                 • Create a release to test the full workflow\n\
                 • Customize your notification settings",
            ),
            Block::markdown_context("🚀 Sent from release-notifier test-webhook"),
        ],
    )
}
