//! Release message builder.
//!
//! A message is a fixed skeleton (header, version/author fields, notes,
//! buttons) followed by a series of optional enrichments. Each enrichment is
//! gated by its own predicate on [`NotificationOptions`] and runs in the
//! order listed in [`ENRICHMENTS`].

use super::document::{ActionElement, Block, ButtonStyle, MessageDocument};
use super::format::{self, ReleaseKind};
use super::options::NotificationOptions;
use crate::release::ReleaseMetadata;

/// Separator placed between action items.
pub const ACTION_ITEM_SEPARATOR: &str = " | ";

/// Prefix of the action items footer.
pub const ACTION_ITEMS_LABEL: &str = "📝 *Action Items:*";

/// Prefix of the mentions section.
pub const MENTIONS_LABEL: &str = "👥 *Team Notification:*";

/// An optional, independently gated addition to a release message.
#[derive(Debug, Clone, Copy)]
pub struct Enrichment {
    /// Short name used in logs
    pub name: &'static str,
    /// Whether this step runs for the given options
    pub applies: fn(&NotificationOptions) -> bool,
    /// Transforms the document; only called when `applies` returned true
    pub apply: fn(MessageDocument, &NotificationOptions) -> MessageDocument,
}

/// Routes the message to the configured channel.
pub const CHANNEL: Enrichment = Enrichment {
    name: "channel",
    applies: has_channel_override,
    apply: with_channel_override,
};

/// Appends the action items footer.
pub const ACTION_ITEMS: Enrichment = Enrichment {
    name: "action_items",
    applies: has_action_items,
    apply: with_action_items,
};

/// Appends the mentions section.
pub const MENTIONS: Enrichment = Enrichment {
    name: "mentions",
    applies: has_mentions,
    apply: with_mentions,
};

/// All enrichments, in application order.
pub const ENRICHMENTS: [Enrichment; 3] = [CHANNEL, ACTION_ITEMS, MENTIONS];

/// Builds the announcement for a release.
///
/// Returns `None` when the release is a draft and draft notifications are
/// not enabled; that is the only case without a message. Otherwise the
/// result depends only on the inputs, so repeated calls yield equal documents.
#[must_use]
pub fn build(release: &ReleaseMetadata, options: &NotificationOptions) -> Option<MessageDocument> {
    if is_suppressed(release, options) {
        tracing::info!(tag = %release.tag, "Skipping draft release notification");
        return None;
    }

    let document = ENRICHMENTS
        .iter()
        .filter(|step| (step.applies)(options))
        .fold(skeleton(release), |document, step| {
            tracing::debug!(step = step.name, "Applying message enrichment");
            (step.apply)(document, options)
        });

    Some(document)
}

/// Returns true if no message should be sent for this release.
#[must_use]
pub const fn is_suppressed(release: &ReleaseMetadata, options: &NotificationOptions) -> bool {
    release.is_draft && !options.notify_on_drafts
}

/// Builds the part of the message every release gets.
#[must_use]
pub fn skeleton(release: &ReleaseMetadata) -> MessageDocument {
    let kind = ReleaseKind::from_prerelease(release.is_prerelease);
    let label = kind.label();
    let repository = &release.repository_name;
    let notes = format::release_body(release.body.as_deref(), &release.html_url);

    MessageDocument::new(
        format!("{label} Alert: {repository} {}", release.tag),
        vec![
            Block::header(format!("{} {label}: {repository}", kind.emoji())),
            Block::fields_section([
                format!("*Version:*\n{}", release.tag),
                format!("*Released by:*\n{}", release.author_login),
            ]),
            Block::markdown_section(format!("*Release Notes:*\n{notes}")),
            Block::actions(vec![
                ActionElement::link_button("View Release", &release.html_url)
                    .styled(ButtonStyle::Primary),
                ActionElement::link_button("View Repository", &release.repository_url),
            ]),
        ],
    )
}

fn has_channel_override(options: &NotificationOptions) -> bool {
    options.channel_override.is_some()
}

fn with_channel_override(document: MessageDocument, options: &NotificationOptions) -> MessageDocument {
    match &options.channel_override {
        Some(channel) => document.with_channel(channel),
        None => document,
    }
}

fn has_action_items(options: &NotificationOptions) -> bool {
    !options.action_items.is_empty()
}

fn with_action_items(document: MessageDocument, options: &NotificationOptions) -> MessageDocument {
    let items = options.action_items.join(ACTION_ITEM_SEPARATOR);
    document.with_block(Block::markdown_context(format!("{ACTION_ITEMS_LABEL} {items}")))
}

fn has_mentions(options: &NotificationOptions) -> bool {
    !options.mention_ids.is_empty()
}

fn with_mentions(document: MessageDocument, options: &NotificationOptions) -> MessageDocument {
    let mentions = options
        .mention_ids
        .iter()
        .map(|id| format::mention(id))
        .collect::<Vec<_>>()
        .join(" ");
    document.with_block(Block::markdown_section(format!("{MENTIONS_LABEL} {mentions}")))
}
