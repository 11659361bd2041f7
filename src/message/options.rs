//! Per-run notification options.

/// Options controlling which optional parts a release message gets.
///
/// Produced once by the configuration layer and passed by reference to the
/// builder; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationOptions {
    /// Route the message to this channel instead of the webhook's default
    pub channel_override: Option<String>,

    /// User ids to mention, in order
    pub mention_ids: Vec<String>,

    /// Announce draft releases too
    pub notify_on_drafts: bool,

    /// Follow-up items listed under the message, in order
    pub action_items: Vec<String>,
}

impl NotificationOptions {
    /// Creates options with nothing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the channel override.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel_override = Some(channel.into());
        self
    }

    /// Sets the users to mention.
    #[must_use]
    pub fn with_mentions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mention_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the action items.
    #[must_use]
    pub fn with_action_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables draft notifications.
    #[must_use]
    pub const fn with_notify_on_drafts(mut self, enabled: bool) -> Self {
        self.notify_on_drafts = enabled;
        self
    }
}
