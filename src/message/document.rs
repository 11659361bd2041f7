//! Wire types for the webhook message document.
//!
//! The shapes follow the block-kit style schema accepted by chat incoming
//! webhooks: a plain `text` fallback, an ordered list of typed `blocks`, and
//! an optional `channel` routing override.

use serde::Serialize;

/// A complete message ready to be posted to a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDocument {
    /// Plain-text summary, shown in notifications and by clients without block support
    pub text: String,

    /// Visual blocks, rendered in order
    pub blocks: Vec<Block>,

    /// Channel override; the webhook's default channel is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl MessageDocument {
    /// Creates a document with the given summary and blocks, without a channel override.
    #[must_use]
    pub fn new(text: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            text: text.into(),
            blocks,
            channel: None,
        }
    }

    /// Appends a block after the existing ones.
    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Sets the channel override.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Encodes the document as compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// One typed visual unit of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large bold title line.
    Header {
        /// Must be plain text
        text: TextObject,
    },

    /// Body text and/or a two-column grid of fields.
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<TextObject>,
    },

    /// Row of interactive elements.
    Actions {
        elements: Vec<ActionElement>,
    },

    /// Small, muted footer text.
    Context {
        elements: Vec<TextObject>,
    },
}

impl Block {
    /// Header block with emoji rendering enabled.
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: TextObject::plain(text),
        }
    }

    /// Section with a single markdown text.
    #[must_use]
    pub fn markdown_section(text: impl Into<String>) -> Self {
        Self::Section {
            text: Some(TextObject::markdown(text)),
            fields: Vec::new(),
        }
    }

    /// Section made of markdown fields only.
    #[must_use]
    pub fn fields_section<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Section {
            text: None,
            fields: fields.into_iter().map(TextObject::markdown).collect(),
        }
    }

    /// Context footer with a single markdown element.
    #[must_use]
    pub fn markdown_context(text: impl Into<String>) -> Self {
        Self::Context {
            elements: vec![TextObject::markdown(text)],
        }
    }

    /// Actions row.
    #[must_use]
    pub const fn actions(elements: Vec<ActionElement>) -> Self {
        Self::Actions { elements }
    }
}

/// Text payload of a block or element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Literal text; `emoji` turns `:shortcodes:` into emoji.
    PlainText { text: String, emoji: bool },

    /// Markdown-formatted text.
    Mrkdwn { text: String },
}

impl TextObject {
    /// Plain text with emoji rendering enabled.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    /// Markdown text.
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    /// Returns the raw text regardless of kind.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text, .. } | Self::Mrkdwn { text } => text,
        }
    }
}

/// Interactive element inside an actions block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionElement {
    /// Link button.
    Button {
        text: TextObject,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ButtonStyle>,
    },
}

impl ActionElement {
    /// Link button with default styling.
    #[must_use]
    pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Button {
            text: TextObject::plain(label),
            url: url.into(),
            style: None,
        }
    }

    /// Sets the button style.
    #[must_use]
    pub fn styled(self, new_style: ButtonStyle) -> Self {
        match self {
            Self::Button { text, url, .. } => Self::Button {
                text,
                url,
                style: Some(new_style),
            },
        }
    }
}

/// Button colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Highlighted call-to-action
    Primary,
}
