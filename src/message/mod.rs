//! Message layer: turns release metadata into a webhook message document.
//!
//! This module provides:
//! - The wire document and its block types ([`MessageDocument`], [`Block`])
//! - Per-run options ([`NotificationOptions`])
//! - The release message builder ([`build`])
//! - Text formatting rules ([`format`])
//! - The connectivity probe message ([`probe_message`])

mod builder;
mod document;
pub mod format;
mod options;
mod probe;


pub use builder::{
    ACTION_ITEMS, CHANNEL, ENRICHMENTS, Enrichment, MENTIONS, build, is_suppressed, skeleton,
};
pub use document::{ActionElement, Block, ButtonStyle, MessageDocument, TextObject};
pub use options::NotificationOptions;
pub use probe::probe_message;
