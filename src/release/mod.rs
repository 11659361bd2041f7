//! Release metadata for the notification.
//!
//! This module provides:
//! - The validated, immutable release description ([`ReleaseMetadata`])
//! - Raw, partially-known fields from one input source ([`ReleaseFields`])
//! - CI event payload parsing ([`ReleaseEvent`])
//!
//! # Sources
//!
//! Release fields may come from explicit CLI arguments (or their environment
//! variable fallbacks) and from a CI event payload file. Explicit fields win
//! over event fields one by one, so a single value can be overridden without
//! restating the rest.
//!
//! Required fields are checked once, when [`ReleaseMetadata`] is built. The
//! message builder can therefore never see a half-populated release.

mod error;
mod event;
mod metadata;


pub use error::{ReleaseError, field};
pub use event::ReleaseEvent;
pub use metadata::{ReleaseFields, ReleaseMetadata};
