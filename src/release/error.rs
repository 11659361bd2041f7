//! Error types for gathering release metadata.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for release metadata operations.
///
/// Any of these aborts the run before a message is built, so a malformed
/// notification is never sent.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// A field the notification cannot be built without is absent or blank.
    #[error("Missing required release field: {field}. {hint}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A URL field is not an absolute URL.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the field
        field: &'static str,
        /// The offending value
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Failed to read the event payload file.
    #[error("Failed to read event payload '{}': {source}", path.display())]
    EventRead {
        /// Path to the payload file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The event payload is not valid JSON of the expected shape.
    #[error("Failed to parse event payload: {0}")]
    EventParse(#[from] serde_json::Error),

    /// The event payload does not describe a release.
    #[error("No release data found in event payload")]
    NoRelease,
}

/// Well-known field names for `MissingField` and `InvalidUrl` errors.
pub mod field {
    /// The release tag.
    pub const TAG: &str = "tag";
    /// The release page URL.
    pub const HTML_URL: &str = "release_url";
    /// The repository name.
    pub const REPOSITORY_NAME: &str = "repository";
    /// The repository URL.
    pub const REPOSITORY_URL: &str = "repository_url";
    /// The release author.
    pub const AUTHOR: &str = "author";
}

impl ReleaseError {
    /// Creates a `MissingField` error.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingField { field, hint }
    }
}
