//! CI event payload parsing.
//!
//! Only the subset of the release event the notification needs is modelled;
//! unknown fields are ignored since real payloads carry far more.

use std::path::Path;

use serde::Deserialize;

use super::error::ReleaseError;
use super::metadata::ReleaseFields;

/// A release event as written to disk by the CI runner.
#[derive(Debug, Default, Deserialize)]
pub struct ReleaseEvent {
    /// The release that triggered the event
    pub release: Option<EventRelease>,

    /// The repository the release belongs to
    pub repository: Option<EventRepository>,
}

/// Release object inside the event payload.
#[derive(Debug, Default, Deserialize)]
pub struct EventRelease {
    pub tag_name: Option<String>,
    pub name: Option<String>,
    pub body: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub author: Option<EventUser>,
}

/// User object inside the event payload.
#[derive(Debug, Default, Deserialize)]
pub struct EventUser {
    pub login: Option<String>,
}

/// Repository object inside the event payload.
#[derive(Debug, Default, Deserialize)]
pub struct EventRepository {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub html_url: Option<String>,
}

impl ReleaseEvent {
    /// Loads an event payload from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ReleaseError> {
        let content = std::fs::read_to_string(path).map_err(|e| ReleaseError::EventRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses an event payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse(content: &str) -> Result<Self, ReleaseError> {
        serde_json::from_str(content).map_err(ReleaseError::from)
    }

    /// Converts the payload into release fields.
    ///
    /// The repository's short `name` is preferred over `full_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::NoRelease`] if the payload has no `release` object.
    pub fn into_fields(self) -> Result<ReleaseFields, ReleaseError> {
        let release = self.release.ok_or(ReleaseError::NoRelease)?;
        let repository = self.repository.unwrap_or_default();

        Ok(ReleaseFields {
            tag: release.tag_name,
            name: release.name,
            body: release.body,
            html_url: release.html_url,
            repository_name: repository.name.or(repository.full_name),
            repository_url: repository.html_url,
            author_login: release.author.and_then(|a| a.login),
            is_prerelease: Some(release.prerelease),
            is_draft: Some(release.draft),
        })
    }
}
