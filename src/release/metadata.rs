//! Validated release metadata and the raw fields it is built from.

use std::path::Path;

use url::Url;

use super::error::{ReleaseError, field};
use super::event::ReleaseEvent;

/// Release fields as supplied by a single source.
///
/// Every field is optional here; requiredness is enforced by
/// [`ReleaseMetadata::from_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFields {
    /// Release tag (e.g. `v1.2.3`)
    pub tag: Option<String>,
    /// Release display title
    pub name: Option<String>,
    /// Release notes
    pub body: Option<String>,
    /// Release page URL
    pub html_url: Option<String>,
    /// Repository name, bare or `owner/repo`
    pub repository_name: Option<String>,
    /// Repository page URL
    pub repository_url: Option<String>,
    /// Login of the release author
    pub author_login: Option<String>,
    /// Whether the release is a prerelease
    pub is_prerelease: Option<bool>,
    /// Whether the release is a draft
    pub is_draft: Option<bool>,
}

impl ReleaseFields {
    /// Fills every field missing here from `fallback`.
    ///
    /// Values in `self` always win, field by field.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            tag: self.tag.or(fallback.tag),
            name: self.name.or(fallback.name),
            body: self.body.or(fallback.body),
            html_url: self.html_url.or(fallback.html_url),
            repository_name: self.repository_name.or(fallback.repository_name),
            repository_url: self.repository_url.or(fallback.repository_url),
            author_login: self.author_login.or(fallback.author_login),
            is_prerelease: self.is_prerelease.or(fallback.is_prerelease),
            is_draft: self.is_draft.or(fallback.is_draft),
        }
    }
}

/// Everything the message builder needs to know about a release.
///
/// Immutable for the duration of a run. Construct through
/// [`ReleaseMetadata::from_fields`] or [`ReleaseMetadata::gather`] so that
/// required fields are guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMetadata {
    /// Release tag
    pub tag: String,
    /// Optional display title
    pub name: Option<String>,
    /// Release notes; `None` when absent or empty
    pub body: Option<String>,
    /// Absolute URL of the release page
    pub html_url: String,
    /// Repository display name (owner prefix removed)
    pub repository_name: String,
    /// Absolute URL of the repository page
    pub repository_url: String,
    /// Login of the release author
    pub author_login: String,
    /// Prerelease flag
    pub is_prerelease: bool,
    /// Draft flag
    pub is_draft: bool,
}

impl ReleaseMetadata {
    /// Validates raw fields into release metadata.
    ///
    /// Blank strings count as missing. A repository name of the form
    /// `owner/repo` is reduced to `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tag`, `html_url`, `repository_name`, `repository_url` or `author_login` is missing
    /// - `html_url` or `repository_url` is not an absolute URL
    pub fn from_fields(fields: ReleaseFields) -> Result<Self, ReleaseError> {
        let tag = required(
            fields.tag,
            field::TAG,
            "Use --tag, set RELEASE_TAG, or provide an event payload",
        )?;
        let html_url = required(
            fields.html_url,
            field::HTML_URL,
            "Use --release-url, set RELEASE_URL, or provide an event payload",
        )?;
        let repository_name = required(
            fields.repository_name,
            field::REPOSITORY_NAME,
            "Use --repository, set REPOSITORY_NAME, or provide an event payload",
        )?;
        let repository_url = required(
            fields.repository_url,
            field::REPOSITORY_URL,
            "Use --repository-url, set REPOSITORY_URL, or provide an event payload",
        )?;
        let author_login = required(
            fields.author_login,
            field::AUTHOR,
            "Use --author, set RELEASE_AUTHOR, or provide an event payload",
        )?;

        validate_url(field::HTML_URL, &html_url)?;
        validate_url(field::REPOSITORY_URL, &repository_url)?;

        Ok(Self {
            tag,
            name: non_blank(fields.name),
            body: fields.body.filter(|b| !b.is_empty()),
            html_url,
            repository_name: display_name(&repository_name).to_string(),
            repository_url,
            author_login,
            is_prerelease: fields.is_prerelease.unwrap_or(false),
            is_draft: fields.is_draft.unwrap_or(false),
        })
    }

    /// Gathers metadata from explicit fields and an optional event payload.
    ///
    /// When `event_path` is given, the payload is loaded and used to fill
    /// any field not set explicitly. A payload from a non-release trigger
    /// contributes nothing; the explicit fields must then be complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be read or parsed, the merged
    /// fields fail validation, or the payload carries no release and the
    /// explicit fields are incomplete ([`ReleaseError::NoRelease`]).
    pub fn gather(explicit: ReleaseFields, event_path: Option<&Path>) -> Result<Self, ReleaseError> {
        let Some(path) = event_path else {
            return Self::from_fields(explicit);
        };

        tracing::debug!("Loading release event payload from {}", path.display());
        match ReleaseEvent::load(path)?.into_fields() {
            Ok(event) => Self::from_fields(explicit.or(event)),
            Err(ReleaseError::NoRelease) => {
                tracing::debug!("Event payload has no release, using explicit fields only");
                Self::from_fields(explicit).map_err(|e| match e {
                    ReleaseError::MissingField { .. } => ReleaseError::NoRelease,
                    other => other,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the human-facing title: the release name if set, else the tag.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.tag)
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    hint: &'static str,
) -> Result<String, ReleaseError> {
    non_blank(value).ok_or_else(|| ReleaseError::missing(field, hint))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ReleaseError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ReleaseError::InvalidUrl {
            field,
            url: value.to_string(),
            reason: e.to_string(),
        })
}

/// `owner/repo` → `repo`; anything without a slash is returned as is.
fn display_name(repository: &str) -> &str {
    repository
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(repository)
}
