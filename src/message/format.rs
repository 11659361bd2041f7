//! Text formatting rules for release announcements.

use std::borrow::Cow;

/// Release notes longer than this many UTF-16 code units are truncated.
pub const MAX_BODY_UNITS: usize = 500;

/// Shown in place of empty release notes.
pub const EMPTY_BODY_PLACEHOLDER: &str = "No release notes provided.";

/// Appended after truncated release notes, before the link.
pub const TRUNCATION_MARKER: &str = "...";

/// Link text pointing at the full release notes.
pub const READ_MORE_TEXT: &str = "Read more";

/// How a release is announced.
///
/// Chosen from the prerelease flag alone; draft status never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// A regular published release.
    Stable,
    /// A release marked as prerelease.
    Prerelease,
}

impl ReleaseKind {
    /// Picks the kind for the given prerelease flag.
    #[must_use]
    pub const fn from_prerelease(is_prerelease: bool) -> Self {
        if is_prerelease {
            Self::Prerelease
        } else {
            Self::Stable
        }
    }

    /// Label used in the summary and header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "🚀 New Release",
            Self::Prerelease => "🚧 Pre-release",
        }
    }

    /// Emoji shortcode prefixed to the header.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Stable => ":rocket:",
            Self::Prerelease => ":construction:",
        }
    }
}

/// Formats release notes for the message body.
///
/// - Absent or empty notes become [`EMPTY_BODY_PLACEHOLDER`].
/// - Notes of at most [`MAX_BODY_UNITS`] UTF-16 code units are returned unchanged.
/// - Longer notes keep their longest prefix of at most [`MAX_BODY_UNITS`]
///   code units, followed by [`TRUNCATION_MARKER`] and a `<url|Read more>`
///   link to `release_url`.
///
/// The cut always lands on a character boundary, so a surrogate pair is
/// dropped whole rather than split.
#[must_use]
pub fn release_body<'a>(body: Option<&'a str>, release_url: &str) -> Cow<'a, str> {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return Cow::Borrowed(EMPTY_BODY_PLACEHOLDER);
    };

    match utf16_cut(body, MAX_BODY_UNITS) {
        None => Cow::Borrowed(body),
        Some(cut) => Cow::Owned(format!(
            "{}{TRUNCATION_MARKER} {}",
            &body[..cut],
            link(release_url, READ_MORE_TEXT)
        )),
    }
}

/// Byte index of the first character that would take `text` past `limit`
/// UTF-16 code units, or `None` if it fits.
fn utf16_cut(text: &str, limit: usize) -> Option<usize> {
    let mut units = 0;
    text.char_indices().find_map(|(idx, ch)| {
        units += ch.len_utf16();
        (units > limit).then_some(idx)
    })
}

/// Renders a markdown hyperlink: `<url|text>`.
#[must_use]
pub fn link(url: &str, text: &str) -> String {
    format!("<{url}|{text}>")
}

/// Renders a user mention token: `<@id>`.
#[must_use]
pub fn mention(id: &str) -> String {
    format!("<@{id}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://github.com/acme/widget/releases/tag/v1.0.0";

    #[test]
    fn absent_body_uses_placeholder() {
        assert_eq!(release_body(None, URL), "No release notes provided.");
    }

    #[test]
    fn empty_body_uses_placeholder() {
        assert_eq!(release_body(Some(""), URL), "No release notes provided.");
    }

    #[test]
    fn short_body_is_unchanged() {
        let body = "- Fixed memory leak\n- Improved error handling";
        assert_eq!(release_body(Some(body), URL), body);
    }

    #[test]
    fn body_at_limit_is_unchanged() {
        let body = "a".repeat(MAX_BODY_UNITS);
        let formatted = release_body(Some(&body), URL);

        assert_eq!(formatted, body);
        assert!(matches!(formatted, Cow::Borrowed(_)));
    }

    #[test]
    fn body_over_limit_is_truncated_with_link() {
        let body = format!("{}{}", "a".repeat(MAX_BODY_UNITS), "overflow");
        let formatted = release_body(Some(&body), URL);

        let expected = format!("{}... <{URL}|Read more>", "a".repeat(MAX_BODY_UNITS));
        assert_eq!(formatted, expected);
    }

    #[test]
    fn length_is_counted_in_utf16_units() {
        // é is one unit, so exactly the limit still fits
        let body = "é".repeat(MAX_BODY_UNITS);
        assert_eq!(release_body(Some(&body), URL), body);

        let body = "é".repeat(MAX_BODY_UNITS + 1);
        let formatted = release_body(Some(&body), URL);
        assert_eq!(
            formatted,
            format!("{}... <{URL}|Read more>", "é".repeat(MAX_BODY_UNITS))
        );
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        // 300 emoji are 600 units
        let body = "😀".repeat(300);
        let formatted = release_body(Some(&body), URL);

        assert_eq!(
            formatted,
            format!("{}... <{URL}|Read more>", "😀".repeat(MAX_BODY_UNITS / 2))
        );
    }

    #[test]
    fn emoji_filling_limit_exactly_is_unchanged() {
        let body = "😀".repeat(MAX_BODY_UNITS / 2);
        let formatted = release_body(Some(&body), URL);

        assert_eq!(formatted, body);
        assert!(matches!(formatted, Cow::Borrowed(_)));
    }

    #[test]
    fn surrogate_pair_straddling_limit_is_dropped_whole() {
        let prefix = "a".repeat(MAX_BODY_UNITS - 1);
        let body = format!("{prefix}😀 tail");
        let formatted = release_body(Some(&body), URL);

        assert_eq!(formatted, format!("{prefix}... <{URL}|Read more>"));
    }

    #[test]
    fn cut_position_in_mixed_text() {
        assert_eq!(utf16_cut("ab", 2), None);
        assert_eq!(utf16_cut("ab😀", 3), Some(2));
        assert_eq!(utf16_cut("ab😀", 4), None);
        assert_eq!(utf16_cut("😀a", 1), Some(0));
    }

    #[test]
    fn release_kind_follows_prerelease_flag() {
        assert_eq!(ReleaseKind::from_prerelease(true), ReleaseKind::Prerelease);
        assert_eq!(ReleaseKind::from_prerelease(false), ReleaseKind::Stable);
    }

    #[test]
    fn labels_and_emoji() {
        assert_eq!(ReleaseKind::Stable.label(), "🚀 New Release");
        assert_eq!(ReleaseKind::Stable.emoji(), ":rocket:");
        assert_eq!(ReleaseKind::Prerelease.label(), "🚧 Pre-release");
        assert_eq!(ReleaseKind::Prerelease.emoji(), ":construction:");
    }

    #[test]
    fn mention_token_format() {
        assert_eq!(mention("U123"), "<@U123>");
    }
}
