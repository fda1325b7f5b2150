//! Tag normalization and marker construction.
//!
//! Markers are derived from the normalized tag and never stored:
//! `#BEGIN_<TAG>` opens a section and `#END_<TAG>` closes it. Two tags that
//! normalize to the same text address the same section.

use crate::error::{Error, Result};
use std::fmt;

/// Prefix of the marker line that opens a section.
pub const BEGIN_PREFIX: &str = "#BEGIN_";
/// Prefix of the marker line that closes a section.
pub const END_PREFIX: &str = "#END_";

/// Normalize a raw tag into its marker-safe form.
///
/// The input is uppercased with full Unicode case mapping, then every byte
/// of its UTF-8 encoding outside `A-Z0-9` becomes `_`. A non-ASCII
/// character therefore turns into one underscore per encoded byte, which
/// keeps markers identical to those already written by earlier tooling.
///
/// # Example
/// ```
/// use provision_sections::normalize;
///
/// assert_eq!(normalize("my-tag"), "MY_TAG");
/// assert_eq!(normalize("my tag"), "MY_TAG");
/// assert_eq!(normalize("café"), "CAF__");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
        .bytes()
        .map(|b| {
            if b.is_ascii_uppercase() || b.is_ascii_digit() {
                char::from(b)
            } else {
                '_'
            }
        })
        .collect()
}

/// A normalized section tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    normalized: String,
}

impl Tag {
    /// Normalize `raw` into a tag.
    ///
    /// # Errors
    /// Returns `Error::EmptyArgument` if `raw` is empty.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyArgument { name: "tag" });
        }
        Ok(Self {
            normalized: normalize(raw),
        })
    }

    /// Wrap text already in normalized form, as read back from a marker line.
    pub(crate) fn from_normalized(normalized: &str) -> Self {
        Self {
            normalized: normalized.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The begin/end marker pair for this tag.
    pub fn markers(&self) -> Markers {
        Markers {
            begin: format!("{BEGIN_PREFIX}{}", self.normalized),
            end: format!("{END_PREFIX}{}", self.normalized),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Begin and end marker text for one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub begin: String,
    pub end: String,
}

impl Markers {
    /// Byte offset of the first occurrence of the begin marker.
    pub fn find_begin(&self, content: &[u8]) -> Option<usize> {
        find_bytes(content, self.begin.as_bytes())
    }

    /// Byte offset of the first occurrence of the end marker.
    pub fn find_end(&self, content: &[u8]) -> Option<usize> {
        find_bytes(content, self.end.as_bytes())
    }

    /// Whether either marker occurs anywhere in `content`, including inside
    /// a longer line.
    pub fn occurs_in(&self, content: &[u8]) -> bool {
        self.find_begin(content).is_some() || self.find_end(content).is_some()
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("my-tag", "MY_TAG")]
    #[case("MY_TAG", "MY_TAG")]
    #[case("my tag", "MY_TAG")]
    #[case("cron", "CRON")]
    #[case("php.ini/extra", "PHP_INI_EXTRA")]
    #[case("v2", "V2")]
    #[case("straße", "STRASSE")]
    #[case("é", "__")]
    fn test_normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert!(matches!(
            Tag::new(""),
            Err(Error::EmptyArgument { name: "tag" })
        ));
    }

    #[test]
    fn test_markers() {
        let markers = Tag::new("my-tag").unwrap().markers();
        assert_eq!(markers.begin, "#BEGIN_MY_TAG");
        assert_eq!(markers.end, "#END_MY_TAG");
    }

    #[test]
    fn test_find_markers() {
        let markers = Tag::new("cron").unwrap().markers();
        let content = b"a\n#BEGIN_CRON\nx\n#END_CRON\n";
        assert_eq!(markers.find_begin(content), Some(2));
        assert_eq!(markers.find_end(content), Some(16));
        assert!(markers.occurs_in(content));
        assert!(!markers.occurs_in(b"nothing here"));
    }

    #[test]
    fn test_occurs_in_matches_substring() {
        let markers = Tag::new("cron").unwrap().markers();
        assert!(markers.occurs_in(b"#BEGIN_CRONTAB\n"));
    }
}
