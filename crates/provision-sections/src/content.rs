//! Section operations on in-memory content.
//!
//! Content is handled as raw bytes so files that are not valid UTF-8 pass
//! through untouched. Errors raised here carry the placeholder path
//! `<content>`; the editor replaces it with the real file path.

use crate::error::{CONTENT_PATH, Error, Result};
use crate::tag::{END_PREFIX, Tag};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::path::PathBuf;
use std::sync::LazyLock;

/// A well-formed section found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    /// The normalized tag.
    pub tag: String,
    /// The body between the marker lines, without its final line terminator.
    pub body: Vec<u8>,
    /// Byte range from the start of the begin marker through the end
    /// marker's line terminator.
    pub range: Range<usize>,
    /// The 1-based line of the begin marker.
    pub start_line: usize,
    /// The 1-based line of the end marker.
    pub end_line: usize,
}

impl SectionInfo {
    /// The body as text, replacing invalid UTF-8.
    pub fn body_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// A whole line that opens a section, terminator already stripped.
static BEGIN_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#BEGIN_([A-Z0-9_]+)$").expect("Invalid begin line regex")
});

/// Render the bytes that adding a section appends to `content`.
///
/// A newline is prepended when `content` is non-empty and does not already
/// end with one, so the begin marker always starts its own line.
///
/// # Errors
/// Returns `Error::TagConflict` if either marker already occurs anywhere in
/// `content`.
pub fn render_append(content: &[u8], tag: &Tag, text: &str) -> Result<Vec<u8>> {
    let markers = tag.markers();
    if markers.occurs_in(content) {
        return Err(Error::TagConflict {
            tag: tag.to_string(),
            path: PathBuf::from(CONTENT_PATH),
        });
    }

    let mut out = Vec::with_capacity(markers.begin.len() + text.len() + markers.end.len() + 4);
    if !provision_fs::io::ends_with_newline(content) {
        tracing::debug!(tag = %tag, "content lacks trailing newline; separating section");
        out.push(b'\n');
    }
    for part in [markers.begin.as_str(), text, markers.end.as_str()] {
        out.extend_from_slice(part.as_bytes());
        out.push(b'\n');
    }
    Ok(out)
}

/// Append a new section to `content`.
///
/// # Errors
/// Returns `Error::TagConflict` if either marker already occurs in `content`.
pub fn insert_section(content: &[u8], tag: &Tag, text: &str) -> Result<Vec<u8>> {
    let appended = render_append(content, tag, text)?;
    let mut out = Vec::with_capacity(content.len() + appended.len());
    out.extend_from_slice(content);
    out.extend_from_slice(&appended);
    Ok(out)
}

/// Byte range that removing `tag`'s section excises from `content`.
///
/// The first begin marker and the first end marker are located
/// independently. The range runs from the begin marker through the end
/// marker and the line terminator (`\n` or `\r\n`) directly after it.
///
/// # Errors
/// - `Error::TagMissing` if either marker is absent.
/// - `Error::MalformedSection` if the end marker comes before the begin
///   marker, or if either occurrence is not followed by a line terminator
///   or the end of content (it is part of a longer tag such as `#END_AB`
///   when removing `A`).
pub fn section_span(content: &[u8], tag: &Tag) -> Result<Range<usize>> {
    let markers = tag.markers();
    let (begin, end) = match (markers.find_begin(content), markers.find_end(content)) {
        (Some(begin), Some(end)) => (begin, end),
        _ => {
            return Err(Error::TagMissing {
                tag: tag.to_string(),
                path: PathBuf::from(CONTENT_PATH),
            });
        }
    };

    let malformed = |reason| Error::MalformedSection {
        tag: tag.to_string(),
        path: PathBuf::from(CONTENT_PATH),
        begin,
        end,
        reason,
    };

    if end < begin {
        return Err(malformed("end marker precedes begin marker"));
    }
    if !at_line_end(&content[begin + markers.begin.len()..]) {
        return Err(malformed("begin marker is followed by more text on its line"));
    }

    let marker_end = end + markers.end.len();
    let rest = &content[marker_end..];
    if !at_line_end(rest) {
        return Err(malformed("end marker is followed by more text on its line"));
    }

    Ok(begin..marker_end + terminator_len(rest))
}

/// Remove `tag`'s section from `content`, keeping every other byte.
///
/// # Errors
/// See [`section_span`].
pub fn remove_section(content: &[u8], tag: &Tag) -> Result<Vec<u8>> {
    let span = section_span(content, tag)?;
    let mut out = Vec::with_capacity(content.len() - span.len());
    out.extend_from_slice(&content[..span.start]);
    out.extend_from_slice(&content[span.end..]);
    Ok(out)
}

/// Find the well-formed section for `tag`, if any.
pub fn find_section(content: &[u8], tag: &Tag) -> Option<SectionInfo> {
    parse_sections(content)
        .into_iter()
        .find(|section| section.tag == tag.as_str())
}

/// Parse all well-formed sections, in order of appearance.
///
/// A section is a whole `#BEGIN_<TAG>` line followed by the next whole
/// `#END_<TAG>` line for the same tag. A trailing `\r` on marker lines is
/// accepted. Begin lines without a matching end line are skipped.
///
/// # Example
/// ```
/// use provision_sections::parse_sections;
///
/// let content = b"keep\n#BEGIN_PATH\nexport PATH=$PATH:/opt/bin\n#END_PATH\n";
/// let sections = parse_sections(content);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].tag, "PATH");
/// assert_eq!(sections[0].body_lossy(), "export PATH=$PATH:/opt/bin");
/// assert_eq!((sections[0].start_line, sections[0].end_line), (2, 4));
/// ```
pub fn parse_sections(content: &[u8]) -> Vec<SectionInfo> {
    let lines = split_lines(content);
    let mut sections = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let open = &lines[idx];
        let Some(caps) = BEGIN_LINE_REGEX.captures(open.slice(content)) else {
            idx += 1;
            continue;
        };
        let tag_bytes = &caps[1];
        let Ok(tag) = std::str::from_utf8(tag_bytes) else {
            idx += 1;
            continue;
        };
        let tag = Tag::from_normalized(tag);
        let end_marker = format!("{END_PREFIX}{tag}");

        let close = lines[idx + 1..]
            .iter()
            .position(|line| line.slice(content) == end_marker.as_bytes())
            .map(|offset| idx + 1 + offset);

        match close {
            Some(close_idx) => {
                let close = &lines[close_idx];
                let body = if close_idx == idx + 1 {
                    Vec::new()
                } else {
                    let last_body = &lines[close_idx - 1];
                    content[open.full.end..last_body.text.end].to_vec()
                };
                sections.push(SectionInfo {
                    tag: tag.as_str().to_string(),
                    body,
                    range: open.full.start..close.full.end,
                    start_line: idx + 1,
                    end_line: close_idx + 1,
                });
                idx = close_idx + 1;
            }
            None => idx += 1,
        }
    }

    sections
}

/// Convenience for callers that only need to know whether adding `tag`
/// would conflict.
pub fn contains_markers(content: &[u8], tag: &Tag) -> bool {
    tag.markers().occurs_in(content)
}

struct Line {
    /// Whole line including its terminator.
    full: Range<usize>,
    /// Line without `\n` / `\r\n`.
    text: Range<usize>,
}

impl Line {
    fn slice<'a>(&self, content: &'a [u8]) -> &'a [u8] {
        &content[self.text.clone()]
    }
}

fn split_lines(content: &[u8]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;
    for raw in content.split_inclusive(|b| *b == b'\n') {
        let end = start + raw.len();
        let text_len = raw.len() - terminator_suffix_len(raw);
        lines.push(Line {
            full: start..end,
            text: start..start + text_len,
        });
        start = end;
    }
    lines
}

/// Whether `rest` starts with a line terminator or is empty.
fn at_line_end(rest: &[u8]) -> bool {
    rest.is_empty() || terminator_len(rest) > 0
}

/// Length of the line terminator at the start of `rest`.
fn terminator_len(rest: &[u8]) -> usize {
    if rest.starts_with(b"\r\n") {
        2
    } else if rest.starts_with(b"\n") {
        1
    } else {
        0
    }
}

/// Length of the line terminator at the end of `line`.
fn terminator_suffix_len(line: &[u8]) -> usize {
    if line.ends_with(b"\r\n") {
        2
    } else if line.ends_with(b"\n") {
        1
    } else {
        0
    }
}
