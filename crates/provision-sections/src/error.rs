//! Error types for provision-sections

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Path recorded on errors raised by the in-memory content functions.
pub(crate) const CONTENT_PATH: &str = "<content>";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {name} must be a non-empty string")]
    EmptyArgument { name: &'static str },

    #[error("Section {tag} already exists in {path}")]
    TagConflict { tag: String, path: PathBuf },

    #[error("Section {tag} does not exist in {path}")]
    TagMissing { tag: String, path: PathBuf },

    #[error(
        "Malformed section {tag} in {path}: {reason} (begin marker at byte {begin}, end marker at byte {end})"
    )]
    MalformedSection {
        tag: String,
        path: PathBuf,
        begin: usize,
        end: usize,
        reason: &'static str,
    },

    #[error("Filesystem error: {source}")]
    Fs {
        /// Normalized tag of the operation that hit the error.
        tag: Option<String>,
        #[source]
        source: provision_fs::Error,
    },
}

impl From<provision_fs::Error> for Error {
    fn from(source: provision_fs::Error) -> Self {
        Self::Fs { tag: None, source }
    }
}

/// Coarse classification of [`Error`] for callers that branch on the kind
/// of failure rather than its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    PermissionDenied,
    TagConflict,
    TagMissing,
    MalformedSection,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyArgument { .. } => ErrorKind::InvalidArgument,
            Self::TagConflict { .. } => ErrorKind::TagConflict,
            Self::TagMissing { .. } => ErrorKind::TagMissing,
            Self::MalformedSection { .. } => ErrorKind::MalformedSection,
            Self::Fs { source, .. } => match source {
                provision_fs::Error::EmptyPath => ErrorKind::InvalidArgument,
                provision_fs::Error::NotFound { .. } | provision_fs::Error::NotAFile { .. } => {
                    ErrorKind::NotFound
                }
                provision_fs::Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
                provision_fs::Error::Io { .. } => ErrorKind::Io,
            },
        }
    }

    /// The normalized tag the error refers to, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::TagConflict { tag, .. }
            | Self::TagMissing { tag, .. }
            | Self::MalformedSection { tag, .. } => Some(tag),
            Self::Fs { tag, .. } => tag.as_deref(),
            Self::EmptyArgument { .. } => None,
        }
    }

    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::TagConflict { path, .. }
            | Self::TagMissing { path, .. }
            | Self::MalformedSection { path, .. } => Some(path),
            Self::Fs { source, .. } => source.path(),
            Self::EmptyArgument { .. } => None,
        }
    }

    /// Attach the real file path to an error raised on in-memory content.
    pub(crate) fn at(self, file: &Path) -> Self {
        match self {
            Self::TagConflict { tag, .. } => Self::TagConflict {
                tag,
                path: file.to_path_buf(),
            },
            Self::TagMissing { tag, .. } => Self::TagMissing {
                tag,
                path: file.to_path_buf(),
            },
            Self::MalformedSection {
                tag,
                begin,
                end,
                reason,
                ..
            } => Self::MalformedSection {
                tag,
                path: file.to_path_buf(),
                begin,
                end,
                reason,
            },
            other => other,
        }
    }

    /// Wrap a file-system error raised while working on `tag`.
    pub(crate) fn fs_for(tag: &crate::tag::Tag) -> impl FnOnce(provision_fs::Error) -> Self + '_ {
        move |source| Self::Fs {
            tag: Some(tag.to_string()),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_fs_errors() {
        let not_found = Error::from(provision_fs::Error::NotFound {
            path: PathBuf::from("a"),
        });
        assert_eq!(not_found.kind(), ErrorKind::NotFound);

        let empty = Error::from(provision_fs::Error::EmptyPath);
        assert_eq!(empty.kind(), ErrorKind::InvalidArgument);
        assert_eq!(empty.tag(), None);
    }

    #[test]
    fn test_fs_error_keeps_tag_and_path() {
        let tag = crate::tag::Tag::new("cron").unwrap();
        let err = Error::fs_for(&tag)(provision_fs::Error::PermissionDenied {
            path: PathBuf::from("/etc/crontab"),
        });

        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.tag(), Some("CRON"));
        assert_eq!(err.path(), Some(Path::new("/etc/crontab")));
    }

    #[test]
    fn test_at_replaces_content_path() {
        let err = Error::TagMissing {
            tag: "CRON".into(),
            path: PathBuf::from(CONTENT_PATH),
        }
        .at(Path::new("/etc/crontab"));

        assert_eq!(err.path(), Some(Path::new("/etc/crontab")));
        assert_eq!(err.tag(), Some("CRON"));
        assert_eq!(
            err.to_string(),
            "Section CRON does not exist in /etc/crontab"
        );
    }
}
