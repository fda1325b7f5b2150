//! Error types for provision-fs

use std::path::PathBuf;

/// Result type for provision-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in provision-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File path must not be empty")]
    EmptyPath,

    #[error("File does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("File is not writable: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify a raw I/O error for `path`.
    ///
    /// Missing files and permission failures get their own variants so callers
    /// can tell them apart from other I/O failures.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::EmptyPath => None,
            Self::NotFound { path }
            | Self::NotAFile { path }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_classifies_not_found() {
        let err = Error::io("/tmp/x", std::io::Error::from(ErrorKind::NotFound));
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_io_classifies_permission_denied() {
        let err = Error::io("/tmp/x", std::io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_io_keeps_other_errors() {
        let err = Error::io("/tmp/x", std::io::Error::other("disk on fire"));
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), Some(std::path::Path::new("/tmp/x")));
    }
}
