//! Error types for provision-cli

use provision_sections::ErrorKind;
use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit codes, one per failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Absent = 1,
    InvalidArgument = 2,
    NotFound = 3,
    PermissionDenied = 4,
    TagConflict = 5,
    TagMissing = 6,
    MalformedSection = 7,
    Io = 8,
    Config = 9,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from provision-sections
    #[error(transparent)]
    Sections(#[from] provision_sections::Error),

    /// Error reading section body input
    #[error(transparent)]
    Fs(#[from] provision_fs::Error),

    /// Section body file is not valid UTF-8
    #[error("Section body in {path} is not valid UTF-8")]
    InvalidBody { path: PathBuf },

    /// Bootstrap configuration could not be loaded
    #[error("Failed to load {format} config at {path}: {message}")]
    Config {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Logging or panic hook setup failed
    #[error("Bootstrap failed: {message}")]
    Bootstrap { message: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Sections(err) => match err.kind() {
                ErrorKind::InvalidArgument => ExitCode::InvalidArgument,
                ErrorKind::NotFound => ExitCode::NotFound,
                ErrorKind::PermissionDenied => ExitCode::PermissionDenied,
                ErrorKind::TagConflict => ExitCode::TagConflict,
                ErrorKind::TagMissing => ExitCode::TagMissing,
                ErrorKind::MalformedSection => ExitCode::MalformedSection,
                ErrorKind::Io => ExitCode::Io,
            },
            Self::Fs(provision_fs::Error::EmptyPath) | Self::InvalidBody { .. } => {
                ExitCode::InvalidArgument
            }
            Self::Fs(provision_fs::Error::NotFound { .. } | provision_fs::Error::NotAFile { .. }) => {
                ExitCode::NotFound
            }
            Self::Fs(provision_fs::Error::PermissionDenied { .. }) => ExitCode::PermissionDenied,
            Self::Fs(provision_fs::Error::Io { .. }) | Self::Io(_) => ExitCode::Io,
            Self::Config { .. } | Self::Bootstrap { .. } => ExitCode::Config,
        }
    }
}
