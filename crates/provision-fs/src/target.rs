//! Precondition checks for target files

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Access a caller needs on a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read-only queries.
    Read,
    /// Edits: the file must also be writable.
    ReadWrite,
}

/// Verify that `path` names an existing regular file usable with `access`.
///
/// The file is never created here. A directory or other non-regular entry is
/// reported as [`Error::NotAFile`]. Writability is judged from the permission
/// bits, so a read-only file is rejected even for privileged users.
pub fn check_target(path: &Path, access: Access) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }

    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;

    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if access == Access::ReadWrite && metadata.permissions().readonly() {
        tracing::debug!(path = %path.display(), "target file is read-only");
        return Err(Error::PermissionDenied {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
