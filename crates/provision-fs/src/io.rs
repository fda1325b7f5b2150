//! Raw byte I/O on target files
//!
//! Every function opens the file once and drops the handle before returning,
//! on success and on error alike.

use crate::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Read the full content of a file as bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Append `chunks` to an existing file through a single append handle.
///
/// The file must already exist; it is never created here.
pub fn append_bytes(path: &Path, chunks: &[&[u8]]) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    for chunk in chunks {
        file.write_all(chunk).map_err(|e| Error::io(path, e))?;
    }

    file.flush().map_err(|e| Error::io(path, e))?;

    tracing::trace!(
        path = %path.display(),
        bytes = chunks.iter().map(|c| c.len()).sum::<usize>(),
        "appended"
    );
    Ok(())
}

/// Replace the full content of an existing file.
///
/// The file is truncated and rewritten in place, so its ownership and
/// permissions are kept.
pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "rewritten");
    Ok(())
}

/// Whether the last byte of `content` is a newline.
///
/// Empty content counts as already terminated: nothing needs separating.
pub fn ends_with_newline(content: &[u8]) -> bool {
    content.last().is_none_or(|b| *b == b'\n')
}
