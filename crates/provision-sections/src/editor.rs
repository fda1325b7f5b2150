//! File-backed section editing.
//!
//! Adding validates the current content before a single append; removing
//! computes the full replacement before a single whole-file write. A failed
//! operation never leaves a partial section on disk.

use crate::content::{self, SectionInfo};
use crate::error::{Error, Result};
use crate::tag::Tag;
use provision_fs::{Access, check_target, io};
use std::path::{Path, PathBuf};

/// Edits tagged sections of one target file.
///
/// Holds no state besides the path; every call re-reads the file.
#[derive(Debug, Clone)]
pub struct SectionEditor {
    path: PathBuf,
}

impl SectionEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a section for `tag` holding `text`.
    ///
    /// # Errors
    /// - `Error::EmptyArgument` if the path or tag is empty.
    /// - `Error::Fs`, carrying the normalized tag, if the file is missing,
    ///   not writable or I/O fails.
    /// - `Error::TagConflict` if a marker for the tag is already present.
    pub fn add(&self, tag: &str, text: &str) -> Result<()> {
        let tag = self.prepare(tag, Access::ReadWrite)?;

        let current = io::read_bytes(&self.path).map_err(Error::fs_for(&tag))?;
        let appended = content::render_append(&current, &tag, text).map_err(|e| {
            tracing::debug!(path = %self.path.display(), tag = %tag, "add rejected");
            e.at(&self.path)
        })?;

        io::append_bytes(&self.path, &[&appended]).map_err(Error::fs_for(&tag))?;

        tracing::info!(path = %self.path.display(), tag = %tag, "section added");
        Ok(())
    }

    /// Remove the section for `tag`, keeping every other byte of the file.
    ///
    /// # Errors
    /// - `Error::EmptyArgument` if the path or tag is empty.
    /// - `Error::Fs`, carrying the normalized tag, if the file is missing,
    ///   not writable or I/O fails.
    /// - `Error::TagMissing` if either marker is absent.
    /// - `Error::MalformedSection` if the end marker precedes the begin marker
    ///   or either marker runs on into a longer word.
    pub fn remove(&self, tag: &str) -> Result<()> {
        let tag = self.prepare(tag, Access::ReadWrite)?;

        let current = io::read_bytes(&self.path).map_err(Error::fs_for(&tag))?;
        let updated = content::remove_section(&current, &tag).map_err(|e| e.at(&self.path))?;

        io::write_bytes(&self.path, &updated).map_err(Error::fs_for(&tag))?;

        tracing::info!(
            path = %self.path.display(),
            tag = %tag,
            removed_bytes = current.len() - updated.len(),
            "section removed"
        );
        Ok(())
    }

    /// Whether a marker for `tag` occurs in the file, which is exactly when
    /// [`SectionEditor::add`] would report a conflict.
    pub fn contains(&self, tag: &str) -> Result<bool> {
        let tag = self.prepare(tag, Access::Read)?;
        let current = io::read_bytes(&self.path).map_err(Error::fs_for(&tag))?;
        Ok(content::contains_markers(&current, &tag))
    }

    /// All well-formed sections in the file, in order.
    pub fn sections(&self) -> Result<Vec<SectionInfo>> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::EmptyArgument { name: "filepath" });
        }
        check_target(&self.path, Access::Read)?;
        let current = io::read_bytes(&self.path)?;
        Ok(content::parse_sections(&current))
    }

    fn prepare(&self, tag: &str, access: Access) -> Result<Tag> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::EmptyArgument { name: "filepath" });
        }
        let tag = Tag::new(tag)?;
        check_target(&self.path, access).map_err(Error::fs_for(&tag))?;
        Ok(tag)
    }
}

/// Append a section for `tag` to the file at `path`.
///
/// See [`SectionEditor::add`].
pub fn add_section(path: impl AsRef<Path>, tag: &str, text: &str) -> Result<()> {
    SectionEditor::new(path.as_ref()).add(tag, text)
}

/// Remove the section for `tag` from the file at `path`.
///
/// See [`SectionEditor::remove`].
pub fn remove_section(path: impl AsRef<Path>, tag: &str) -> Result<()> {
    SectionEditor::new(path.as_ref()).remove(tag)
}

/// Whether the file at `path` holds a marker for `tag`.
pub fn has_section(path: impl AsRef<Path>, tag: &str) -> Result<bool> {
    SectionEditor::new(path.as_ref()).contains(tag)
}

/// All well-formed sections in the file at `path`.
pub fn list_sections(path: impl AsRef<Path>) -> Result<Vec<SectionInfo>> {
    SectionEditor::new(path.as_ref()).sections()
}
