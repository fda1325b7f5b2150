//! File-system layer for provisioning section edits.
//!
//! Target files are treated as opaque byte streams. This crate checks that a
//! target is an existing, writable regular file and performs the three kinds
//! of I/O the section editor needs: whole-file read, single-handle append and
//! whole-file rewrite.

pub mod error;
pub mod io;
pub mod target;

pub use error::{Error, Result};
pub use target::{Access, check_target};
