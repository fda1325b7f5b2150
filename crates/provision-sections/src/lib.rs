//! Tagged section editing for provisioning.
//!
//! A section is a block of text delimited by marker lines derived from a
//! normalized tag:
//!
//! ```text
//! #BEGIN_CRON
//! * * * * * job
//! #END_CRON
//! ```
//!
//! The crate is split in two layers:
//!
//! - [`content`] works on in-memory byte buffers and knows nothing about
//!   files.
//! - [`editor`] wraps it with target-file checks and I/O: appending a new
//!   section through a single append handle and removing one with a single
//!   whole-file rewrite.
//!
//! # Example
//! ```
//! use provision_sections::{Tag, content};
//!
//! let tag = Tag::new("cron").unwrap();
//! let added = content::insert_section(b"line1\n", &tag, "* * * * * job").unwrap();
//! assert_eq!(added, b"line1\n#BEGIN_CRON\n* * * * * job\n#END_CRON\n");
//!
//! let removed = content::remove_section(&added, &tag).unwrap();
//! assert_eq!(removed, b"line1\n");
//! ```

pub mod content;
pub mod editor;
pub mod error;
pub mod tag;

pub use content::{SectionInfo, parse_sections};
pub use editor::{SectionEditor, add_section, has_section, list_sections, remove_section};
pub use error::{Error, ErrorKind, Result};
pub use tag::{Markers, Tag, normalize};
