//! # utilkit core
//!
//! Filesystem-facing operations built on top of `utilkit-common`.
//!
//! * **[`copy`]**: buffered stream and file copying with adaptive buffer sizing.
//! * **[`files`]**: directory listing with content sniffing, first-row skipping.
//! * **[`archive`]**: zip creation and extraction.
//! * **[`convert`]**: spreadsheet export and in-place text rewrites.
//! * **[`json`]**: thin `serde_json` helpers.

pub mod archive;
pub mod convert;
pub mod copy;
pub mod error;
pub mod files;
pub mod json;

pub use copy::{CopyBuffer, copy, copy_file, copy_file_with};
pub use error::{Error, Result};
