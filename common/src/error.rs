//! Error taxonomy shared across the workspace.
//!
//! Validation never produces an error; the predicates in [`crate::validate`]
//! are total and answer `false` instead. Everything here describes an I/O or
//! precondition failure, carrying enough context to tell which end failed.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The end of an I/O operation an error was raised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Stream,
    File(PathBuf),
}

impl Origin {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Stream => f.write_str("stream"),
            Origin::File(path) => write!(f, "file '{}'", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Reading from a source failed for a reason other than end-of-data.
    #[error("read {origin}: {source}")]
    Read {
        origin: Origin,
        #[source]
        source: io::Error,
    },

    /// Writing to a sink failed.
    #[error("write {origin}: {source}")]
    Write {
        origin: Origin,
        #[source]
        source: io::Error,
    },

    /// Any other filesystem operation (stat, open, create, seek) failed.
    #[error("{op} '{}': {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is a directory, device, pipe or socket.
    #[error("'{}' is not a regular file", .path.display())]
    NotRegularFile { path: PathBuf },

    /// Source and destination resolve to the same file.
    #[error("'{}' is both the source and the destination", .path.display())]
    SamePath { path: PathBuf },

    #[error("no line terminator found in {origin}")]
    MissingNewline { origin: Origin },

    #[error("invalid character literal {literal:?}")]
    InvalidCharLiteral { literal: String },

    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    pub fn read(origin: Origin, source: io::Error) -> Self {
        Self::Read { origin, source }
    }

    pub fn write(origin: Origin, source: io::Error) -> Self {
        Self::Write { origin, source }
    }

    /// Returns the underlying I/O error, if there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } | Error::Io { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Attaches path context to a raw `io::Result`.
pub trait ResultExt<T> {
    fn with_path(self, op: &'static str, path: impl AsRef<Path>) -> Result<T>;
    fn on_read(self, origin: Origin) -> Result<T>;
    fn on_write(self, origin: Origin) -> Result<T>;
}

impl<T> ResultExt<T> for io::Result<T> {
    fn with_path(self, op: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    fn on_read(self, origin: Origin) -> Result<T> {
        self.map_err(|source| Error::read(origin, source))
    }

    fn on_write(self, origin: Origin) -> Result<T> {
        self.map_err(|source| Error::write(origin, source))
    }
}
