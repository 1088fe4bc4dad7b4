use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Common(#[from] utilkit_common::Error),

    #[error("archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An archive entry would be written outside the extraction directory.
    #[error("archive entry {name:?} escapes the destination directory")]
    UnsafeEntry { name: String },

    #[error("spreadsheet '{}': {source}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Delimiters are written as single bytes.
    #[error("delimiter {delimiter:?} is not an ASCII character")]
    Delimiter { delimiter: char },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the shared error when this one wraps it.
    pub fn as_common(&self) -> Option<&utilkit_common::Error> {
        match self {
            Error::Common(e) => Some(e),
            _ => None,
        }
    }
}
