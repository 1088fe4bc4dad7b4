//! Null-byte detection and removal.
//!
//! The in-memory functions are pure. The reader and file variants slurp the
//! whole input first and then delegate; a failed read is always reported as
//! [`Error::Read`], never guessed into a `true`/`false` answer.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Origin, Result, ResultExt};

/// Returns `true` as soon as a zero byte is found.
pub fn has_null_byte(data: &[u8]) -> bool {
    data.contains(&0)
}

/// Returns a copy of `data` with every zero byte deleted.
pub fn remove_null_byte(data: &[u8]) -> Vec<u8> {
    data.iter().copied().filter(|b| *b != 0).collect()
}

pub fn has_null_byte_in_reader<R: Read>(mut reader: R) -> Result<bool> {
    let data = read_all(&mut reader)?;
    Ok(has_null_byte(&data))
}

pub fn has_null_byte_in_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let data = fs::read(path).on_read(Origin::file(path))?;
    Ok(has_null_byte(&data))
}

/// Drains `reader` and hands back an in-memory reader without null bytes.
pub fn remove_null_byte_in_reader<R: Read>(mut reader: R) -> Result<Cursor<Vec<u8>>> {
    let data = read_all(&mut reader)?;
    Ok(Cursor::new(remove_null_byte(&data)))
}

/// Rewrites the file at `path` without null bytes, keeping its permissions.
///
/// Returns the number of bytes removed.
pub fn remove_null_byte_in_file(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let meta = fs::metadata(path).with_path("stat", path)?;
    if !meta.is_file() {
        return Err(Error::NotRegularFile { path: path.to_path_buf() });
    }

    let data = fs::read(path).on_read(Origin::file(path))?;
    let cleaned = remove_null_byte(&data);
    let removed = data.len() - cleaned.len();

    fs::write(path, &cleaned).on_write(Origin::file(path))?;
    fs::set_permissions(path, meta.permissions()).with_path("chmod", path)?;

    debug!(path = %path.display(), removed, "null bytes stripped");
    Ok(removed)
}

fn read_all<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).on_read(Origin::Stream)?;
    Ok(data)
}
