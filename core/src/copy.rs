//! Buffered copying between byte sources and sinks.
//!
//! [`copy`] moves bytes from any [`Read`] into any [`Write`] through a single
//! staging buffer, either a default-sized one it allocates or one the caller
//! lends it. [`copy_file`] builds on it for regular files and picks the
//! buffer size from the file's length.
//!
//! Output already written is never rolled back: on failure the sink holds a
//! prefix of the source.

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use tracing::debug;
use utilkit_common::error::{Error, Origin, Result, ResultExt};
use utilkit_common::platform;

/// Buffer size used when the caller does not provide one.
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024;

/// Buffer size used for files above [`LARGE_FILE_THRESHOLD`].
pub const LARGE_BUFFER_SIZE: usize = 1024 * 1024;

/// Files strictly larger than this are copied with [`LARGE_BUFFER_SIZE`].
pub const LARGE_FILE_THRESHOLD: u64 = 100 * 1024 * 1024;

/// Staging buffer for a single copy.
#[derive(Debug, Default)]
pub enum CopyBuffer<'a> {
    /// Allocate [`DEFAULT_BUFFER_SIZE`] bytes for this call.
    #[default]
    Default,
    /// Reuse caller-owned memory. An empty slice falls back to `Default`.
    Provided(&'a mut [u8]),
}

impl<'a> From<&'a mut [u8]> for CopyBuffer<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        CopyBuffer::Provided(buf)
    }
}

impl<'a> From<&'a mut Vec<u8>> for CopyBuffer<'a> {
    fn from(buf: &'a mut Vec<u8>) -> Self {
        CopyBuffer::Provided(buf.as_mut_slice())
    }
}

impl<'a> From<Option<&'a mut [u8]>> for CopyBuffer<'a> {
    fn from(buf: Option<&'a mut [u8]>) -> Self {
        buf.map_or(CopyBuffer::Default, CopyBuffer::Provided)
    }
}

/// Picks the staging buffer size for a payload of `len` bytes.
pub fn buffer_size_for(len: u64) -> usize {
    if len > LARGE_FILE_THRESHOLD {
        LARGE_BUFFER_SIZE
    } else {
        DEFAULT_BUFFER_SIZE
    }
}

/// Copies everything from `src` into `dst` and returns the number of bytes moved.
///
/// Reads up to one buffer's worth at a time and writes exactly what was read,
/// until `src` reports end-of-data. Interrupted reads are reissued. Any other
/// read error is reported as [`Error::Read`], any write error as
/// [`Error::Write`], both with [`Origin::Stream`].
pub fn copy<'a, R, W>(src: &mut R, dst: &mut W, buffer: impl Into<CopyBuffer<'a>>) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut owned: Vec<u8>;
    let buf: &mut [u8] = match buffer.into() {
        CopyBuffer::Provided(buf) if !buf.is_empty() => buf,
        _ => {
            owned = vec![0u8; DEFAULT_BUFFER_SIZE];
            &mut owned
        }
    };

    let mut total: u64 = 0;
    loop {
        let n = match src.read(buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::read(Origin::Stream, e)),
        };
        dst.write_all(&buf[..n]).on_write(Origin::Stream)?;
        total += n as u64;
    }
    dst.flush().on_write(Origin::Stream)?;

    debug!(bytes = total, buffer = buf.len(), "copy finished");
    Ok(total)
}

/// Copies the regular file `src` to `dst`, creating or truncating `dst`.
///
/// Directories, devices, pipes and sockets are rejected with
/// [`Error::NotRegularFile`] before anything is opened, and so is a `dst`
/// that is `src` itself ([`Error::SamePath`]). Errors raised while
/// moving data name the file they happened on.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let src = src.as_ref();
    let len = regular_file_len(src)?;
    let mut buf = vec![0u8; buffer_size_for(len)];
    transfer(src, dst.as_ref(), &mut buf)
}

/// Like [`copy_file`], staging through a caller-provided buffer.
pub fn copy_file_with(src: impl AsRef<Path>, dst: impl AsRef<Path>, buf: &mut [u8]) -> Result<u64> {
    let src = src.as_ref();
    regular_file_len(src)?;
    transfer(src, dst.as_ref(), buf)
}

fn regular_file_len(path: &Path) -> Result<u64> {
    let meta = fs::metadata(path).with_path("stat", path)?;
    if !meta.is_file() {
        return Err(Error::NotRegularFile { path: path.to_path_buf() });
    }
    Ok(meta.len())
}

fn transfer(src: &Path, dst: &Path, buf: &mut [u8]) -> Result<u64> {
    if platform::is_same_file(src, dst) {
        return Err(Error::SamePath { path: src.to_path_buf() });
    }
    let mut source = File::open(src).with_path("open", src)?;
    let mut destination = File::create(dst).with_path("create", dst)?;

    let copied = copy(&mut source, &mut destination, buf).map_err(|e| match e {
        Error::Read { source, .. } => Error::read(Origin::file(src), source),
        Error::Write { source, .. } => Error::write(Origin::file(dst), source),
        other => other,
    })?;

    debug!(src = %src.display(), dst = %dst.display(), bytes = copied, "file copied");
    Ok(copied)
}
