//! Directory listing, content sniffing and small file helpers.

use std::fs::{self, DirBuilder, File};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, trace};
use utilkit_common::error::{Error, Origin, Result, ResultExt};

/// Number of leading bytes inspected when sniffing a file.
pub const SNIFF_LEN: usize = 512;

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guesses the MIME type of `data` from its leading bytes.
///
/// Known binary signatures win; infer's text matchers (shell scripts, HTML,
/// XML) are ignored so that any such UTF-8 file stays plain text. Otherwise empty input or UTF-8 text without
/// binary control bytes is plain text, and anything else is an octet stream.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    let head = &data[..data.len().min(SNIFF_LEN)];

    let binary = infer::get(head).filter(|kind| kind.matcher_type() != infer::MatcherType::Text);
    if let Some(kind) = binary {
        return kind.mime_type();
    }
    if looks_like_text(head) {
        return TEXT_PLAIN_UTF8;
    }
    OCTET_STREAM
}

fn looks_like_text(head: &[u8]) -> bool {
    let binary = head
        .iter()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f));
    if binary {
        return false;
    }
    // A multi-byte sequence cut off by the sniff window is still text.
    match std::str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// Recursively lists regular files under `dir` whose sniffed content type is
/// `content_type` and whose extension is one of `extensions`.
///
/// Extensions include the leading dot (`".csv"`). An empty extension list
/// matches nothing. Symlinks are not followed. The result is sorted.
pub fn list_files<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    content_type: &str,
    extensions: &[S],
) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    walk(dir.as_ref(), &mut |path| {
        if has_extension(path, extensions) {
            candidates.push(path.to_path_buf());
        }
    })?;
    trace!(count = candidates.len(), "candidates before sniffing");

    let sniffed: Vec<(PathBuf, &'static str)> = candidates
        .into_par_iter()
        .map(|path| {
            let head = read_head(&path)?;
            Ok((path, detect_content_type(&head)))
        })
        .collect::<Result<_>>()?;

    let mut files: Vec<PathBuf> = sniffed
        .into_iter()
        .filter(|(_, kind)| *kind == content_type)
        .map(|(path, _)| path)
        .collect();
    files.sort();

    debug!(dir = %dir.as_ref().display(), matched = files.len(), "files listed");
    Ok(files)
}

fn walk(dir: &Path, visit: &mut dyn FnMut(&Path)) -> Result<()> {
    for entry in fs::read_dir(dir).with_path("read dir", dir)? {
        let entry = entry.with_path("read dir", dir)?;
        let path = entry.path();
        let file_type = entry.file_type().with_path("stat", &path)?;

        if file_type.is_dir() {
            walk(&path, visit)?;
        } else if file_type.is_file() {
            visit(&path);
        }
    }
    Ok(())
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|want| want.as_ref().strip_prefix('.') == Some(ext))
}

fn read_head(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).with_path("open", path)?;
    let mut head = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .on_read(Origin::file(path))?;
    Ok(head)
}

/// Positions `reader` just past its first line and returns the new offset.
///
/// The reader is rewound first, so the offset is always absolute. A source
/// without any `\n` is an error and its position is left unspecified.
pub fn skip_first_row<R: Read + Seek>(reader: &mut R) -> Result<u64> {
    reader.seek(SeekFrom::Start(0)).on_read(Origin::Stream)?;

    let mut first = Vec::new();
    BufReader::new(&mut *reader)
        .read_until(b'\n', &mut first)
        .on_read(Origin::Stream)?;

    if first.last() != Some(&b'\n') {
        return Err(Error::MissingNewline { origin: Origin::Stream });
    }

    reader
        .seek(SeekFrom::Start(first.len() as u64))
        .on_read(Origin::Stream)
}

/// Creates `dir` and any missing parents.
///
/// On unix the new directories get `mode` (before umask), `0o777` if unset.
/// Elsewhere `mode` is ignored.
pub fn create_dir(dir: impl AsRef<Path>, mode: Option<u32>) -> Result<()> {
    let dir = dir.as_ref();
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode.unwrap_or(0o777));
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(dir).with_path("create dir", dir)
}
