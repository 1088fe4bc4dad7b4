//! Zip creation and extraction.
//!
//! The container format itself is handled by the `zip` crate; this module
//! only decides entry naming and where extracted files land.

use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use utilkit_common::error::{Error as CommonError, ResultExt};
use utilkit_common::platform;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::copy::{CopyBuffer, copy};
use crate::error::{Error, Result};

/// Packs `src` (a file or a directory tree) into a new zip at `archive`.
///
/// Entry names are relative to the parent of `src`, so zipping `data/` yields
/// entries like `data/a.csv`. Returns the number of file entries written.
pub fn zip(src: impl AsRef<Path>, archive: impl AsRef<Path>) -> Result<usize> {
    let src = src.as_ref();
    let archive = archive.as_ref();

    let meta = fs::metadata(src).with_path("stat", src)?;
    let base = src.parent().unwrap_or_else(|| Path::new(""));
    if platform::is_same_file(src, archive) {
        return Err(CommonError::SamePath { path: src.to_path_buf() }.into());
    }

    let out = File::create(archive).with_path("create", archive)?;
    // The archive may live inside `src`; it must not be packed into itself.
    let skip = fs::canonicalize(archive).with_path("stat", archive)?;
    let mut writer = ZipWriter::new(out);

    let written = if meta.is_dir() {
        add_dir(&mut writer, base, src, &skip)?
    } else if meta.is_file() {
        add_file(&mut writer, base, src)?;
        1
    } else {
        return Err(CommonError::NotRegularFile { path: src.to_path_buf() }.into());
    };

    writer.finish()?;
    debug!(src = %src.display(), archive = %archive.display(), files = written, "archive written");
    Ok(written)
}

/// Extracts every entry of `archive` below `dst`, creating `dst` if needed.
///
/// Entries whose names would resolve outside `dst` are refused. Returns the
/// paths of the extracted files.
pub fn unzip(archive: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let archive = archive.as_ref();
    let dst = dst.as_ref();

    let file = File::open(archive).with_path("open", archive)?;
    let mut reader = ZipArchive::new(file)?;
    fs::create_dir_all(dst).with_path("create dir", dst)?;

    let mut extracted = Vec::new();
    for index in 0..reader.len() {
        let mut entry = reader.by_index(index)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| Error::UnsafeEntry { name: entry.name().to_string() })?;
        let target = dst.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).with_path("create dir", &target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).with_path("create dir", parent)?;
        }
        let mut out = File::create(&target).with_path("create", &target)?;
        copy(&mut entry, &mut out, CopyBuffer::Default)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(mode & 0o7777))
                .with_path("chmod", &target)?;
        }

        extracted.push(target);
    }

    debug!(archive = %archive.display(), dst = %dst.display(), files = extracted.len(), "archive extracted");
    Ok(extracted)
}

fn add_dir<W: Write + Seek>(
    writer: &mut ZipWriter<W>,
    base: &Path,
    dir: &Path,
    skip: &Path,
) -> Result<usize> {
    writer.add_directory(entry_name(base, dir), options_for(dir)?)?;

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_path("read dir", dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_path("read dir", dir)?;
    entries.sort();

    let mut written = 0;
    for path in entries {
        let meta = fs::symlink_metadata(&path).with_path("stat", &path)?;
        if meta.is_dir() {
            written += add_dir(writer, base, &path, skip)?;
        } else if meta.is_file() {
            if fs::canonicalize(&path).is_ok_and(|p| p == skip) {
                continue;
            }
            add_file(writer, base, &path)?;
            written += 1;
        }
    }
    Ok(written)
}

fn add_file<W: Write + Seek>(writer: &mut ZipWriter<W>, base: &Path, path: &Path) -> Result<()> {
    writer.start_file(entry_name(base, path), options_for(path)?)?;
    let mut source = File::open(path).with_path("open", path)?;
    copy(&mut source, writer, CopyBuffer::Default)?;
    Ok(())
}

/// Zip entry names always use `/`, whatever the host separator.
fn entry_name(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn options_for(path: &Path) -> Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path).with_path("stat", path)?.permissions().mode();
        options.unix_permissions(mode & 0o7777)
    };
    #[cfg(not(unix))]
    let _ = path;

    Ok(options)
}
