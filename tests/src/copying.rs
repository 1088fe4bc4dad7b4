#![cfg(test)]
use std::fs::{self, File};
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::TempDir;
use utilkit_common::sanitize;
use utilkit_core::copy::{DEFAULT_BUFFER_SIZE, LARGE_BUFFER_SIZE, LARGE_FILE_THRESHOLD, buffer_size_for};
use utilkit_core::{CopyBuffer, copy, copy_file, copy_file_with};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

/// A multi-MiB file pushed through a buffer much smaller than itself must
/// come out byte-identical.
#[test]
fn copy_file_through_small_buffer() -> anyhow::Result<()> {
    let dir: TempDir = TempDir::new()?;
    let src = dir.path().join("big.bin");
    let dst = dir.path().join("big.copy");
    let data: Vec<u8> = pattern(3 * 1024 * 1024 + 17);
    fs::write(&src, &data)?;

    let mut buf = vec![0u8; 1000];
    let copied: u64 = copy_file_with(&src, &dst, &mut buf)?;

    assert_eq!(copied, data.len() as u64);
    assert_eq!(fs::read(&dst)?, data);
    Ok(())
}

fn same_contents(a: &Path, b: &Path) -> anyhow::Result<bool> {
    let (mut a, mut b) = (File::open(a)?, File::open(b)?);
    if a.metadata()?.len() != b.metadata()?.len() {
        return Ok(false);
    }
    let (mut left, mut right) = (vec![0u8; 1 << 20], vec![0u8; 1 << 20]);
    loop {
        let n = a.read(&mut left)?;
        if n == 0 {
            return Ok(true);
        }
        b.read_exact(&mut right[..n])?;
        if left[..n] != right[..n] {
            return Ok(false);
        }
    }
}

/// A file just over the large-file threshold goes through the 1 MiB buffer
/// and must still come out identical.
#[test]
fn copy_file_above_large_threshold() -> anyhow::Result<()> {
    let dir: TempDir = TempDir::new()?;
    let src = dir.path().join("huge.bin");
    let dst = dir.path().join("huge.copy");
    let len: u64 = LARGE_FILE_THRESHOLD + 1;

    {
        let mut file = File::create(&src)?;
        file.set_len(len)?;
        file.write_all(b"head")?;
        file.seek(SeekFrom::Start(len / 2))?;
        file.write_all(b"middle")?;
        file.seek(SeekFrom::Start(len - 4))?;
        file.write_all(b"tail")?;
    }
    assert_eq!(buffer_size_for(len), LARGE_BUFFER_SIZE);

    assert_eq!(copy_file(&src, &dst)?, len);
    assert!(same_contents(&src, &dst)?);
    Ok(())
}

#[test]
fn copy_file_with_policy_buffer() -> anyhow::Result<()> {
    let dir: TempDir = TempDir::new()?;
    let src = dir.path().join("in.txt");
    let dst = dir.path().join("out.txt");
    fs::write(&src, "\n\r")?;

    assert_eq!(buffer_size_for(2), DEFAULT_BUFFER_SIZE);
    assert_eq!(copy_file(&src, &dst)?, 2);
    assert_eq!(fs::read(&dst)?, b"\n\r");
    Ok(())
}

#[test]
fn stream_copy_then_strip_nulls() -> anyhow::Result<()> {
    let mut src = Cursor::new(b"id\0,name\0\nfoo,bar\n".to_vec());
    let mut staged: Vec<u8> = Vec::new();
    let copied = copy(&mut src, &mut staged, CopyBuffer::Default)?;
    assert_eq!(copied, 18);
    assert!(sanitize::has_null_byte(&staged));

    let cleaned = sanitize::remove_null_byte_in_reader(Cursor::new(staged))?;
    assert_eq!(cleaned.into_inner(), b"id,name\nfoo,bar\n");
    Ok(())
}

#[test]
fn strip_nulls_in_copied_file() -> anyhow::Result<()> {
    let dir: TempDir = TempDir::new()?;
    let src = dir.path().join("dirty.csv");
    let dst = dir.path().join("clean.csv");
    fs::write(&src, b"a\0b\0c\n")?;

    copy_file(&src, &dst)?;
    assert!(sanitize::has_null_byte_in_file(&dst)?);
    assert_eq!(sanitize::remove_null_byte_in_file(&dst)?, 2);
    assert!(!sanitize::has_null_byte_in_file(&dst)?);
    assert_eq!(fs::read(&src)?, b"a\0b\0c\n");
    Ok(())
}

#[test]
fn copy_file_refuses_directories() -> anyhow::Result<()> {
    let dir: TempDir = TempDir::new()?;
    let err = copy_file(dir.path(), dir.path().join("x")).unwrap_err();
    assert!(matches!(err, utilkit_common::Error::NotRegularFile { .. }));
    Ok(())
}
