use std::fs;
use std::path::Path;

pub fn is_darwin() -> bool {
    cfg!(target_os = "macos")
}

pub fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

/// Returns `true` if anything (file, directory, device) exists at `path`.
///
/// Broken symlinks and permission errors both count as "does not exist".
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().try_exists().unwrap_or(false)
}

/// Returns `true` if `a` and `b` resolve to the same existing file.
///
/// Symlinks and `..` components are resolved first. A path that does not
/// exist yet never matches.
pub fn is_same_file(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
