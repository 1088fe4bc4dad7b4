//! Build metadata rendered as a multi-line version string.
//!
//! Git details are captured by the build script; when the crate is built
//! outside a git checkout they fall back to `unknown` and the build is
//! reported as dirty, since its provenance cannot be confirmed.

use std::fmt;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub package: String,
    pub version: String,
    pub commit: Option<String>,
    pub commit_time: Option<String>,
    pub dirty: bool,
    pub rustc: Option<String>,
    pub os: &'static str,
    pub arch: &'static str,
}

impl VersionInfo {
    /// Metadata for the given package, with the workspace's build details.
    pub fn new(package: &str, version: &str) -> Self {
        Self {
            package: package.to_string(),
            version: version.to_string(),
            commit: option_env!("UTILKIT_GIT_COMMIT").map(str::to_string),
            commit_time: option_env!("UTILKIT_GIT_TIME").map(str::to_string),
            dirty: option_env!("UTILKIT_GIT_DIRTY") != Some("false"),
            rustc: option_env!("UTILKIT_RUSTC_VERSION").map(str::to_string),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }

    /// Metadata for this crate.
    pub fn current() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "GitCommit: {}", self.commit.as_deref().unwrap_or(UNKNOWN))?;
        writeln!(f, "Time: {}", self.commit_time.as_deref().unwrap_or(UNKNOWN))?;
        writeln!(
            f,
            "Runtime: rustc {} {}/{}",
            self.rustc.as_deref().unwrap_or(UNKNOWN),
            self.os,
            self.arch
        )?;
        write!(f, "Path: {}", self.package)?;
        if self.dirty {
            write!(f, "\ndirty build!")?;
        }
        Ok(())
    }
}

/// Version string of this crate.
pub fn version() -> String {
    VersionInfo::current().to_string()
}
