//! # utilkit common
//!
//! Building blocks shared by every other crate in the workspace.
//!
//! * **[`validate`]**: pure predicates for domains, IP / CIDR literals and URLs.
//! * **[`sanitize`]**: null-byte detection and removal over memory, readers and files.
//! * **[`text`]**: character-literal parsing and byte-level text rewrites.
//! * **[`error`]**: the shared error taxonomy.
//!
//! The logging macros exported here forward to `tracing` and tag every event
//! with a `status` field that the CLI formatter turns into a marker.

pub mod config;
pub mod error;
pub mod platform;
pub mod sanitize;
pub mod text;
pub mod validate;
pub mod version;

pub use error::{Error, Origin, Result, ResultExt};

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!(status = "info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(status = "warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ::tracing::error!(status = "error", $($arg)*)
    };
}
