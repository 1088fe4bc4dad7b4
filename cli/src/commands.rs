pub mod archive;
pub mod check;
pub mod convert;
pub mod copy;
pub mod list;
pub mod nulls;
pub mod version;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use utilkit_common::config::Config;
use utilkit_core::files::TEXT_PLAIN_UTF8;

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Everyday file and input utilities.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat to hide details as well
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity; repeat for trace output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy a regular file
    #[command(alias = "cp")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        /// Stage the copy through a buffer of this many bytes
        #[arg(long)]
        buffer_size: Option<usize>,
    },
    /// Detect or strip null bytes
    #[command(alias = "n")]
    Nulls {
        #[command(subcommand)]
        action: NullsAction,
    },
    /// Validate a domain, IP, CIDR or URL
    #[command(alias = "c")]
    Check { kind: CheckKind, value: String },
    /// Export every sheet of a workbook as CSV (or TSV)
    Convert {
        workbook: PathBuf,
        /// Write tab-separated files instead
        #[arg(long)]
        tsv: bool,
    },
    /// Rewrite CRLF line endings as LF in place
    Dos2unix { path: PathBuf },
    /// Replace a delimiter pattern with a single character in place
    Delimiter {
        path: PathBuf,
        /// Regular expression matching the old delimiter
        pattern: String,
        /// Character literal for the new delimiter, e.g. '\t'
        new: String,
    },
    /// Pack a file or directory into a zip archive
    #[command(alias = "z")]
    Zip { src: PathBuf, archive: PathBuf },
    /// Extract a zip archive
    #[command(alias = "u")]
    Unzip { archive: PathBuf, dst: PathBuf },
    /// List files by content type and extension
    #[command(alias = "l")]
    List {
        dir: PathBuf,
        #[arg(long, default_value = TEXT_PLAIN_UTF8)]
        content_type: String,
        /// Extension to keep, with the leading dot; may be repeated
        #[arg(long = "ext", required = true)]
        ext: Vec<String>,
    },
    /// Show build information
    #[command(alias = "v")]
    Version,
}

#[derive(Subcommand)]
pub enum NullsAction {
    /// Report whether a file contains null bytes
    Check { path: PathBuf },
    /// Remove null bytes from a file in place
    Strip { path: PathBuf },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Domain,
    Ip,
    Ipv4,
    Ipv6,
    Cidr,
    Ipv4Cidr,
    Ipv6Cidr,
    Url,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let buffer_size = match &self.command {
            Commands::Copy { buffer_size, .. } => *buffer_size,
            _ => None,
        };
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            verbose: self.verbose,
            buffer_size,
        }
    }
}
