use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use utilkit_common::{config::Config, success};
use utilkit_core::convert;

use crate::terminal::{print, spinner};

pub fn convert(workbook: &Path, tsv: bool, cfg: &Config) -> anyhow::Result<ExitCode> {
    let spinner = spinner::start(format!("Reading {}", workbook.display()), cfg);
    let written: Vec<PathBuf> = if tsv {
        convert::convert_spreadsheet_to_tsv(workbook)
    } else {
        convert::convert_spreadsheet_to_csv(workbook)
    }
    .with_context(|| format!("converting {}", workbook.display()))?;
    drop(spinner);

    if cfg.quiet < 2 {
        for (idx, path) in written.iter().enumerate() {
            print::tree_head(idx, &path.display().to_string());
        }
    }
    success!("{} sheet(s) exported", written.len());
    Ok(ExitCode::SUCCESS)
}

pub fn dos2unix(path: &Path) -> anyhow::Result<ExitCode> {
    convert::replace_dos_to_unix_in_file(path)
        .with_context(|| format!("rewriting line endings of {}", path.display()))?;
    success!("{} now uses LF line endings", path.display());
    Ok(ExitCode::SUCCESS)
}

pub fn delimiter(path: &Path, pattern: &str, new: &str) -> anyhow::Result<ExitCode> {
    convert::replace_delimiter_in_file(path, pattern, new)
        .with_context(|| format!("replacing {pattern:?} in {}", path.display()))?;
    success!("delimiters in {} replaced", path.display());
    Ok(ExitCode::SUCCESS)
}
