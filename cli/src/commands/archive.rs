use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use utilkit_common::{config::Config, success};
use utilkit_core::archive;

use crate::terminal::{print, spinner};

pub fn zip(src: &Path, dest: &Path, cfg: &Config) -> anyhow::Result<ExitCode> {
    let spinner = spinner::start(format!("Packing {}", src.display()), cfg);
    let files: usize = archive::zip(src, dest)
        .with_context(|| format!("packing {} into {}", src.display(), dest.display()))?;
    drop(spinner);

    let unit: &str = if files == 1 { "file" } else { "files" };
    success!("{files} {unit} packed into {}", dest.display());
    Ok(ExitCode::SUCCESS)
}

pub fn unzip(src: &Path, dst: &Path, cfg: &Config) -> anyhow::Result<ExitCode> {
    let spinner = spinner::start(format!("Unpacking {}", src.display()), cfg);
    let files: Vec<PathBuf> = archive::unzip(src, dst)
        .with_context(|| format!("extracting {} into {}", src.display(), dst.display()))?;
    drop(spinner);

    if cfg.quiet < 2 {
        for (idx, path) in files.iter().enumerate() {
            print::tree_head(idx, &path.display().to_string());
        }
    }
    success!("{} file(s) extracted", files.len());
    Ok(ExitCode::SUCCESS)
}
