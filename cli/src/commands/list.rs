use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use utilkit_common::{config::Config, info, success};
use utilkit_core::files;

use crate::terminal::{print, spinner};

pub fn list(dir: &Path, content_type: &str, ext: &[String], cfg: &Config) -> anyhow::Result<ExitCode> {
    let spinner = spinner::start(format!("Sniffing files under {}", dir.display()), cfg);
    let found: Vec<PathBuf> = files::list_files(dir, content_type, ext)
        .with_context(|| format!("listing {}", dir.display()))?;
    drop(spinner);

    if found.is_empty() {
        info!("No {content_type} files with extension {} found", ext.join(", "));
        return Ok(ExitCode::from(1));
    }

    if cfg.quiet < 2 {
        for (idx, path) in found.iter().enumerate() {
            print::tree_head(idx, &path.display().to_string());
        }
    }
    let unit: &str = if found.len() == 1 { "file matches" } else { "files match" };
    success!("{} {unit}", found.len());
    Ok(ExitCode::SUCCESS)
}
