use std::process::ExitCode;

use anyhow::Context;
use colored::*;
use utilkit_common::{config::Config, sanitize, success, warn};

use crate::commands::NullsAction;
use crate::terminal::print;

pub fn nulls(action: NullsAction, cfg: &Config) -> anyhow::Result<ExitCode> {
    match action {
        NullsAction::Check { path } => {
            let found: bool = sanitize::has_null_byte_in_file(&path)
                .with_context(|| format!("scanning {}", path.display()))?;
            if cfg.quiet < 2 {
                let verdict: ColoredString = if found { "present".red().bold() } else { "none".green() };
                print::aligned_line("Null bytes", verdict);
            }
            if found {
                warn!("{} contains null bytes", path.display());
                return Ok(ExitCode::from(1));
            }
            success!("{} is clean", path.display());
            Ok(ExitCode::SUCCESS)
        }
        NullsAction::Strip { path } => {
            let removed: usize = sanitize::remove_null_byte_in_file(&path)
                .with_context(|| format!("stripping {}", path.display()))?;
            success!("{removed} null bytes removed from {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
