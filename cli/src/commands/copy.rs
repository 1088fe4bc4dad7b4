use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use utilkit_common::{config::Config, success};
use utilkit_core::copy::{self as copier, buffer_size_for};

use crate::terminal::{print, spinner};

pub fn copy(src: &Path, dst: &Path, cfg: &Config) -> anyhow::Result<ExitCode> {
    let start: Instant = Instant::now();
    let size: u64 = std::fs::metadata(src).map(|m| m.len()).unwrap_or(0);
    let buffer: usize = cfg.buffer_size().unwrap_or_else(|| buffer_size_for(size));

    let spinner = spinner::start(format!("Copying {}", src.display()), cfg);
    let copied: u64 = match cfg.buffer_size() {
        Some(len) => copier::copy_file_with(src, dst, &mut vec![0u8; len]),
        None => copier::copy_file(src, dst),
    }
    .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
    drop(spinner);

    if cfg.quiet < 2 {
        print::aligned_line("Source", src.display().to_string());
        print::aligned_line("Destination", dst.display().to_string());
        print::aligned_line("Buffer", format!("{buffer} bytes"));
    }
    success!("{copied} bytes copied in {:.2}s", start.elapsed().as_secs_f64());
    Ok(ExitCode::SUCCESS)
}
