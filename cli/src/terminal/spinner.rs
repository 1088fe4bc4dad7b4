use std::io;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use utilkit_common::config::Config;

static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Keeps a spinner on screen until dropped.
pub struct Spinner {
    pb: ProgressBar,
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
        if let Ok(mut active) = ACTIVE.lock() {
            *active = None;
        }
    }
}

pub fn start(msg: String, cfg: &Config) -> Spinner {
    let pb = if cfg.quiet > 0 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };

    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }
    Spinner { pb }
}

/// Log sink that prints above a running spinner instead of through it.
pub struct SpinnerWriter;

impl io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active = ACTIVE.lock().ok().and_then(|guard| guard.clone());
        match active {
            Some(pb) => pb.suspend(|| io::Write::write_all(&mut io::stderr(), buf))?,
            None => io::Write::write_all(&mut io::stderr(), buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut io::stderr())
    }
}
