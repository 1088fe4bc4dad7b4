use std::process::ExitCode;

use utilkit_common::version::VersionInfo;

use crate::terminal::print;

pub fn version() -> ExitCode {
    let info = VersionInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    for line in info.to_string().lines() {
        match line.split_once(": ") {
            Some((key, value)) => print::aligned_line(key, value.to_string()),
            None => print::print_status(line),
        }
    }
    ExitCode::SUCCESS
}
