use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn rustc_channel() -> Option<String> {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    let version = String::from_utf8(output.stdout).ok()?;
    version.split_whitespace().nth(1).map(str::to_string)
}

fn main() {
    if let Some(commit) = git(&["rev-parse", "HEAD"]) {
        println!("cargo:rustc-env=UTILKIT_GIT_COMMIT={commit}");
    }
    if let Some(time) = git(&["log", "-1", "--format=%cI"]) {
        println!("cargo:rustc-env=UTILKIT_GIT_TIME={time}");
    }
    if git(&["rev-parse", "--git-dir"]).is_some() {
        let dirty = git(&["status", "--porcelain"]).is_some();
        println!("cargo:rustc-env=UTILKIT_GIT_DIRTY={dirty}");
    }
    if let Some(channel) = rustc_channel() {
        println!("cargo:rustc-env=UTILKIT_RUSTC_VERSION={channel}");
    }
    println!("cargo:rerun-if-changed=build.rs");
    if let Some(head) = git(&["rev-parse", "--git-path", "HEAD"]) {
        println!("cargo:rerun-if-changed={head}");
    }
}
