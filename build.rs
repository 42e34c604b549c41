//! Stamps the build with a version and git revision.
//!
//! `MEDIA_SHELL_VERSION` is taken from the environment when set (release
//! packaging), otherwise from `git describe`, otherwise from Cargo.toml.
//! `MEDIA_SHELL_GIT_SHA` is the short HEAD revision or "unknown".

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let version = std::env::var("MEDIA_SHELL_VERSION")
        .ok()
        .or_else(|| git(&["describe", "--tags", "--abbrev=0"]))
        .map(|tag| tag.trim_start_matches('v').to_string())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let sha = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=MEDIA_SHELL_VERSION={version}");
    println!("cargo:rustc-env=MEDIA_SHELL_GIT_SHA={sha}");
    println!("cargo:rerun-if-env-changed=MEDIA_SHELL_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
