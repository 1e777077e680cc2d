//! Build script: stamps the footer build label and tracks embedded inputs.
//!
//! Emits STOCKAI_BUILD_LABEL as "v<version> (<sha>)". Sources, first hit wins:
//! - version: STOCKAI_VERSION, then CARGO_PKG_VERSION
//! - sha: STOCKAI_GIT_SHA, then the first 7 chars of GITHUB_SHA, then `git rev-parse`

use std::env;
use std::process::Command;

/// Files compiled into the binary or linked as assets
const TRACKED_INPUTS: &[&str] = &["nav.json", "tailwind.css", "public/tailwind.css"];

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let version = first_env(&["STOCKAI_VERSION", "CARGO_PKG_VERSION"])
        .unwrap_or_else(|| "unknown".into());

    let sha = first_env(&["STOCKAI_GIT_SHA"])
        .or_else(|| first_env(&["GITHUB_SHA"]).map(|s| s.chars().take(SHORT_SHA_LEN).collect()))
        .or_else(git_short_sha)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=STOCKAI_BUILD_LABEL=v{} ({})", version, sha);

    for var in ["STOCKAI_VERSION", "STOCKAI_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    for input in TRACKED_INPUTS {
        println!("cargo:rerun-if-changed={}", input);
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
}

fn git_short_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", &format!("--short={}", SHORT_SHA_LEN), "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(sha.trim().to_string()).filter(|s| !s.is_empty())
}
