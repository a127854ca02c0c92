// build.rs
use std::process::Command;

const GIT_COMMIT_HASH_KEY: &str = "DEALCACHE_GIT_COMMIT_HASH";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    // builds from a source tarball have no git metadata
    let commit_hash = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_default();
    if !commit_hash.is_empty() {
        println!("cargo:rustc-env={GIT_COMMIT_HASH_KEY}={commit_hash}");
    }
}
