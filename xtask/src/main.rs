//! Custom cargo commands for lantern.
//!
//! Usage:
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (check + test + clippy, native and wasm)
//!   cargo xtask build-wasm  - Build the browser bundle into pkg/
//!   cargo xtask bench       - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("build-wasm") => build_wasm()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test        Run all Rust tests
  check       Quick check (cargo check + test + clippy, incl. wasm feature)
  build-wasm  Build the browser bundle with wasm-pack (output: pkg/)
  bench       Run benchmarks
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo check (wasm)...");
    run_cargo(&[
        "check",
        "--lib",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build the wasm bundle the blog layout loads
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--out-dir",
            "pkg",
            "--",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (install with `cargo install wasm-pack`)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Bundle written to {}", root.join("pkg").display());
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
