//! Developer tasks (artifact verification).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use spdx_gen::render::{extract_identifiers, render};
use std::fs;

/// The workspace root, one level above this crate.
fn project_root() -> Utf8PathBuf {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_owned()
}

fn artifact_path() -> Utf8PathBuf {
    project_root().join(spdx_gen::DEFAULT_DEST)
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  verify-artifact   Check the generated SPDX module has not been edited by hand");
    eprintln!("  artifact-stats    Print identifier counts of the generated SPDX module");
}

/// Re-render the committed module from its own lists and compare.
fn verify_artifact() -> anyhow::Result<()> {
    let path = artifact_path();
    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let (licenses, exceptions) = extract_identifiers(&text)
        .with_context(|| format!("Failed to read identifier lists from {path}"))?;

    if render(&licenses, &exceptions) != text {
        eprintln!("{path} differs from a fresh render.");
        eprintln!("\nRun `cargo run -p spdx-gen-cli` to regenerate.");
        bail!("Artifact verification failed");
    }

    println!(
        "✓ {path} is an untouched render ({} licenses, {} exceptions)",
        licenses.len(),
        exceptions.len()
    );
    Ok(())
}

fn artifact_stats() -> anyhow::Result<()> {
    let path = artifact_path();
    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let (licenses, exceptions) = extract_identifiers(&text)?;
    println!("licenses:   {}", licenses.len());
    println!("exceptions: {}", exceptions.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = args.first().map(String::as_str).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "verify-artifact" => verify_artifact(),
        "artifact-stats" => artifact_stats(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
}
