//! CLI entry point for spdx-gen.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, printing and
//! exit codes. The pipeline lives in the `spdx-gen` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use spdx_gen::{
    DEFAULT_BASE_URL, DEFAULT_DEST, GenerateOutcome, HttpTransport, MirrorTransport, Transport,
    WriteStatus,
};
use time::format_description::well_known::Rfc3339;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "spdx-gen",
    version,
    about = "Regenerate the SPDX license identifier module"
)]
struct Cli {
    /// Generated module to write.
    #[arg(long, default_value = DEFAULT_DEST)]
    dest: Utf8PathBuf,

    /// Registry base URL serving licenses.json and exceptions.json.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Read licenses.json and exceptions.json from this directory instead of the registry.
    #[arg(long, conflicts_with = "base_url")]
    mirror: Option<Utf8PathBuf>,

    /// Only report whether the module is stale (exit 1) instead of writing it.
    #[arg(long)]
    check: bool,

    /// Log fetch and write details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let transport: Box<dyn Transport> = match &cli.mirror {
        Some(dir) => Box::new(MirrorTransport::new(dir.clone())),
        None => Box::new(HttpTransport::new(&cli.base_url)?),
    };

    if cli.check {
        cmd_check(transport.as_ref(), &cli.dest)
    } else {
        cmd_generate(transport.as_ref(), &cli.dest)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(transport: &dyn Transport, dest: &camino::Utf8Path) -> anyhow::Result<()> {
    let outcome = spdx_gen::generate(transport, dest)?;
    println!("{}", describe(&outcome)?);
    Ok(())
}

fn cmd_check(transport: &dyn Transport, dest: &camino::Utf8Path) -> anyhow::Result<()> {
    if spdx_gen::check(transport, dest)? {
        println!("{dest} is up to date");
        Ok(())
    } else {
        eprintln!("{dest} is out of date");
        eprintln!("\nRun `cargo run -p spdx-gen-cli` to regenerate.");
        std::process::exit(1);
    }
}

fn describe(outcome: &GenerateOutcome) -> anyhow::Result<String> {
    let dest = &outcome.dest;
    Ok(match (outcome.status, outcome.last_modified) {
        (WriteStatus::Unchanged, _) => format!("{dest} is up to date"),
        (WriteStatus::Written, None) => format!("wrote {dest} (no last-modified)"),
        (WriteStatus::Written, Some(ts)) => {
            let ts = ts.format(&Rfc3339).context("format last-modified")?;
            format!("wrote {dest} (last-modified {ts})")
        }
    })
}
