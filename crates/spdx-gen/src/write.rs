//! Write the rendered module only when it changed.

use anyhow::Context;
use camino::Utf8Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteStatus {
    /// The destination already held the rendered text; nothing was touched.
    Unchanged,
    /// The destination was created or overwritten.
    Written,
}

/// Whether `dest` already holds exactly `content`.
///
/// A missing or unreadable destination counts as different.
pub fn is_current(dest: &Utf8Path, content: &str) -> bool {
    match std::fs::read(dest) {
        Ok(existing) => existing == content.as_bytes(),
        Err(err) => {
            debug!(%dest, %err, "destination not readable, treating as changed");
            false
        }
    }
}

/// Overwrite `dest` with `content` unless it is already current.
///
/// Skipping the write keeps the file's mtime from moving on no-op runs.
pub fn write_if_changed(dest: &Utf8Path, content: &str) -> anyhow::Result<WriteStatus> {
    if is_current(dest, content) {
        return Ok(WriteStatus::Unchanged);
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(dest, content).with_context(|| format!("write {dest}"))?;
    Ok(WriteStatus::Written)
}
