//! The `generate` and `check` use cases: fetch, render, then write or compare.

use camino::{Utf8Path, Utf8PathBuf};
use time::OffsetDateTime;
use tracing::info;

use crate::fetch::{Transport, fetch_license_list};
use crate::render::render;
use crate::write::{WriteStatus, is_current, write_if_changed};

/// Result of a generate run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub dest: Utf8PathBuf,
    pub status: WriteStatus,
    /// Newest upstream `last-modified`; always `None` when nothing was written.
    pub last_modified: Option<OffsetDateTime>,
}

/// Fetch both lists, render the module and write it to `dest` if it changed.
pub fn generate(transport: &dyn Transport, dest: &Utf8Path) -> anyhow::Result<GenerateOutcome> {
    let list = fetch_license_list(transport)?;
    info!(
        licenses = list.licenses.len(),
        exceptions = list.exceptions.len(),
        "fetched SPDX lists"
    );

    let content = render(&list.licenses, &list.exceptions);
    let status = write_if_changed(dest, &content)?;
    info!(%dest, ?status, "generated module");

    let last_modified = match status {
        WriteStatus::Written => list.last_modified,
        WriteStatus::Unchanged => None,
    };

    Ok(GenerateOutcome {
        dest: dest.to_owned(),
        status,
        last_modified,
    })
}

/// Whether `dest` already matches what [`generate`] would write. Never writes.
pub fn check(transport: &dyn Transport, dest: &Utf8Path) -> anyhow::Result<bool> {
    let list = fetch_license_list(transport)?;
    let content = render(&list.licenses, &list.exceptions);
    Ok(is_current(dest, &content))
}
