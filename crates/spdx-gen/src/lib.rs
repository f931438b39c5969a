//! Regenerates the `spdx-licenses` identifier module from the SPDX registry.
//!
//! The pipeline is three straight-line stages:
//! - fetch: download `licenses.json` and `exceptions.json` through a [`Transport`]
//! - render: embed the sorted identifier lists into the module template
//! - write: overwrite the destination only when the rendered text differs
//!
//! The CLI crate depends on this; it only handles argument parsing and printing.

#![forbid(unsafe_code)]

pub mod fetch;
pub mod model;
pub mod render;
pub mod timestamp;
pub mod write;

mod generate;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use fetch::{
    fetch_license_list, fetch_resource, parse_identifiers, Document, HttpTransport,
    MirrorTransport, Transport,
};
pub use generate::{check, generate, GenerateOutcome};
pub use model::{FetchedList, LicenseList, Resource};
pub use render::{render, LICENSE_REF, NONSTANDARD};
pub use timestamp::parse_last_modified;
pub use write::WriteStatus;

/// Registry the lists are fetched from.
pub const DEFAULT_BASE_URL: &str = "https://spdx.org/licenses/";

/// Where the generated module lives, relative to the workspace root.
pub const DEFAULT_DEST: &str = "crates/spdx-licenses/src/licenses.rs";
