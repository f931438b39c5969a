//! Fetch the registry documents and pull out their identifiers.
//!
//! Network access sits behind [`Transport`] so the pipeline can run against the
//! live registry, a local mirror, or an in-memory fake in tests.

use anyhow::{Context, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use reqwest::Url;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::LAST_MODIFIED;
use serde_json::Value;
use tracing::debug;

use crate::model::{FetchedList, LicenseList, Resource};
use crate::timestamp::parse_last_modified;

/// A fetched document body and its raw `last-modified` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub body: String,
    pub last_modified: Option<String>,
}

pub trait Transport {
    /// Fetch `file_name` (e.g. `licenses.json`) from the source.
    fn get(&self, file_name: &str) -> anyhow::Result<Document>;
}

/// Blocking HTTP transport rooted at a registry base URL.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_builder(base_url, Client::builder())
    }

    fn with_builder(base_url: &str, builder: ClientBuilder) -> anyhow::Result<Self> {
        let base =
            Url::parse(base_url).with_context(|| format!("invalid base URL: {base_url}"))?;
        let client = builder
            .user_agent(concat!("spdx-gen/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build HTTP client")?;
        Ok(Self { client, base })
    }
}

impl Transport for HttpTransport {
    fn get(&self, file_name: &str) -> anyhow::Result<Document> {
        let url = self
            .base
            .join(file_name)
            .with_context(|| format!("join {file_name} onto {}", self.base))?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .text()
            .with_context(|| format!("read body of {url}"))?;

        Ok(Document {
            body,
            last_modified,
        })
    }
}

/// Reads the documents from a local directory laid out like the registry.
///
/// Mirrored documents carry no `last-modified` value.
#[derive(Clone, Debug)]
pub struct MirrorTransport {
    root: Utf8PathBuf,
}

impl MirrorTransport {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl Transport for MirrorTransport {
    fn get(&self, file_name: &str) -> anyhow::Result<Document> {
        let path = self.root.join(file_name);
        debug!(%path, "read mirror document");
        let body = std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
        Ok(Document {
            body,
            last_modified: None,
        })
    }
}

/// Extract the identifiers of `resource` from a document body.
///
/// The body must be a JSON object whose `resource.key()` entry is an array of
/// objects, each carrying a string `resource.id_field()`.
pub fn parse_identifiers(resource: Resource, body: &str) -> anyhow::Result<Vec<String>> {
    let doc: Value = serde_json::from_str(body)
        .with_context(|| format!("parse {} as JSON", resource.file_name()))?;

    let Some(entries) = doc.get(resource.key()) else {
        bail!(
            "{}: missing top-level `{}` array",
            resource.file_name(),
            resource.key()
        );
    };
    let Some(entries) = entries.as_array() else {
        bail!(
            "{}: top-level `{}` is not an array",
            resource.file_name(),
            resource.key()
        );
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry.get(resource.id_field()) {
            Some(Value::String(id)) => Ok(id.clone()),
            _ => Err(anyhow!(
                "{}: {}[{}] has no string `{}`",
                resource.file_name(),
                resource.key(),
                i,
                resource.id_field()
            )),
        })
        .collect()
}

/// Fetch one document and parse its identifiers and timestamp.
pub fn fetch_resource(
    transport: &dyn Transport,
    resource: Resource,
) -> anyhow::Result<FetchedList> {
    let doc = transport
        .get(resource.file_name())
        .with_context(|| format!("fetch {}", resource.file_name()))?;

    let last_modified = doc.last_modified.as_deref().and_then(|raw| {
        let parsed = parse_last_modified(raw);
        if parsed.is_none() {
            debug!(resource = resource.key(), raw, "ignoring unparsable last-modified");
        }
        parsed
    });

    let identifiers = parse_identifiers(resource, &doc.body)?;

    Ok(FetchedList {
        resource,
        identifiers,
        last_modified,
    })
}

/// Fetch both documents, licenses first, and build the sorted snapshot.
pub fn fetch_license_list(transport: &dyn Transport) -> anyhow::Result<LicenseList> {
    let [licenses, exceptions] = Resource::ALL;
    let licenses = fetch_resource(transport, licenses)?;
    let exceptions = fetch_resource(transport, exceptions)?;
    Ok(LicenseList::from_fetched(licenses, exceptions))
}
