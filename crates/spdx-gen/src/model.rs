//! Data fetched from the registry.

use time::OffsetDateTime;

/// One of the two registry documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Licenses,
    Exceptions,
}

impl Resource {
    /// Fetch order: licenses first, then exceptions.
    pub const ALL: [Resource; 2] = [Resource::Licenses, Resource::Exceptions];

    /// Document name relative to the registry base.
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Licenses => "licenses.json",
            Resource::Exceptions => "exceptions.json",
        }
    }

    /// Top-level key holding the entry array.
    pub fn key(self) -> &'static str {
        match self {
            Resource::Licenses => "licenses",
            Resource::Exceptions => "exceptions",
        }
    }

    /// Field carrying the identifier inside each entry.
    pub fn id_field(self) -> &'static str {
        match self {
            Resource::Licenses => "licenseId",
            Resource::Exceptions => "licenseExceptionId",
        }
    }
}

/// Identifiers of a single document, in upstream order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedList {
    pub resource: Resource,
    pub identifiers: Vec<String>,
    pub last_modified: Option<OffsetDateTime>,
}

/// Snapshot of both lists, sorted, with the newest source timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LicenseList {
    pub licenses: Vec<String>,
    pub exceptions: Vec<String>,
    pub last_modified: Option<OffsetDateTime>,
}

impl LicenseList {
    pub fn from_fetched(licenses: FetchedList, exceptions: FetchedList) -> Self {
        let last_modified = [licenses.last_modified, exceptions.last_modified]
            .into_iter()
            .flatten()
            .max();

        let mut licenses = licenses.identifiers;
        let mut exceptions = exceptions.identifiers;
        licenses.sort();
        exceptions.sort();

        Self {
            licenses,
            exceptions,
            last_modified,
        }
    }
}
