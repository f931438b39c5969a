//! SPDX license identifiers and license-expression validation.
//!
//! The identifier lists, the expression grammar, [`is_match`] and
//! [`suggestions`] live in a module generated by `spdx-gen`; do not edit it by
//! hand.
//!
//! The module checked in here was rendered from the offline mirror in
//! `tests/fixtures/mirror`, which carries a subset of the SPDX registry. Until
//! it is regenerated from <https://spdx.org/licenses/> with
//! `cargo run -p spdx-gen-cli`, identifiers missing from that subset are
//! rejected.

#![forbid(unsafe_code)]

mod licenses;

pub use licenses::{
    EXCEPTION_IDENTIFIERS, LICENSE_EXPRESSION_PATTERN, LICENSE_IDENTIFIERS, LICENSE_REF,
    NONSTANDARD, is_match, suggestions,
};

/// Outcome of validating a license string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LicenseCheck {
    Valid,
    /// Not a valid expression; carries close identifiers when any qualify.
    Invalid { suggestions: Option<Vec<&'static str>> },
}

/// Validate `license`, computing suggestions only when it does not match.
pub fn check(license: &str) -> LicenseCheck {
    if is_match(license) {
        LicenseCheck::Valid
    } else {
        LicenseCheck::Invalid {
            suggestions: suggestions(license),
        }
    }
}
