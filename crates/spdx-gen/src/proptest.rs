//! Property-based tests for the rendered grammar.
//!
//! These tests use proptest to verify:
//! - every identifier, `+` form and `WITH` pairing is accepted
//! - the pattern agrees with a hand-written oracle on arbitrary candidates
//! - rendering is independent of input order

use crate::render::{pattern_fragments, render};
use proptest::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

/// SPDX-shaped identifiers: no whitespace and no `+`, so the oracle can split
/// candidates unambiguously.
fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9.-]{0,15}").unwrap()
}

fn arb_identifier_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(arb_identifier(), 1..12)
}

/// A candidate built from known or random parts.
fn arb_candidate(
    licenses: Vec<String>,
    exceptions: Vec<String>,
) -> impl Strategy<Value = String> {
    let license = prop_oneof![prop::sample::select(licenses), arb_identifier()];
    let exception = prop_oneof![prop::sample::select(exceptions), arb_identifier()];
    (license, any::<bool>(), prop::option::of(exception)).prop_map(|(l, plus, exc)| {
        let mut s = l;
        if plus {
            s.push('+');
        }
        if let Some(e) = exc {
            s.push_str(" WITH ");
            s.push_str(&e);
        }
        s
    })
}

fn compile(licenses: &[String], exceptions: &[String]) -> Regex {
    Regex::new(&pattern_fragments(licenses, exceptions).concat()).expect("pattern compiles")
}

fn oracle(candidate: &str, licenses: &BTreeSet<String>, exceptions: &BTreeSet<String>) -> bool {
    if candidate == "Nonstandard" {
        return true;
    }
    if let Some(rest) = candidate.strip_prefix("LicenseRef-") {
        return !rest.is_empty() && !rest.contains('\n');
    }
    let (license, exception) = match candidate.split_once(" WITH ") {
        Some((l, e)) => (l, Some(e)),
        None => (candidate, None),
    };
    let license = license.strip_suffix('+').unwrap_or(license);
    licenses.contains(license) && exception.is_none_or(|e| exceptions.contains(e))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn accepts_every_identifier_and_pairing(
        licenses in arb_identifier_set(),
        exceptions in arb_identifier_set(),
    ) {
        let licenses: Vec<String> = licenses.into_iter().collect();
        let exceptions: Vec<String> = exceptions.into_iter().collect();
        let re = compile(&licenses, &exceptions);

        for license in &licenses {
            prop_assert!(re.is_match(license), "{} rejected", license);
            let or_later = format!("{license}+");
            prop_assert!(re.is_match(&or_later), "{} rejected", or_later);
            for exception in &exceptions {
                let with = format!("{license} WITH {exception}");
                prop_assert!(re.is_match(&with), "{} rejected", with);
            }
        }
    }

    #[test]
    fn agrees_with_oracle(
        (licenses, exceptions, candidate) in (arb_identifier_set(), arb_identifier_set())
            .prop_flat_map(|(l, e)| {
                let candidate = arb_candidate(
                    l.iter().cloned().collect(),
                    e.iter().cloned().collect(),
                );
                (Just(l), Just(e), candidate)
            })
    ) {
        let re = compile(
            &licenses.iter().cloned().collect::<Vec<_>>(),
            &exceptions.iter().cloned().collect::<Vec<_>>(),
        );
        prop_assert_eq!(
            re.is_match(&candidate),
            oracle(&candidate, &licenses, &exceptions),
            "candidate {:?}",
            candidate
        );
    }

    #[test]
    fn rejects_identifiers_from_the_wrong_list(
        licenses in arb_identifier_set(),
        exceptions in arb_identifier_set(),
    ) {
        let re = compile(
            &licenses.iter().cloned().collect::<Vec<_>>(),
            &exceptions.iter().cloned().collect::<Vec<_>>(),
        );
        for exception in exceptions.difference(&licenses) {
            if exception == "Nonstandard" || exception.starts_with("LicenseRef-") {
                continue;
            }
            prop_assert!(!re.is_match(exception), "{} accepted as a license", exception);
        }
    }

    #[test]
    fn render_is_order_independent(
        licenses in prop::collection::vec(arb_identifier(), 0..10),
        exceptions in prop::collection::vec(arb_identifier(), 0..5),
    ) {
        let mut reversed_licenses = licenses.clone();
        reversed_licenses.reverse();
        let mut reversed_exceptions = exceptions.clone();
        reversed_exceptions.reverse();

        prop_assert_eq!(
            render(&licenses, &exceptions),
            render(&reversed_licenses, &reversed_exceptions)
        );
    }
}
