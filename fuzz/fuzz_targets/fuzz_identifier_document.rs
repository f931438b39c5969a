//! Fuzz target for registry document parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_identifier_document
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use spdx_gen::{Resource, parse_identifiers};

fuzz_target!(|data: &[u8]| {
    // Registry documents are JSON, so only UTF-8 is interesting
    if let Ok(text) = std::str::from_utf8(data) {
        for resource in Resource::ALL {
            let _ = parse_identifiers(resource, text);
        }
    }
});
