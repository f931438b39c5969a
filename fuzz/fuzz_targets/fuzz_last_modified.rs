//! Fuzz target for `last-modified` header parsing.
//!
//! Goal: The parser should **never panic**; unparsable input yields `None`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_last_modified
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = spdx_gen::parse_last_modified(text);
    }
});
