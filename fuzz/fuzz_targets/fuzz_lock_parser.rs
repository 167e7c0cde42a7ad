//! Fuzz target for lock file and root manifest parsing.
//!
//! Goal: neither parser should **ever panic**, whatever the input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_lock_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // composer.lock and composer.json are JSON, so UTF-8 only
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = pkgversions_lock::fuzz::parse_lock_json(text);
        let _ = pkgversions_lock::fuzz::parse_root_manifest(text);
    }
});
