//! Fuzz target: parsing id path segments.
//!
//! Parsing must never panic, and every accepted id must print back to an
//! equivalent integer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stockroom_core::ResourceId;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(id) = raw.parse::<ResourceId>() {
        assert_eq!(id.to_string().parse::<i64>().ok(), Some(id.get()));
    }
});
