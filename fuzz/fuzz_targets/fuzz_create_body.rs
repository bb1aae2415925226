//! Fuzz target: decoding and validating a create request body.
//!
//! Any body that validates must yield a non-blank, trimmed name.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stockroom_core::{CreateResource, NewResource};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<CreateResource>(data) else {
        return;
    };
    if let Ok(new) = NewResource::try_from(body) {
        let name = new.name.as_str();
        assert!(!name.is_empty());
        assert_eq!(name, name.trim());
    }
});
