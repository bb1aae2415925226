//! Fuzz target: decoding and validating an update request body.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stockroom_core::{ResourcePatch, UpdateResource};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<UpdateResource>(data) else {
        return;
    };
    let name_present = body.name.is_some();
    if let Ok(patch) = ResourcePatch::try_from(body) {
        assert_eq!(patch.name.is_some(), name_present);
        if let Some(name) = patch.name {
            assert!(!name.as_str().trim().is_empty());
        }
    }
});
