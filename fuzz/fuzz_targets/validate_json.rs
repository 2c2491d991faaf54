#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let result = pkgname_core::validate(&value);
        if !value.is_string() {
            assert_eq!(result.errors().len(), 1);
            assert!(result.warnings.is_none());
        }
    }
});
