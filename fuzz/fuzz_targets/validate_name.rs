#![no_main]

use libfuzzer_sys::fuzz_target;
use pkgname_core::{validate, ScopedName};

fuzz_target!(|name: &str| {
    let result = validate(name);
    assert_eq!(result.valid_for_old_packages, result.errors.is_none());
    assert_eq!(
        result.valid_for_new_packages,
        result.errors.is_none() && result.warnings.is_none()
    );

    if let Some(parsed) = ScopedName::parse(name) {
        assert_eq!(parsed.to_string(), name);
    }
});
