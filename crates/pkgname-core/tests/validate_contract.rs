//! Contract tests for package name validation.
//!
//! Exact message strings and the serialized verdict shape are relied on by
//! registry clients, so these tests pin both.

use pkgname_core::{validate, NameInput, NameValidator, RuleSet, ValidationResult, ValueKind};
use proptest::prelude::*;
use serde_json::{json, Value};

fn verdict_json(result: &ValidationResult) -> Value {
    serde_json::to_value(result).expect("verdict serializes")
}

#[test]
fn test_null_name() {
    assert_eq!(
        verdict_json(&validate(NameInput::Null)),
        json!({
            "validForNewPackages": false,
            "validForOldPackages": false,
            "errors": ["name cannot be null"]
        })
    );
}

#[test]
fn test_undefined_name() {
    assert_eq!(
        verdict_json(&validate(None::<String>)),
        json!({
            "validForNewPackages": false,
            "validForOldPackages": false,
            "errors": ["name cannot be undefined"]
        })
    );
}

#[test]
fn test_non_string_names() {
    for value in [json!(42), json!(true), json!({ "name": "pkg" }), json!(["pkg"])] {
        let result = validate(&value);
        assert_eq!(result.errors(), ["name must be a string"], "input: {value}");
        assert!(result.warnings.is_none(), "input: {value}");
        assert!(!result.valid_for_old_packages);
    }

    let result = validate(NameInput::NotAString(ValueKind::Number));
    assert_eq!(result.errors(), ["name must be a string"]);
}

#[test]
fn test_json_null_and_missing_key() {
    let manifest = json!({ "name": null });
    assert_eq!(
        validate(NameInput::from_field(manifest.get("name"))).errors(),
        ["name cannot be null"]
    );
    assert_eq!(
        validate(NameInput::from_field(manifest.get("nome"))).errors(),
        ["name cannot be undefined"]
    );
}

#[test]
fn test_empty_name() {
    let result = validate("");
    assert_eq!(result.errors(), ["name length must be greater than zero"]);
    assert!(!result.valid_for_new_packages);
    assert!(!result.valid_for_old_packages);
}

#[test]
fn test_traditional_name() {
    let result = validate("some-package");
    assert_eq!(
        verdict_json(&result),
        json!({ "validForNewPackages": true, "validForOldPackages": true })
    );
}

#[test]
fn test_allowed_punctuation() {
    for name in ["example.com", "under_score", "period.js", "123numeric", "crazy!"] {
        let result = validate(name);
        assert!(result.valid_for_old_packages, "{name}: {result:?}");
        assert!(result.errors.is_none(), "{name}");
    }
}

#[test]
fn test_capital_letters() {
    let result = validate("CapitalName");
    assert_eq!(
        verdict_json(&result),
        json!({
            "validForNewPackages": false,
            "validForOldPackages": true,
            "warnings": ["name can no longer contain capital letters"]
        })
    );
}

#[test]
fn test_leading_period() {
    let result = validate(".hiddenpkg");
    assert_eq!(result.errors(), ["name cannot start with a period"]);
    assert!(!result.valid_for_new_packages);
    assert!(!result.valid_for_old_packages);
}

#[test]
fn test_leading_underscore() {
    let result = validate("_hiddenpkg");
    assert_eq!(result.errors(), ["name cannot start with an underscore"]);
}

#[test]
fn test_surrounding_whitespace() {
    let result = validate(" leading-space");
    assert_eq!(
        result.errors(),
        [
            "name cannot contain leading or trailing spaces",
            "name can only contain URL-friendly characters",
        ]
    );

    let result = validate("trailing-space ");
    assert_eq!(
        result.errors(),
        [
            "name cannot contain leading or trailing spaces",
            "name can only contain URL-friendly characters",
        ]
    );
}

#[test]
fn test_next_line_is_not_trimmed() {
    let result = validate("pkg\u{85}");
    assert_eq!(
        result.errors(),
        ["name can only contain URL-friendly characters"]
    );
}

#[test]
fn test_scoped_name() {
    let result = validate("@myscope/mypackage");
    assert!(result.errors.is_none());
    assert!(result.warnings.is_none());
    assert!(result.valid_for_new_packages);
    assert!(result.valid_for_old_packages);
}

#[test]
fn test_scoped_name_with_space() {
    let result = validate("@myscope/my package");
    assert_eq!(
        result.errors(),
        ["name can only contain URL-friendly characters"]
    );
    assert!(!result.valid_for_old_packages);
}

#[test]
fn test_malformed_scopes() {
    for name in ["@scope/", "@/pkg", "@a/b/c", "scope/pkg", "@pkg"] {
        let result = validate(name);
        assert_eq!(
            result.errors(),
            ["name can only contain URL-friendly characters"],
            "{name}"
        );
    }
}

#[test]
fn test_non_url_safe() {
    for name in ["s/l/a/s/h/e/s", "name with spaces", "caf\u{e9}", "pkg?query", "a#b"] {
        let result = validate(name);
        assert!(
            result
                .errors()
                .iter()
                .any(|e| e == "name can only contain URL-friendly characters"),
            "{name}: {result:?}"
        );
    }
}

#[test]
fn test_core_module_name() {
    let result = validate("http");
    assert_eq!(
        verdict_json(&result),
        json!({
            "validForNewPackages": false,
            "validForOldPackages": true,
            "warnings": ["http is a core module name"]
        })
    );

    let result = validate("FS");
    assert_eq!(
        result.warnings(),
        [
            "fs is a core module name",
            "name can no longer contain capital letters",
        ]
    );
}

#[test]
fn test_blacklisted_names() {
    let result = validate("node_modules");
    assert_eq!(result.errors(), ["node_modules is a blacklisted name"]);
    assert!(result.warnings.is_none());

    let result = validate("favicon.ico");
    assert_eq!(result.errors(), ["favicon.ico is a blacklisted name"]);
}

#[test]
fn test_too_long() {
    let name = "ifyouwanttogetthesumoftwonumberswherethosetwonumbersarechosenbyfindingthelargestoftwooutofthreenumbersandsquaringthemwhichismultiplyingthembyitselfthenyoushouldinputthreenumbersintothisfunctionanditwilldothatforyou-x";
    assert!(name.len() > 214);
    let result = validate(name);
    assert_eq!(
        result.warnings(),
        ["name can no longer contain more than 214 characters"]
    );
    assert!(result.valid_for_old_packages);
    assert!(!result.valid_for_new_packages);
}

#[test]
fn test_special_characters() {
    for name in ["crazy!", "pkg~name", "it's", "fun(ction)", "star*"] {
        let result = validate(name);
        assert_eq!(
            result.warnings(),
            ["name can no longer contain special characters (\"~'!()*\")"],
            "{name}"
        );
        assert!(result.valid_for_old_packages, "{name}");
    }
}

#[test]
fn test_findings_accumulate_across_checks() {
    let result = validate("_Bad Name ");
    assert_eq!(
        result.errors(),
        [
            "name cannot start with an underscore",
            "name cannot contain leading or trailing spaces",
            "name can only contain URL-friendly characters",
        ]
    );
    assert_eq!(
        result.warnings(),
        ["name can no longer contain capital letters"]
    );
}

#[test]
fn test_duplicate_rule_entries_each_report() {
    let rules = RuleSet::default().with_blacklisted("NODE_MODULES");
    let result = NameValidator::new(rules).validate("node_modules");
    assert_eq!(
        result.errors(),
        [
            "node_modules is a blacklisted name",
            "NODE_MODULES is a blacklisted name",
        ]
    );
}

#[test]
fn test_idempotent() {
    for name in ["some-package", "CapitalName", "@myscope/my package", "http", ""] {
        assert_eq!(validate(name), validate(name), "{name}");
    }
}

proptest! {
    #[test]
    fn prop_validate_is_deterministic(name in "\\PC{0,40}") {
        let first = validate(name.as_str());
        let second = validate(name.as_str());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.valid_for_old_packages, first.errors.is_none());
        prop_assert_eq!(
            first.valid_for_new_packages,
            first.errors.is_none() && first.warnings.is_none()
        );
        prop_assert_ne!(first.errors, Some(vec![]));
        prop_assert_ne!(first.warnings, Some(vec![]));
    }

    #[test]
    fn prop_lowercase_safe_names_are_valid(name in "[a-z0-9][a-z0-9._-]{0,40}") {
        let result = validate(name.as_str());
        // Only a core module or reserved name could be flagged.
        if !RuleSet::default().builtins.contains(&name)
            && !RuleSet::default().blacklist.contains(&name)
        {
            prop_assert!(result.valid_for_new_packages, "{:?}", result);
            prop_assert!(validate(name.as_str()).valid_for_new_packages);
        }
    }

    #[test]
    fn prop_scoped_safe_names_are_valid(
        scope in "[a-z0-9][a-z0-9-]{0,20}",
        name in "[a-z0-9][a-z0-9._-]{0,20}",
    ) {
        let full = format!("@{scope}/{name}");
        prop_assert!(validate(full.as_str()).valid_for_new_packages);
    }
}
