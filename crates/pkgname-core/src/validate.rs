//! Name validation.
//!
//! Checks run in a fixed order. The input type is checked first and ends
//! validation on failure; every other check runs and its findings accumulate.
//!
//! Errors make a name unusable for any package. Warnings cover rules added
//! after names breaking them were already published, so old packages keep
//! them.

use lazy_static::lazy_static;
use tracing::debug;

use crate::input::NameInput;
use crate::result::ValidationResult;
use crate::rules::RuleSet;
use crate::scope::ScopedName;

/// Longest name (in UTF-16 code units) accepted for new packages.
pub const MAX_NAME_LENGTH: usize = 214;

/// Characters banned from the unscoped part of new package names.
const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

lazy_static! {
    static ref DEFAULT_VALIDATOR: NameValidator = NameValidator::default();
}

/// A finding that rejects the name for every package.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name cannot be null")]
    Null,

    #[error("name cannot be undefined")]
    Undefined,

    #[error("name must be a string")]
    NotAString,

    #[error("name length must be greater than zero")]
    Empty,

    #[error("name cannot start with a period")]
    LeadingPeriod,

    #[error("name cannot start with an underscore")]
    LeadingUnderscore,

    #[error("name cannot contain leading or trailing spaces")]
    SurroundingWhitespace,

    #[error("{0} is a blacklisted name")]
    Blacklisted(String),

    #[error("name can only contain URL-friendly characters")]
    NotUrlSafe,
}

/// A finding that only rejects the name for new packages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameWarning {
    #[error("{0} is a core module name")]
    CoreModule(String),

    #[error("name can no longer contain more than 214 characters")]
    TooLong,

    #[error("name can no longer contain capital letters")]
    CapitalLetters,

    #[error("name can no longer contain special characters (\"~'!()*\")")]
    SpecialCharacters,
}

/// Validates names against a [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    rules: RuleSet,
}

impl NameValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a candidate name. Never fails; problems are reported in the
    /// returned verdict.
    pub fn validate(&self, name: impl Into<NameInput>) -> ValidationResult {
        let (warnings, errors) = self.findings(&name.into());
        let warnings: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
        ValidationResult::from_findings(warnings, errors)
    }

    /// Typed findings for a candidate name, in check order.
    pub fn findings(&self, input: &NameInput) -> (Vec<NameWarning>, Vec<NameError>) {
        let name = match input {
            NameInput::Null => return (Vec::new(), vec![NameError::Null]),
            NameInput::Undefined => return (Vec::new(), vec![NameError::Undefined]),
            NameInput::NotAString(kind) => {
                debug!(%kind, "rejected non-text name");
                return (Vec::new(), vec![NameError::NotAString]);
            }
            NameInput::Text(name) => name.as_str(),
        };

        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        let lowered = name.to_lowercase();

        if name.is_empty() {
            errors.push(NameError::Empty);
        }

        if name.starts_with('.') {
            errors.push(NameError::LeadingPeriod);
        }

        if name.starts_with('_') {
            errors.push(NameError::LeadingUnderscore);
        }

        if trim(name) != name {
            errors.push(NameError::SurroundingWhitespace);
        }

        for entry in &self.rules.blacklist {
            if lowered == entry.to_lowercase() {
                errors.push(NameError::Blacklisted(entry.clone()));
            }
        }

        for entry in &self.rules.builtins {
            if lowered == entry.to_lowercase() {
                warnings.push(NameWarning::CoreModule(entry.clone()));
            }
        }

        if name.encode_utf16().count() > MAX_NAME_LENGTH {
            warnings.push(NameWarning::TooLong);
        }

        if lowered != name {
            warnings.push(NameWarning::CapitalLetters);
        }

        let last_segment = name.rsplit('/').next().unwrap_or(name);
        if last_segment.contains(SPECIAL_CHARACTERS) {
            warnings.push(NameWarning::SpecialCharacters);
        }

        if !is_url_safe(name) && !is_url_safe_scoped(name) {
            errors.push(NameError::NotUrlSafe);
        }

        debug!(
            candidate = name,
            warnings = warnings.len(),
            errors = errors.len(),
            "validated package name"
        );
        (warnings, errors)
    }
}

/// Validate a candidate name against the bundled rule set.
///
/// ```
/// let verdict = pkgname_core::validate("node_modules");
/// assert!(!verdict.valid_for_old_packages);
/// assert_eq!(verdict.errors(), ["node_modules is a blacklisted name"]);
/// ```
pub fn validate(name: impl Into<NameInput>) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(name)
}

/// Whether every character of `s` survives URL component encoding unescaped:
/// ASCII letters, digits and `-_.!~*'()`.
pub fn is_url_safe(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

/// `@scope/name` with both parts URL-safe on their own.
fn is_url_safe_scoped(name: &str) -> bool {
    match ScopedName::parse(name) {
        Some(ScopedName {
            scope: Some(scope),
            name: unscoped,
        }) => is_url_safe(scope) && is_url_safe(unscoped),
        _ => false,
    }
}

/// Strip the whitespace registry clients strip: Unicode white space except
/// NEL (U+0085), plus the byte order mark.
fn trim(name: &str) -> &str {
    name.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
