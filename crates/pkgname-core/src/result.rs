//! Validation verdict.

use serde::{Deserialize, Serialize};

/// Outcome of validating one candidate name.
///
/// `warnings` and `errors` are `None` when there are no findings of that
/// kind, never `Some(vec![])`; the serialized form omits the key entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// No errors and no warnings.
    pub valid_for_new_packages: bool,

    /// No errors; warnings are tolerated for names that predate them.
    pub valid_for_old_packages: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResult {
    /// Assemble a verdict from accumulated findings.
    pub(crate) fn from_findings(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            valid_for_new_packages: errors.is_empty() && warnings.is_empty(),
            valid_for_old_packages: errors.is_empty(),
            warnings: non_empty(warnings),
            errors: non_empty(errors),
        }
    }

    /// Warnings, empty when there are none.
    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or_default()
    }

    /// Errors, empty when there are none.
    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }

    pub fn is_valid_for_new_packages(&self) -> bool {
        self.valid_for_new_packages
    }

    pub fn is_valid_for_old_packages(&self) -> bool {
        self.valid_for_old_packages
    }

    /// Validity under the chosen policy.
    pub fn is_valid(&self, legacy: bool) -> bool {
        if legacy {
            self.valid_for_old_packages
        } else {
            self.valid_for_new_packages
        }
    }
}

fn non_empty(findings: Vec<String>) -> Option<Vec<String>> {
    if findings.is_empty() {
        None
    } else {
        Some(findings)
    }
}
