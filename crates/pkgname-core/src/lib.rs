//! Package name validation for registry publishing.
//!
//! A candidate name is judged against two policies:
//!
//! - **new packages**: no errors and no warnings
//! - **old packages**: no errors (warnings are tolerated for names that
//!   predate the stricter rules)
//!
//! # Quick Start
//!
//! ```
//! use pkgname_core::validate;
//!
//! let verdict = validate("some-package");
//! assert!(verdict.valid_for_new_packages);
//!
//! let verdict = validate("CapitalName");
//! assert!(verdict.valid_for_old_packages);
//! assert!(!verdict.valid_for_new_packages);
//! assert_eq!(
//!     verdict.warnings(),
//!     ["name can no longer contain capital letters"]
//! );
//! ```
//!
//! # Rule data
//!
//! The reserved names and runtime core module names are data, not code. The
//! bundled [`RuleSet::default`] matches the public registry; a custom set can
//! be loaded from YAML and injected through [`NameValidator::new`].
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `PKGNAME_RULES` | Path to a YAML rule file read by [`RuleSet::from_env`] |

pub mod error;
pub mod input;
pub mod result;
pub mod rules;
pub mod scope;
pub mod validate;

pub use error::{RulesError, RulesResult};
pub use input::{NameInput, ValueKind};
pub use result::ValidationResult;
pub use rules::{RuleSet, DEFAULT_BLACKLIST, DEFAULT_BUILTINS, RULES_ENV_VAR};
pub use scope::{scoped_package_pattern, ScopedName, SCOPED_PACKAGE_PATTERN};
pub use validate::{
    is_url_safe, validate, NameError, NameValidator, NameWarning, MAX_NAME_LENGTH,
};
