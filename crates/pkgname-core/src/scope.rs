//! Scoped package names.
//!
//! A name is either `name` or `@scope/name`. Neither part may contain `/`.

use lazy_static::lazy_static;
use regex::Regex;

/// Source of the scoped package pattern.
pub const SCOPED_PACKAGE_PATTERN: &str = r"^(?:@([^/]+?)[/])?([^/]+?)$";

lazy_static! {
    /// Optional `@scope/` prefix (group 1) followed by the unscoped name (group 2).
    static ref SCOPED_PACKAGE: Regex = Regex::new(SCOPED_PACKAGE_PATTERN).unwrap();
}

/// The compiled scoped package pattern.
///
/// Group 1 is the scope (without `@`), group 2 the unscoped name.
///
/// ```
/// let caps = pkgname_core::scoped_package_pattern()
///     .captures("@somescope/somepackagename")
///     .unwrap();
/// assert_eq!(&caps[1], "somescope");
/// assert_eq!(&caps[2], "somepackagename");
/// ```
pub fn scoped_package_pattern() -> &'static Regex {
    &SCOPED_PACKAGE
}

/// A name split into its optional scope and unscoped name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopedName<'a> {
    /// Scope without the leading `@`.
    pub scope: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> ScopedName<'a> {
    /// Split `name` using the scoped package pattern.
    ///
    /// Returns `None` when the name does not fit the pattern, e.g. it has an
    /// empty scope, a trailing `/`, or more than one `/`.
    pub fn parse(name: &'a str) -> Option<Self> {
        let caps = SCOPED_PACKAGE.captures(name)?;
        Some(Self {
            scope: caps.get(1).map(|m| m.as_str()),
            name: caps.get(2)?.as_str(),
        })
    }

    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }
}

impl std::fmt::Display for ScopedName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scope {
            Some(scope) => write!(f, "@{}/{}", scope, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
