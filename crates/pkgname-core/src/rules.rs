//! Rule data: reserved names and runtime core module names.
//!
//! Both lists are plain data handed to the validator. Rule files are YAML:
//!
//! ```yaml
//! blacklist:
//!   - node_modules
//!   - favicon.ico
//! builtins:
//!   - fs
//!   - http
//! ```
//!
//! A key left out of the file keeps its bundled default.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RulesError, RulesResult};

/// Environment variable naming a YAML rule file.
pub const RULES_ENV_VAR: &str = "PKGNAME_RULES";

/// Names no package may take.
pub const DEFAULT_BLACKLIST: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core module names.
pub const DEFAULT_BUILTINS: &[&str] = &[
    "assert",
    "assert/strict",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "dns/promises",
    "domain",
    "events",
    "fs",
    "fs/promises",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "path/posix",
    "path/win32",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "readline/promises",
    "repl",
    "stream",
    "stream/consumers",
    "stream/promises",
    "stream/web",
    "string_decoder",
    "sys",
    "timers",
    "timers/promises",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "util/types",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Reserved and core module names consulted by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Names that are always rejected.
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,

    /// Runtime core module names; only warned about.
    #[serde(default = "default_builtins")]
    pub builtins: Vec<String>,
}

fn default_blacklist() -> Vec<String> {
    DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect()
}

fn default_builtins() -> Vec<String> {
    DEFAULT_BUILTINS.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
            builtins: default_builtins(),
        }
    }
}

impl RuleSet {
    /// A rule set with no reserved names at all.
    pub fn empty() -> Self {
        Self {
            blacklist: Vec::new(),
            builtins: Vec::new(),
        }
    }

    /// Parse rule data from YAML.
    pub fn from_yaml_str(yaml: &str) -> RulesResult<Self> {
        let rules: Self = serde_yaml::from_str(yaml)?;
        rules.check()?;
        Ok(rules)
    }

    /// Load rule data from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> RulesResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_yaml_str(&content)?;
        debug!(
            path = %path.display(),
            blacklist = rules.blacklist.len(),
            builtins = rules.builtins.len(),
            "loaded rule file"
        );
        Ok(rules)
    }

    /// Load rule data from the file named by `PKGNAME_RULES`, or the bundled
    /// defaults when it is unset.
    pub fn from_env() -> RulesResult<Self> {
        match std::env::var_os(RULES_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_path(path),
            _ => Ok(Self::default()),
        }
    }

    /// Add a reserved name.
    pub fn with_blacklisted(mut self, name: impl Into<String>) -> Self {
        self.blacklist.push(name.into());
        self
    }

    /// Add a core module name.
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.builtins.push(name.into());
        self
    }

    /// Reject empty entries; an empty entry would only ever match the empty
    /// name, which is already an error of its own.
    fn check(&self) -> RulesResult<()> {
        for (list, entries) in [("blacklist", &self.blacklist), ("builtins", &self.builtins)] {
            if entries.iter().any(|entry| entry.is_empty()) {
                return Err(RulesError::Invalid {
                    message: format!("{list} contains an empty entry"),
                });
            }

            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.to_lowercase()) {
                    warn!(list, entry = %entry, "duplicate rule entry");
                }
            }
        }
        Ok(())
    }
}
