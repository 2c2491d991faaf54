//! CLI command: pkgname rules
//!
//! Print the rule data `check` would use, after applying `--rules` or
//! `PKGNAME_RULES`.

use anyhow::{Context, Result};
use pkgname_core::{RuleSet, RULES_ENV_VAR};

use crate::cli::args::RulesArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: RulesArgs) -> Result<i32> {
    let rules = load(&args)?;
    let yaml = serde_yaml::to_string(&rules).context("failed to render rules")?;
    print!("{yaml}");
    Ok(SUCCESS)
}

/// Rule data from `--rules`, else `PKGNAME_RULES`, else the bundled defaults.
pub(crate) fn load(args: &RulesArgs) -> Result<RuleSet> {
    match &args.path {
        Some(path) => RuleSet::from_path(path)
            .with_context(|| format!("failed to load rules from {}", path.display())),
        None => RuleSet::from_env()
            .with_context(|| format!("failed to load rules from ${}", RULES_ENV_VAR)),
    }
}
