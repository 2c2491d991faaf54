use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pkgname",
    version,
    about = "Check package names against registry naming rules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more package names
    Check(CheckArgs),
    /// Print the effective rule data as YAML
    Rules(RulesArgs),
    Version,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Names to validate
    #[arg(required_unless_present = "json_input")]
    pub names: Vec<String>,

    /// Read one JSON value per line from stdin instead of NAMES.
    /// null, numbers and other non-string values are validated as such.
    #[arg(long, conflicts_with = "names")]
    pub json_input: bool,

    /// Accept names that are only valid for existing (legacy) packages
    #[arg(long)]
    pub legacy: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub rules: RulesArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RulesArgs {
    /// YAML rule file (blacklist / builtins). Falls back to PKGNAME_RULES,
    /// then the bundled rules
    #[arg(long = "rules")]
    pub path: Option<PathBuf>,
}
