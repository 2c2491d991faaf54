//! CLI command: pkgname check
//!
//! Usage:
//!   pkgname check NAME... [--legacy] [--format text|json] [--rules rules.yaml]
//!   pkgname check --json-input < names.jsonl
//!
//! Exits 0 when every name passes the selected policy, 1 otherwise.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pkgname_core::{NameInput, NameValidator, ValidationResult};
use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::exit_codes::{REJECTED, SUCCESS};

/// One line of `--format json` output.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    name: &'a Value,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

pub fn run(args: CheckArgs) -> Result<i32> {
    let rules = super::rules::load(&args.rules)?;
    let validator = NameValidator::new(rules);

    let inputs = if args.json_input {
        read_json_inputs(std::io::stdin().lock())?
    } else {
        args.names.iter().cloned().map(Value::String).collect()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut rejected = 0usize;

    for input in &inputs {
        let result = validator.validate(input);
        if !result.is_valid(args.legacy) {
            rejected += 1;
        }
        match args.format {
            OutputFormat::Text => write_text(&mut out, input, &result)?,
            OutputFormat::Json => {
                let line = serde_json::to_string(&CheckOutput {
                    name: input,
                    result: &result,
                })?;
                writeln!(out, "{line}")?;
            }
        }
    }

    tracing::debug!(checked = inputs.len(), rejected, "check finished");
    Ok(if rejected == 0 { SUCCESS } else { REJECTED })
}

/// Parse one JSON value per non-blank line.
fn read_json_inputs(reader: impl BufRead) -> Result<Vec<Value>> {
    let mut inputs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)
            .with_context(|| format!("line {}: invalid JSON", idx + 1))?;
        inputs.push(value);
    }
    Ok(inputs)
}

fn write_text(out: &mut impl Write, input: &Value, result: &ValidationResult) -> Result<()> {
    let label = match NameInput::from(input) {
        NameInput::Text(name) => name,
        _ => input.to_string(),
    };
    let verdict = if result.valid_for_new_packages {
        "valid"
    } else if result.valid_for_old_packages {
        "valid for old packages only"
    } else {
        "invalid"
    };
    writeln!(out, "{label}: {verdict}")?;
    for error in result.errors() {
        writeln!(out, "  error: {error}")?;
    }
    for warning in result.warnings() {
        writeln!(out, "  warning: {warning}")?;
    }
    Ok(())
}
