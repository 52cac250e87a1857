use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use sarafu_core::{RuleTable, RuleTableSpec};

/// Load the categorization table: an explicit TOML file when given, the
/// built-in table otherwise.
pub fn load_rule_table(path: Option<&Path>) -> Result<RuleTable> {
    let path = match path {
        Some(p) => p,
        None => return Ok(RuleTable::default_table()),
    };

    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let spec: RuleTableSpec =
        toml::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    RuleTable::from_spec(&spec)
}

/// Render a table back out as TOML, preserving rule order.
pub fn dump_rule_table(table: &RuleTable) -> Result<String> {
    toml::to_string_pretty(&table.spec()).context("serialize rule table")
}
