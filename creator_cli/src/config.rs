//! Runtime configuration: output format and the rate tables to price with.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use creator_core::RateTables;
use tracing::info;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Built-in tables, or the built-ins overlaid with a TOML rates file.
pub fn load_rate_tables(path: Option<&Path>) -> Result<RateTables> {
    let Some(path) = path else {
        return Ok(RateTables::builtin().clone());
    };

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rates file {}", path.display()))?;
    let tables = RateTables::from_toml_str(&source)
        .with_context(|| format!("Invalid rates file {}", path.display()))?;
    info!("Loaded rate overrides from {}", path.display());
    Ok(tables)
}
