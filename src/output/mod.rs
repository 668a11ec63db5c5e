pub mod formatter;
pub mod theme;

pub use formatter::*;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// How command output is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored when stdout is a terminal
    #[default]
    Table,
    /// Tab-separated values, no headers
    Tsv,
    /// Pretty-printed JSON
    Json,
}

/// Serialize any result for `--format json`
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
