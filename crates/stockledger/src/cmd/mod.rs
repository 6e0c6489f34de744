//! Command implementations for the CLI tools.
//!
//! Each module contains the full implementation for a command, which is
//! invoked by a thin wrapper binary.

pub mod check;
pub mod process;

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// Read the instruction source and a label naming it for diagnostics.
///
/// With no file argument the line source is stdin.
pub(crate) fn read_source(file: Option<&Path>) -> Result<(String, String)> {
    match file {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let source = io::read_to_string(io::stdin()).context("failed to read stdin")?;
            Ok((source, "<stdin>".to_owned()))
        }
    }
}
