//! Report rendering and file output.
//!
//! - [`table`] - Boxed ASCII tables for the summary and expiring-soon reports
//! - [`json`] - Four-space indented JSON for detailed and filtered records
//! - [`export`] - CSV export of the expiring-soon rows

pub mod export;
pub mod json;
pub mod table;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes one report artifact, replacing any previous file.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
