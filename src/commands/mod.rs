//! Command implementations for credential expiry reporting.
//!
//! - [`report`] - Full run: writes the summary table, detailed and filtered
//!   JSON, and the expiring-soon table, then prints the expiring-soon table
//! - [`summary`] - Prints the summary table only
//! - [`expiring`] - Prints the expiring-soon listing as a table, CSV or JSON
//!
//! Every command loads the inventory through [`load_inventory`]. A missing or
//! malformed inventory is reported on stderr and the command returns without
//! producing output.

pub mod expiring;
pub mod report;
pub mod summary;

use crate::inventory::loader::load_applications;
use crate::inventory::types::Application;
use crate::utils::format::format_number;
use std::path::Path;

/// Output format for the expiring-soon listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Loads the inventory, logging progress to stderr.
///
/// Returns `None` when the inventory is unavailable or empty; callers treat
/// that as "nothing to report".
pub fn load_inventory(path: &Path) -> Option<Vec<Application>> {
    eprintln!("Loading inventory: {}", path.display());

    match load_applications(path) {
        Ok(applications) if applications.is_empty() => {
            eprintln!("No applications found in {}", path.display());
            None
        }
        Ok(applications) => {
            eprintln!("Loaded {} applications", format_number(applications.len()));
            Some(applications)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            None
        }
    }
}
