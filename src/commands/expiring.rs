//! Near-expiry listing without writing report files.
//!
//! # Usage
//!
//! ```bash
//! cred-expiry expiring data.json
//! cred-expiry expiring data.json --threshold-days 14 --format csv > expiring.csv
//! cred-expiry expiring data.json --format json
//! ```
//!
//! Only credentials with a parsable date inside the threshold window are
//! listed; malformed dates are skipped rather than reported.

use crate::commands::{load_inventory, OutputFormat};
use crate::expiry::aggregator::near_expiry_rows;
use crate::expiry::types::ExpiringSoonRow;
use crate::output::export::write_expiring_csv;
use crate::output::json::to_pretty_json;
use crate::output::table::expiring_table;
use crate::utils::time::now_local;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io;
use std::path::Path;

pub fn run(
    data_file: &Path,
    threshold_days: i64,
    reference: Option<NaiveDateTime>,
    format: OutputFormat,
) -> Result<()> {
    let reference = reference.unwrap_or_else(now_local);

    let Some(applications) = load_inventory(data_file) else {
        return Ok(());
    };

    let rows: Vec<ExpiringSoonRow> = applications
        .iter()
        .flat_map(|app| near_expiry_rows(app, reference, threshold_days))
        .collect();

    match format {
        OutputFormat::Table => println!("{}", expiring_table(&rows)),
        OutputFormat::Json => println!("{}", to_pretty_json(&rows)?),
        OutputFormat::Csv => write_expiring_csv(io::stdout().lock(), &rows)?,
    }

    Ok(())
}
