//! CSV export of the near-expiry listing.

use crate::expiry::types::ExpiringSoonRow;
use anyhow::Result;
use std::io::Write;

pub const CSV_HEADER: [&str; 5] = ["app_id", "display_name", "type", "name", "days_remaining"];

/// Writes `rows` as CSV with a header line.
pub fn write_expiring_csv<W: Write>(writer: W, rows: &[ExpiringSoonRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for row in rows {
        let days = row.days_remaining.to_string();
        csv_writer.write_record([
            row.app_id.as_str(),
            row.display_name.as_str(),
            row.kind.as_str(),
            row.name.as_str(),
            days.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
