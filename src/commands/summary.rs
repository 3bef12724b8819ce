//! Summary table only, printed to stdout.
//!
//! ```bash
//! cred-expiry summary data.json --threshold-days 30
//! ```

use crate::commands::load_inventory;
use crate::expiry::aggregator::aggregate;
use crate::output::table::summary_table;
use crate::utils::time::now_local;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::Path;

pub fn run(data_file: &Path, threshold_days: i64, reference: Option<NaiveDateTime>) -> Result<()> {
    let reference = reference.unwrap_or_else(now_local);

    let Some(applications) = load_inventory(data_file) else {
        return Ok(());
    };

    let report = aggregate(&applications, reference, threshold_days);
    println!("{}", summary_table(&report.summary));

    Ok(())
}
