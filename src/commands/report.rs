//! Full expiry report.
//!
//! Loads the inventory, classifies every credential and writes the four
//! report artifacts before echoing the expiring-soon table to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: data.json, 30 day threshold, outputs in the working directory
//! cred-expiry report
//!
//! # Custom inventory and threshold, with a CSV copy of the expiring rows
//! cred-expiry report exports/apps.json.gz --threshold-days 45 --expiring-csv expiring.csv
//!
//! # Reproducible run against a fixed date
//! cred-expiry report --reference-date 2025-01-01
//! ```
//!
//! # Output
//!
//! - Summary table: one row per application and non-empty credential group
//! - Detailed JSON: active/expiring/expired names for every application
//! - Filtered JSON: groups with exactly one active and one expiring item
//! - Expiring table: every credential within the threshold window
//!
//! If the inventory cannot be loaded, or holds no applications, nothing is
//! written.

use crate::commands::load_inventory;
use crate::config::ReportConfig;
use crate::expiry::aggregator::aggregate;
use crate::output::export::write_expiring_csv;
use crate::output::json::to_pretty_json;
use crate::output::table::{expiring_table, summary_table};
use crate::output::write_artifact;
use crate::utils::format::format_number;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;

/// Console banner printed above the expiring-soon table.
pub fn expiring_banner(threshold_days: i64) -> String {
    format!(
        "Certificates and secrets expiring in the next {} days:",
        threshold_days
    )
}

pub fn run(config: &ReportConfig) -> Result<()> {
    let reference = config.resolve_reference_time();

    let Some(applications) = load_inventory(&config.data_file) else {
        return Ok(());
    };

    let report = aggregate(&applications, reference, config.threshold_days);

    write_artifact(
        &config.summary_output,
        &summary_table(&report.summary).to_string(),
    )?;
    write_artifact(&config.detailed_output, &to_pretty_json(&report.detailed)?)?;
    write_artifact(&config.filtered_output, &to_pretty_json(&report.filtered)?)?;
    write_artifact(
        &config.expiring_output,
        &expiring_table(&report.expiring_soon).to_string(),
    )?;

    if let Some(csv_path) = &config.expiring_csv {
        let file = File::create(csv_path)
            .with_context(|| format!("Failed to create {}", csv_path.display()))?;
        write_expiring_csv(BufWriter::new(file), &report.expiring_soon)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
        eprintln!("Wrote {}", csv_path.display());
    }

    eprintln!(
        "\nSummary rows: {}, filtered records: {}, expiring soon: {}",
        format_number(report.summary.len()),
        format_number(report.filtered.len()),
        format_number(report.expiring_soon.len())
    );

    println!("\n{}", expiring_banner(config.threshold_days));
    println!("{}", expiring_table(&report.expiring_soon));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_uses_threshold() {
        assert_eq!(
            expiring_banner(30),
            "Certificates and secrets expiring in the next 30 days:"
        );
        assert!(expiring_banner(7).contains("next 7 days"));
    }
}
