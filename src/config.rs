//! Run configuration and the defaults of the reference deployment.

use crate::utils::time::now_local;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Days before expiry at which a credential counts as expiring soon
pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_SUMMARY_OUTPUT: &str = "main_output_table.txt";
pub const DEFAULT_DETAILED_OUTPUT: &str = "detailed_output.json";
pub const DEFAULT_FILTERED_OUTPUT: &str = "filtered_output.json";
pub const DEFAULT_EXPIRING_OUTPUT: &str = "expiring_table.txt";

/// Resolved settings for a `report` run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data_file: PathBuf,
    pub threshold_days: i64,
    pub summary_output: PathBuf,
    pub detailed_output: PathBuf,
    pub filtered_output: PathBuf,
    pub expiring_output: PathBuf,
    /// Optional CSV export of the near-expiry rows
    pub expiring_csv: Option<PathBuf>,
    /// Fixed reference time; the local clock is read when absent
    pub reference_time: Option<NaiveDateTime>,
}

impl ReportConfig {
    /// Reference time for this run. Call once and reuse the value.
    pub fn resolve_reference_time(&self) -> NaiveDateTime {
        self.reference_time.unwrap_or_else(now_local)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            threshold_days: DEFAULT_THRESHOLD_DAYS,
            summary_output: PathBuf::from(DEFAULT_SUMMARY_OUTPUT),
            detailed_output: PathBuf::from(DEFAULT_DETAILED_OUTPUT),
            filtered_output: PathBuf::from(DEFAULT_FILTERED_OUTPUT),
            expiring_output: PathBuf::from(DEFAULT_EXPIRING_OUTPUT),
            expiring_csv: None,
            reference_time: None,
        }
    }
}
