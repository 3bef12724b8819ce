//! # Credential Expiry Tools
//!
//! Reports on the expiry state of application secrets and certificates.
//!
//! ## Overview
//!
//! The input is a JSON inventory of application registrations, each with a
//! list of secrets and certificates carrying an `EndDateTime` in
//! `MM/DD/YYYY` form. Every credential is classified against a single
//! reference time as **active**, **expiring soon** (within the threshold,
//! 30 days by default) or **expired**, and four reports are produced:
//!
//! - `main_output_table.txt` - per application and credential type counts
//! - `detailed_output.json` - credential names grouped by status
//! - `filtered_output.json` - groups with exactly one active and one
//!   expiring credential, i.e. a rotation in progress
//! - `expiring_table.txt` - every credential inside the threshold window
//!
//! ## Architecture
//!
//! - [`inventory`] - Inventory records and the (optionally compressed) JSON loader
//! - [`expiry`] - Classification and aggregation, free of I/O
//! - [`output`] - Table, JSON and CSV rendering
//! - [`commands`] - Command implementations behind the CLI
//! - [`config`] - Defaults and resolved run settings
//! - [`error`] - Inventory loading errors
//! - [`utils`] - Date arithmetic and number formatting
//!
//! ## Example Usage
//!
//! ```bash
//! # Full run with defaults (reads data.json)
//! cred-expiry report
//!
//! # Compressed inventory, 14 day window, fixed reference date
//! cred-expiry report apps.json.gz --threshold-days 14 --reference-date 2025-01-01
//!
//! # Just the expiring credentials, as CSV
//! cred-expiry expiring apps.json --format csv
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use cred_expiry_tools::expiry::aggregator::aggregate;
//! use cred_expiry_tools::inventory::loader::parse_applications;
//! use cred_expiry_tools::utils::time::parse_reference_time;
//!
//! let json = r#"[{"AppId": "a1", "DisplayName": "Billing",
//!                 "Secrets": [{"Name": "key", "EndDateTime": "01/10/2025"}]}]"#;
//! let apps = parse_applications(json.as_bytes()).unwrap();
//! let report = aggregate(&apps, parse_reference_time("2025-01-01").unwrap(), 30);
//!
//! assert_eq!(report.expiring_soon[0].days_remaining, 9);
//! assert_eq!(report.summary[0].tenant_name, "Unknown");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod expiry;
pub mod inventory;
pub mod output;
pub mod utils;
