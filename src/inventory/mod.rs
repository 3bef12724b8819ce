//! Credential inventory model and loader.
//!
//! - [`types`] - Application and credential records with `"Unknown"` defaults
//! - [`loader`] - Reads the JSON inventory, optionally gzip or zstd compressed

pub mod loader;
pub mod types;
