//! Expiry classification and report aggregation.
//!
//! - [`classifier`] - Buckets credentials into active, expiring soon and expired
//! - [`aggregator`] - Walks applications and builds summary, detailed, filtered
//!   and near-expiry outputs
//! - [`types`] - The rows and records those outputs are made of

pub mod aggregator;
pub mod classifier;
pub mod types;
