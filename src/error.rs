//! Error types for loading credential inventories.

use std::path::PathBuf;
use thiserror::Error;

/// The inventory could not be obtained or is not a JSON array of applications.
///
/// Every variant aborts a run before any report is written. Problems inside
/// individual records (missing fields, malformed dates) never surface here.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{} not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode JSON: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}
