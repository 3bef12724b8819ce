//! Inventory loading with transparent decompression.
//!
//! The inventory is a single JSON array of applications. Files ending in
//! `.gz` or `.zst` are decompressed on the fly, so archived exports can be
//! reported on without extracting them first.

use crate::error::InventoryError;
use crate::inventory::types::Application;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Opens an inventory file, choosing a decoder from its extension.
pub fn open_source(path: impl AsRef<Path>) -> Result<Box<dyn Read>, InventoryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InventoryError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InventoryError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => {
            let decoder =
                zstd::Decoder::new(file).map_err(|source| InventoryError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}

/// Parses a JSON array of applications from any reader.
pub fn parse_applications<R: Read>(reader: R) -> Result<Vec<Application>, InventoryError> {
    serde_json::from_reader(BufReader::new(reader))
        .map_err(|source| InventoryError::Malformed { source })
}

/// Loads every application in the inventory at `path`.
///
/// # Examples
///
/// ```no_run
/// use cred_expiry_tools::inventory::loader::load_applications;
///
/// let apps = load_applications("data.json.gz").unwrap();
/// println!("{} applications", apps.len());
/// ```
pub fn load_applications(path: impl AsRef<Path>) -> Result<Vec<Application>, InventoryError> {
    let path = path.as_ref();
    let reader = open_source(path)?;
    parse_applications(reader).map_err(|err| match err {
        InventoryError::Malformed { source } if source.is_io() => InventoryError::Unreadable {
            path: path.to_path_buf(),
            source: source.into(),
        },
        other => other,
    })
}
