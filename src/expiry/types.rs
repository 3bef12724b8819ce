//! Report rows and records produced by the aggregator.
//!
//! Field names serialize in PascalCase so the JSON reports keep the same keys
//! as the input inventory.

use crate::inventory::types::{Application, CredentialKind};
use serde::Serialize;

/// Item names bucketed by expiry status, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassificationResult {
    pub active: Vec<String>,
    pub expiring_soon: Vec<String>,
    pub expired: Vec<String>,
}

impl ClassificationResult {
    /// Exactly one active and exactly one expiring-soon item.
    pub fn is_single_rotation_pair(&self) -> bool {
        self.active.len() == 1 && self.expiring_soon.len() == 1
    }

    pub fn total(&self) -> usize {
        self.active.len() + self.expiring_soon.len() + self.expired.len()
    }
}

/// One line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRow {
    pub app_id: String,
    pub tenant_name: String,
    pub display_name: String,
    #[serde(rename = "Type")]
    pub kind: CredentialKind,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl SummaryRow {
    pub fn new(app: &Application, kind: CredentialKind, result: &ClassificationResult) -> Self {
        Self {
            app_id: app.app_id().to_string(),
            tenant_name: app.tenant_name().to_string(),
            display_name: app.display_name().to_string(),
            kind,
            active: result.active.len(),
            expiring_soon: result.expiring_soon.len(),
            expired: result.expired.len(),
        }
    }
}

/// Per-application classification of both credential groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailedRecord {
    pub app_id: String,
    pub tenant_name: String,
    pub display_name: String,
    pub secrets: ClassificationResult,
    pub certificates: ClassificationResult,
}

/// A [`DetailedRecord`] selected for one credential group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredRecord {
    #[serde(rename = "Type")]
    pub kind: CredentialKind,
    #[serde(flatten)]
    pub record: DetailedRecord,
}

/// A credential inside the expiring-soon window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpiringSoonRow {
    pub app_id: String,
    pub display_name: String,
    #[serde(rename = "Type")]
    pub kind: CredentialKind,
    pub name: String,
    pub days_remaining: i64,
}

/// Everything a single aggregation pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryReport {
    pub summary: Vec<SummaryRow>,
    pub detailed: Vec<DetailedRecord>,
    pub filtered: Vec<FilteredRecord>,
    pub expiring_soon: Vec<ExpiringSoonRow>,
}
