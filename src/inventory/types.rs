//! Credential inventory records.
//!
//! These mirror the JSON exported for each registered application. Every
//! identity field is optional on the wire; the getters substitute
//! [`UNKNOWN`] through [`or_unknown`] so a partial record never aborts a run.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder used for any absent field
pub const UNKNOWN: &str = "Unknown";

/// Returns the field value, or [`UNKNOWN`] when it is absent.
pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// Which credential group an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CredentialKind {
    Secret,
    Certificate,
}

impl CredentialKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Secret => "Secret",
            Self::Certificate => "Certificate",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single secret or certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CredentialItem {
    pub name: Option<String>,
    /// Expiry date in `MM/DD/YYYY` form
    pub end_date_time: Option<String>,
}

impl CredentialItem {
    pub fn new(name: &str, end_date_time: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            end_date_time: Some(end_date_time.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        or_unknown(self.name.as_deref())
    }

    pub fn end_date_time(&self) -> &str {
        or_unknown(self.end_date_time.as_deref())
    }
}

/// An application registration and its credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Application {
    pub app_id: Option<String>,
    pub tenant_name: Option<String>,
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub secrets: Vec<CredentialItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certificates: Vec<CredentialItem>,
}

impl Application {
    pub fn app_id(&self) -> &str {
        or_unknown(self.app_id.as_deref())
    }

    pub fn tenant_name(&self) -> &str {
        or_unknown(self.tenant_name.as_deref())
    }

    pub fn display_name(&self) -> &str {
        or_unknown(self.display_name.as_deref())
    }

    /// Secrets first, then certificates.
    pub fn credential_groups(&self) -> [(CredentialKind, &[CredentialItem]); 2] {
        [
            (CredentialKind::Secret, self.secrets.as_slice()),
            (CredentialKind::Certificate, self.certificates.as_slice()),
        ]
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CredentialItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CredentialItem>>::deserialize(deserializer)?.unwrap_or_default())
}
