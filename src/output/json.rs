//! JSON rendering for the detailed and filtered reports.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Serializes `value` as JSON indented by four spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
