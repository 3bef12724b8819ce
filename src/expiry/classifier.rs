//! Expiry status bucketing.
//!
//! An item whose date cannot be parsed counts as expired.

use crate::expiry::types::ClassificationResult;
use crate::inventory::types::CredentialItem;
use crate::utils::time::{days_remaining, parse_end_date};
use chrono::NaiveDateTime;

/// Expiry status of a single credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Active,
    ExpiringSoon,
    Expired,
}

/// Status of one item relative to `reference`.
pub fn status_of(
    item: &CredentialItem,
    reference: NaiveDateTime,
    threshold_days: i64,
) -> ExpiryStatus {
    let Some(end_date) = parse_end_date(item.end_date_time()) else {
        return ExpiryStatus::Expired;
    };

    let days = days_remaining(end_date, reference);
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= threshold_days {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Active
    }
}

/// Partitions item names into active, expiring-soon and expired buckets.
///
/// Every item lands in exactly one bucket and input order is kept within
/// each bucket.
///
/// # Examples
///
/// ```
/// use cred_expiry_tools::expiry::classifier::classify;
/// use cred_expiry_tools::inventory::types::CredentialItem;
/// use cred_expiry_tools::utils::time::parse_reference_time;
///
/// let now = parse_reference_time("2025-01-01").unwrap();
/// let items = vec![
///     CredentialItem::new("X", "02/15/2025"),
///     CredentialItem::new("Y", "01/10/2025"),
///     CredentialItem::new("Z", "not-a-date"),
/// ];
/// let result = classify(&items, now, 30);
/// assert_eq!(result.active, vec!["X"]);
/// assert_eq!(result.expiring_soon, vec!["Y"]);
/// assert_eq!(result.expired, vec!["Z"]);
/// ```
pub fn classify(
    items: &[CredentialItem],
    reference: NaiveDateTime,
    threshold_days: i64,
) -> ClassificationResult {
    let mut result = ClassificationResult::default();

    for item in items {
        let bucket = match status_of(item, reference, threshold_days) {
            ExpiryStatus::Active => &mut result.active,
            ExpiryStatus::ExpiringSoon => &mut result.expiring_soon,
            ExpiryStatus::Expired => &mut result.expired,
        };
        bucket.push(item.name().to_string());
    }

    result
}
