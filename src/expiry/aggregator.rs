//! Per-application aggregation into the report artifacts.
//!
//! Two passes look at each credential's date. [`classify`] buckets items and
//! counts unparsable dates as expired; [`near_expiry_rows`] lists only items
//! inside `0..=threshold_days` and skips unparsable dates. They share only
//! the date primitives in [`crate::utils::time`].

use crate::expiry::classifier::classify;
use crate::expiry::types::{
    DetailedRecord, ExpiringSoonRow, ExpiryReport, FilteredRecord, SummaryRow,
};
use crate::inventory::types::{Application, CredentialKind};
use crate::utils::time::{days_remaining, parse_end_date};
use chrono::NaiveDateTime;

/// Builds every report artifact for `applications`, in input order.
pub fn aggregate(
    applications: &[Application],
    reference: NaiveDateTime,
    threshold_days: i64,
) -> ExpiryReport {
    let mut report = ExpiryReport::default();

    for app in applications {
        let secrets = classify(&app.secrets, reference, threshold_days);
        let certificates = classify(&app.certificates, reference, threshold_days);

        if !app.secrets.is_empty() {
            report
                .summary
                .push(SummaryRow::new(app, CredentialKind::Secret, &secrets));
        }
        if !app.certificates.is_empty() {
            report
                .summary
                .push(SummaryRow::new(app, CredentialKind::Certificate, &certificates));
        }

        let secret_match = secrets.is_single_rotation_pair();
        let certificate_match = certificates.is_single_rotation_pair();

        let detail = DetailedRecord {
            app_id: app.app_id().to_string(),
            tenant_name: app.tenant_name().to_string(),
            display_name: app.display_name().to_string(),
            secrets,
            certificates,
        };

        if secret_match {
            report.filtered.push(FilteredRecord {
                kind: CredentialKind::Secret,
                record: detail.clone(),
            });
        }
        if certificate_match {
            report.filtered.push(FilteredRecord {
                kind: CredentialKind::Certificate,
                record: detail.clone(),
            });
        }

        report.detailed.push(detail);
        report
            .expiring_soon
            .extend(near_expiry_rows(app, reference, threshold_days));
    }

    report
}

/// Secrets then certificates of `app` expiring within `0..=threshold_days`.
///
/// Items with unparsable dates are left out.
pub fn near_expiry_rows(
    app: &Application,
    reference: NaiveDateTime,
    threshold_days: i64,
) -> Vec<ExpiringSoonRow> {
    let mut rows = Vec::new();

    for (kind, items) in app.credential_groups() {
        for item in items {
            let Some(end_date) = parse_end_date(item.end_date_time()) else {
                continue;
            };
            let days = days_remaining(end_date, reference);
            if (0..=threshold_days).contains(&days) {
                rows.push(ExpiringSoonRow {
                    app_id: app.app_id().to_string(),
                    display_name: app.display_name().to_string(),
                    kind,
                    name: item.name().to_string(),
                    days_remaining: days,
                });
            }
        }
    }

    rows
}
