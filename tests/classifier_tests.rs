// Classification properties and the documented expiry scenarios.
// All cases use a fixed reference of 2025-01-01 00:00 and a 30 day threshold
// unless stated otherwise.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use cred_expiry_tools::expiry::aggregator::{aggregate, near_expiry_rows};
use cred_expiry_tools::expiry::classifier::classify;
use cred_expiry_tools::inventory::types::{Application, CredentialItem, CredentialKind};
use cred_expiry_tools::utils::time::{parse_reference_time, END_DATE_FORMAT};

const THRESHOLD: i64 = 30;

fn reference() -> NaiveDateTime {
    parse_reference_time("2025-01-01").unwrap()
}

/// Item expiring `offset` days after the reference date
fn item_in(name: &str, offset: i64) -> CredentialItem {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset);
    CredentialItem::new(name, &date.format(END_DATE_FORMAT).to_string())
}

fn app_with_secrets(secrets: Vec<CredentialItem>) -> Application {
    Application {
        app_id: Some("app-1".to_string()),
        tenant_name: Some("Tenant".to_string()),
        display_name: Some("Billing".to_string()),
        secrets,
        certificates: vec![],
    }
}

#[test]
fn test_negative_days_always_expired() {
    for offset in [-1, -2, -30, -365, -4000] {
        let result = classify(&[item_in("x", offset)], reference(), THRESHOLD);
        assert_eq!(result.expired, vec!["x"], "offset {}", offset);
    }
}

#[test]
fn test_window_inclusive_on_both_ends() {
    for offset in 0..=THRESHOLD {
        let result = classify(&[item_in("x", offset)], reference(), THRESHOLD);
        assert_eq!(result.expiring_soon, vec!["x"], "offset {}", offset);
    }
}

#[test]
fn test_beyond_threshold_active() {
    for offset in [THRESHOLD + 1, THRESHOLD + 2, 365, 3650] {
        let result = classify(&[item_in("x", offset)], reference(), THRESHOLD);
        assert_eq!(result.active, vec!["x"], "offset {}", offset);
    }
}

#[test]
fn test_custom_threshold() {
    let items = vec![item_in("a", 7), item_in("b", 8)];
    let result = classify(&items, reference(), 7);
    assert_eq!(result.expiring_soon, vec!["a"]);
    assert_eq!(result.active, vec!["b"]);
}

#[test]
fn test_time_of_day_moves_boundary() {
    // Half a day after the reference midnight, an item expiring "today" is
    // already past and one 31 days out has only 30 whole days left.
    let midday = reference() + Duration::hours(12);
    let items = vec![item_in("today", 0), item_in("edge", 31)];
    let result = classify(&items, midday, THRESHOLD);
    assert_eq!(result.expired, vec!["today"]);
    assert_eq!(result.expiring_soon, vec!["edge"]);
}

#[test]
fn test_unparsable_dates_expired_but_not_listed() {
    let garbage = [
        "not-a-date",
        "Unknown",
        "",
        "2025-01-10",
        "10.01.2025",
        "01/10/25",
        "00/10/2025",
        " 01/10/2025",
        "\t01/10/2025",
        "01/ 10/2025",
        "01/10/2025\n",
    ];
    let items: Vec<CredentialItem> = garbage
        .iter()
        .enumerate()
        .map(|(i, date)| CredentialItem::new(&format!("bad{}", i), date))
        .collect();

    let result = classify(&items, reference(), THRESHOLD);
    assert_eq!(result.expired.len(), garbage.len());
    assert!(result.active.is_empty());
    assert!(result.expiring_soon.is_empty());

    let rows = near_expiry_rows(&app_with_secrets(items), reference(), THRESHOLD);
    assert!(rows.is_empty());
}

#[test]
fn test_scenario_a_active() {
    let result = classify(
        &[CredentialItem::new("X", "02/15/2025")],
        reference(),
        THRESHOLD,
    );
    assert_eq!(result.active, vec!["X"]);
    assert!(result.expiring_soon.is_empty());
    assert!(result.expired.is_empty());
}

#[test]
fn test_scenario_b_expiring_soon_and_listed() {
    let app = app_with_secrets(vec![CredentialItem::new("Y", "01/10/2025")]);
    let report = aggregate(&[app], reference(), THRESHOLD);

    assert_eq!(report.detailed[0].secrets.expiring_soon, vec!["Y"]);
    assert_eq!(report.expiring_soon.len(), 1);
    let row = &report.expiring_soon[0];
    assert_eq!(row.name, "Y");
    assert_eq!(row.days_remaining, 9);
    assert_eq!(row.kind, CredentialKind::Secret);
    assert_eq!(row.app_id, "app-1");
    assert_eq!(row.display_name, "Billing");
}

#[test]
fn test_scenario_c_past_date() {
    let app = app_with_secrets(vec![CredentialItem::new("Z", "12/01/2024")]);
    let report = aggregate(&[app], reference(), THRESHOLD);

    assert_eq!(report.detailed[0].secrets.expired, vec!["Z"]);
    assert!(report.expiring_soon.is_empty());
}

#[test]
fn test_scenario_d_garbage_date() {
    let app = app_with_secrets(vec![CredentialItem::new("W", "not-a-date")]);
    let report = aggregate(&[app], reference(), THRESHOLD);

    assert_eq!(report.detailed[0].secrets.expired, vec!["W"]);
    assert_eq!(report.summary[0].expired, 1);
    assert!(report.expiring_soon.is_empty());
}
