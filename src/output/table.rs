//! ASCII table rendering for the summary and expiring-soon reports.

use crate::expiry::types::{ExpiringSoonRow, SummaryRow};
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table, TableComponent};

pub const SUMMARY_HEADER: [&str; 7] = [
    "AppId",
    "TenantName",
    "Application",
    "Type",
    "Active",
    "Expiring",
    "Expired",
];

pub const EXPIRING_HEADER: [&str; 5] = ["AppId", "DisplayName", "Type", "Name", "Days Remaining"];

/// Boxed table with `+---+` rules and centered cells.
fn boxed_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table.set_style(TableComponent::HeaderLines, '-');
    table.set_style(TableComponent::MiddleHeaderIntersections, '+');
    table.set_header(header.to_vec());
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }
    table
}

pub fn summary_table(rows: &[SummaryRow]) -> Table {
    let mut table = boxed_table(&SUMMARY_HEADER);
    for row in rows {
        table.add_row(vec![
            row.app_id.clone(),
            row.tenant_name.clone(),
            row.display_name.clone(),
            row.kind.to_string(),
            row.active.to_string(),
            row.expiring_soon.to_string(),
            row.expired.to_string(),
        ]);
    }
    table
}

pub fn expiring_table(rows: &[ExpiringSoonRow]) -> Table {
    let mut table = boxed_table(&EXPIRING_HEADER);
    for row in rows {
        table.add_row(vec![
            row.app_id.clone(),
            row.display_name.clone(),
            row.kind.to_string(),
            row.name.clone(),
            row.days_remaining.to_string(),
        ]);
    }
    table
}
