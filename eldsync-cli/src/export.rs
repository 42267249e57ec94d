///! Excel report writers
///!
///! Serializes the two derived views into `.xlsx` workbooks with the
///! fixed column layouts expected by dispatch: a duty-status report over
///! raw entries and a vehicle-conflict report over normalized records.

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use eldsync_core::types::{DriverRecord, RawEntry};

const STATUS_HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Phone Number",
    "Vehicle Display ID",
    "Log Status",
];

const CONFLICT_HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Phone Number",
    "Truck Number",
    "Drivers on Same Truck",
];

fn write_header_row(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    for col in 0..headers.len() {
        sheet.set_column_width(col as u16, 18)?;
    }
    Ok(())
}

/// Write the duty-status report: one row per matching raw entry.
pub fn write_status_report(entries: &[RawEntry], output: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("ELD Status")?;
    write_header_row(sheet, &STATUS_HEADERS)?;

    for (idx, entry) in entries.iter().enumerate() {
        let row = (idx + 1) as u32;
        let driver = entry.driver.clone().unwrap_or_default();
        let vehicle = entry.vehicle.clone().unwrap_or_default();

        sheet.write_string(row, 0, driver.first_name.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 1, driver.last_name.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 2, driver.phone_no.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 3, vehicle.display_id.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 4, entry.status().unwrap_or(""))?;
    }

    workbook
        .save(output)
        .with_context(|| format!("Failed to save status report to {}", output.display()))?;
    Ok(())
}

/// Write the vehicle-conflict report: one row per conflicted driver.
pub fn write_conflict_report(records: &[DriverRecord], output: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Vehicle Conflicts")?;
    write_header_row(sheet, &CONFLICT_HEADERS)?;

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, &record.first_name)?;
        sheet.write_string(row, 1, &record.last_name)?;
        sheet.write_string(row, 2, &record.phone_number)?;
        sheet.write_string(row, 3, record.vehicle_id.as_deref().unwrap_or(""))?;
        if let Some(count) = record.vehicle_occupancy {
            sheet.write_number(row, 4, count as f64)?;
        }
    }

    workbook
        .save(output)
        .with_context(|| format!("Failed to save conflict report to {}", output.display()))?;
    Ok(())
}
